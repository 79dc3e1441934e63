//! Integration tests for full dataset lifecycles.
//!
//! These tests exercise complete purge → insert → verify cycles through
//! the real `DatasetOperation` orchestration, with the in-memory store
//! standing in for a live document store.
