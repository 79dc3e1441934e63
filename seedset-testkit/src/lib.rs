//! SeedSet Test Kit - in-memory store and fixture helpers.
//!
//! This crate lets tests exercise `seedset-core` dataset operations without
//! a live document store, and gives downstream projects ready-made fixture
//! plumbing.
//!
//! # Key Types
//!
//! - [`MemoryStore`]: in-memory document store implementing the connection
//!   traits, with credential gating and failure injection
//! - [`FixtureBuilder`]: composes JSON dataset fixtures in code
//! - [`fixture_from_file`]: streams a fixture from disk
//!
//! # Example
//!
//! ```
//! use seedset_core::{DatasetOperation, StoreConfig};
//! use seedset_testkit::{FixtureBuilder, MemoryStore};
//! use serde_json::json;
//!
//! let store = MemoryStore::new();
//! let op = DatasetOperation::new(store.connect(), StoreConfig::new("testdb"));
//!
//! let fixture = FixtureBuilder::new()
//!     .container("orders", vec![json!({"id": 1, "total": 40})]);
//!
//! op.purge_all().unwrap();
//! op.insert(fixture.reader()).unwrap();
//! assert!(op.verify_matches(fixture.reader()).unwrap());
//! ```

mod fixture;
mod integration;
mod store;

pub use fixture::{fixture_from_file, FixtureBuilder};
pub use store::{MemoryConnection, MemoryNamespace, MemoryStore};

/// Re-export seedset_core for convenience in tests.
pub use seedset_core;
