//! SeedSet Core - dataset lifecycle management for document stores.
//!
//! Puts a document-oriented store into a known state before a test and
//! verifies the store's contents afterwards, without leaking state between
//! test cases.
//!
//! # Key Types
//!
//! - [`DatasetOperation`]: sequences authenticate → purge / insert / verify
//!   against one connection
//! - [`StoreConfig`]: namespace name plus optional credentials
//! - [`StoreConnection`] / [`NamespaceHandle`]: capability traits a driver
//!   binding implements
//! - [`InsertionStrategy`] / [`ComparisonStrategy`]: pluggable fixture
//!   handling, defaulting to the JSON [`DataSet`] format
//!
//! # Error Taxonomy
//!
//! [`DatasetError::Mismatch`] means the data differs from what the test
//! expected; [`DatasetError::CredentialsRejected`] and
//! [`DatasetError::Infrastructure`] mean the test environment itself is
//! broken and should abort the run rather than count as a normal failure.
//!
//! A ready-made in-memory store implementing the connection traits lives in
//! the companion `seedset-testkit` crate.

mod config;
mod connection;
mod error;
mod fixture;
mod operation;
mod strategy;
mod system;

#[cfg(test)]
mod testutil;

pub use config::StoreConfig;
pub use connection::{Document, NamespaceHandle, StoreConnection};
pub use error::{BoxError, DatasetError, Mismatch, MismatchError, Operation};
pub use fixture::DataSet;
pub use operation::{DatasetOperation, DatasetOperationBuilder};
pub use strategy::{
    CompareError, ComparisonStrategy, InsertionStrategy, JsonComparison, JsonInsertion,
};
pub use system::{is_system_container, SYSTEM_CONTAINER_PREFIX};
