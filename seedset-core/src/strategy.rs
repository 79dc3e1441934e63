//! Insertion and comparison strategies.
//!
//! Strategies own the fixture format: how a stream of bytes becomes
//! documents in the store, and how live contents are checked against it.
//! The default implementations below speak the JSON [`DataSet`] format;
//! custom strategies plug in through
//! [`DatasetOperation::builder`](crate::DatasetOperation::builder).

use std::collections::BTreeSet;
use std::io::Read;

use crate::connection::NamespaceHandle;
use crate::error::{BoxError, Mismatch, MismatchError};
use crate::fixture::DataSet;
use crate::system::is_system_container;

/// Failure raised by a comparison strategy.
///
/// [`DatasetOperation`](crate::DatasetOperation) distinguishes the two
/// variants by type: `Mismatch` propagates unchanged, everything else is
/// wrapped as an infrastructure error.
#[derive(Debug, thiserror::Error)]
pub enum CompareError {
    /// The store contents differ from the expected dataset.
    #[error(transparent)]
    Mismatch(#[from] MismatchError),

    /// Stream or store access failed before a verdict could be reached.
    #[error(transparent)]
    Other(#[from] BoxError),
}

/// Writes a fixture's documents into the store.
pub trait InsertionStrategy<H: NamespaceHandle> {
    /// Insert every document the fixture describes through `handle`.
    fn insert(&self, handle: &H, fixture: &mut dyn Read) -> Result<(), BoxError>;
}

/// Checks live store contents against a fixture.
pub trait ComparisonStrategy<H: NamespaceHandle> {
    /// Compare the store's contents with the fixture, raising
    /// [`CompareError::Mismatch`] when they differ.
    fn compare(&self, handle: &H, fixture: &mut dyn Read) -> Result<(), CompareError>;
}

/// Default insertion strategy for the JSON [`DataSet`] fixture format.
///
/// Containers are created implicitly by the store on first write; an empty
/// fixture inserts nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonInsertion;

impl<H: NamespaceHandle> InsertionStrategy<H> for JsonInsertion {
    fn insert(&self, handle: &H, fixture: &mut dyn Read) -> Result<(), BoxError> {
        let dataset = DataSet::from_reader(fixture)?;
        for (container, documents) in dataset.iter() {
            log::debug!("inserting {} documents into {}", documents.len(), container);
            handle.insert_documents(container, documents)?;
        }
        Ok(())
    }
}

/// Default comparison strategy for the JSON [`DataSet`] fixture format.
///
/// Collects every difference before failing: containers described by the
/// fixture but absent from the store, user containers the fixture does not
/// describe, per-container document counts, and expected documents missing
/// from the live container (order-insensitive, exact value equality).
/// System containers are exempt from the unexpected-container check.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonComparison;

impl<H: NamespaceHandle> ComparisonStrategy<H> for JsonComparison {
    fn compare(&self, handle: &H, fixture: &mut dyn Read) -> Result<(), CompareError> {
        let expected = DataSet::from_reader(fixture)?;

        let live: BTreeSet<String> = handle
            .container_names()?
            .into_iter()
            .filter(|name| !is_system_container(name))
            .collect();

        let mut mismatches = Vec::new();

        for name in expected.containers() {
            if !live.contains(name) {
                mismatches.push(Mismatch::MissingContainer {
                    name: name.to_string(),
                });
            }
        }

        for name in &live {
            if expected.documents(name).is_none() {
                mismatches.push(Mismatch::UnexpectedContainer { name: name.clone() });
            }
        }

        for (container, expected_docs) in expected.iter() {
            if !live.contains(container) {
                continue;
            }

            let actual = handle.documents(container)?;
            if actual.len() != expected_docs.len() {
                mismatches.push(Mismatch::DocumentCountMismatch {
                    container: container.to_string(),
                    expected: expected_docs.len(),
                    actual: actual.len(),
                });
            }

            for document in expected_docs {
                if !actual.contains(document) {
                    mismatches.push(Mismatch::MissingDocument {
                        container: container.to_string(),
                        document: document.clone(),
                    });
                }
            }
        }

        if mismatches.is_empty() {
            Ok(())
        } else {
            Err(MismatchError::new(mismatches).into())
        }
    }
}
