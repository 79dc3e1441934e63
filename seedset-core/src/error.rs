//! SeedSet error types.
//!
//! The taxonomy matters more than the messages: a [`DatasetError::Mismatch`]
//! means "the data differs from what the test expected", everything else
//! means the test environment itself is broken. Callers dispatch on the
//! variant, never on message text.

use std::fmt;

use crate::connection::Document;

/// Boxed error type for opaque collaborator failures (drivers, strategies,
/// fixture streams).
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// The dataset operation a failure occurred in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Seeding documents into the store.
    Insert,
    /// Dropping user containers.
    Purge,
    /// Comparing live contents against an expected dataset.
    Compare,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Insert => write!(f, "inserting"),
            Operation::Purge => write!(f, "purging"),
            Operation::Compare => write!(f, "comparing"),
        }
    }
}

/// Error type for dataset operations.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    /// The store rejected the configured credentials.
    ///
    /// Raised before any container is read, written or dropped. The message
    /// names the namespace but never the password.
    #[error("credentials provided for namespace {namespace:?} are not valid")]
    CredentialsRejected {
        /// The namespace the authentication attempt was made against.
        namespace: String,
    },

    /// Live store contents did not match the expected dataset.
    ///
    /// Propagated from the comparison strategy unchanged, never wrapped.
    #[error(transparent)]
    Mismatch(#[from] MismatchError),

    /// Any other failure: unreadable stream, store unavailable, a container
    /// that would not drop, an unexpected strategy error.
    #[error("unexpected error {operation} dataset: {source}")]
    Infrastructure {
        /// The operation that failed.
        operation: Operation,
        /// The underlying cause.
        #[source]
        source: BoxError,
    },
}

impl DatasetError {
    /// Create an infrastructure error tagged with the failed operation.
    pub fn infrastructure(operation: Operation, source: impl Into<BoxError>) -> Self {
        DatasetError::Infrastructure {
            operation,
            source: source.into(),
        }
    }

    /// Check if this is a dataset mismatch.
    pub fn is_mismatch(&self) -> bool {
        matches!(self, DatasetError::Mismatch(_))
    }

    /// Check if this is a rejected-credentials error.
    pub fn is_credentials_rejected(&self) -> bool {
        matches!(self, DatasetError::CredentialsRejected { .. })
    }

    /// Check if this is an infrastructure error.
    pub fn is_infrastructure(&self) -> bool {
        matches!(self, DatasetError::Infrastructure { .. })
    }
}

/// Raised when live store contents differ from the expected dataset.
///
/// Carries every difference found, not just the first one.
#[derive(Debug, Clone, PartialEq)]
pub struct MismatchError {
    /// Individual differences between expected and live contents.
    pub mismatches: Vec<Mismatch>,
}

impl MismatchError {
    /// Create a mismatch error from the differences found.
    pub fn new(mismatches: Vec<Mismatch>) -> Self {
        Self { mismatches }
    }

    /// Get the number of differences.
    pub fn len(&self) -> usize {
        self.mismatches.len()
    }

    /// Check if there are no differences.
    pub fn is_empty(&self) -> bool {
        self.mismatches.is_empty()
    }

    /// Format the differences as a human-readable report.
    pub fn report(&self) -> String {
        let mut lines = vec![format!(
            "store contents differ from expected dataset ({} differences):",
            self.mismatches.len()
        )];
        for m in &self.mismatches {
            lines.push(format!("  - {}", m));
        }
        lines.join("\n")
    }
}

impl fmt::Display for MismatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.report())
    }
}

impl std::error::Error for MismatchError {}

/// A single difference between expected and live store contents.
#[derive(Debug, Clone, PartialEq)]
pub enum Mismatch {
    /// Container described by the fixture is absent from the store.
    MissingContainer { name: String },

    /// User container present in the store but absent from the fixture.
    UnexpectedContainer { name: String },

    /// Document counts differ for a container.
    DocumentCountMismatch {
        container: String,
        expected: usize,
        actual: usize,
    },

    /// Expected document not found in the live container.
    MissingDocument { container: String, document: Document },
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mismatch::MissingContainer { name } => {
                write!(f, "missing container: {}", name)
            }
            Mismatch::UnexpectedContainer { name } => {
                write!(f, "unexpected container: {}", name)
            }
            Mismatch::DocumentCountMismatch {
                container,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "document count for {}: expected {}, got {}",
                    container, expected, actual
                )
            }
            Mismatch::MissingDocument {
                container,
                document,
            } => {
                write!(f, "document not found in {}: {}", container, document)
            }
        }
    }
}
