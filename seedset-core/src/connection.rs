//! Connection capability traits.
//!
//! The wire protocol and driver are external collaborators: a driver
//! binding (or the in-memory store in `seedset-testkit`) implements these
//! two traits and the rest of the crate stays driver-agnostic.

use crate::error::BoxError;

/// A document stored in a container.
///
/// The JSON value representation keeps the core independent of any
/// particular driver's document type.
pub type Document = serde_json::Value;

/// A live client session against a document store.
///
/// The session is owned exclusively by one
/// [`DatasetOperation`](crate::DatasetOperation) for the scope of a test's
/// setup/verify cycle. No internal locking is provided; parallel suites
/// must use one session per suite. Connection pooling, retries and
/// timeouts belong to the driver, not to this layer.
pub trait StoreConnection {
    /// The per-namespace handle type.
    type Namespace: NamespaceHandle;

    /// Resolve a handle to the named namespace.
    fn namespace(&self, name: &str) -> Result<Self::Namespace, BoxError>;

    /// Require the store to acknowledge writes before write calls return.
    ///
    /// Called once at [`DatasetOperation`](crate::DatasetOperation)
    /// construction; applies to the whole session and is not overridable
    /// per call.
    fn require_acknowledged_writes(&mut self);
}

/// A handle to one namespace within the store.
///
/// Authentication state is session-scoped and may be externally
/// invalidated, so callers re-check it on every access rather than caching
/// an "authenticated forever" flag.
pub trait NamespaceHandle {
    /// Whether this session is currently authenticated against the
    /// namespace.
    fn is_authenticated(&self) -> bool;

    /// Attempt to authenticate the session.
    ///
    /// Returns `Ok(false)` when the store rejects the credentials; `Err` is
    /// reserved for transport failures.
    fn authenticate(&mut self, username: &str, password: &str) -> Result<bool, BoxError>;

    /// Names of every container currently present, in no particular order.
    fn container_names(&self) -> Result<Vec<String>, BoxError>;

    /// Destroy a container and all of its documents.
    fn drop_container(&self, name: &str) -> Result<(), BoxError>;

    /// Write documents into a container, creating it on first write.
    fn insert_documents(&self, container: &str, documents: &[Document]) -> Result<(), BoxError>;

    /// All documents currently in a container, in insertion order.
    fn documents(&self, container: &str) -> Result<Vec<Document>, BoxError>;
}
