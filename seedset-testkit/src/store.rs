//! In-memory document store.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::{Arc, Mutex, MutexGuard};

use seedset_core::{BoxError, Document, NamespaceHandle, StoreConnection};

#[derive(Default)]
struct NamespaceState {
    containers: BTreeMap<String, Vec<Document>>,
    authenticated: bool,
    poisoned: BTreeSet<String>,
}

#[derive(Default)]
struct StoreState {
    namespaces: HashMap<String, NamespaceState>,
    credentials: HashMap<String, (String, String)>,
    acknowledged_writes: bool,
}

impl StoreState {
    fn namespace_mut(&mut self, name: &str) -> &mut NamespaceState {
        self.namespaces.entry(name.to_string()).or_default()
    }
}

/// An in-memory document store for tests.
///
/// Implements the `seedset-core` connection traits so a
/// [`DatasetOperation`](seedset_core::DatasetOperation) can run a full
/// purge/insert/verify cycle without a live store. State is shared between
/// the store and every connection it hands out, so tests can seed and
/// inspect directly while an operation runs through the traits.
#[derive(Clone, Default)]
pub struct MemoryStore {
    state: Arc<Mutex<StoreState>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a connection sharing this store's state.
    pub fn connect(&self) -> MemoryConnection {
        MemoryConnection {
            state: Arc::clone(&self.state),
        }
    }

    /// Gate a namespace behind credentials.
    ///
    /// Until a session authenticates with exactly these values,
    /// `authenticate` returns `Ok(false)` for the namespace.
    pub fn require_credentials(&self, namespace: &str, username: &str, password: &str) {
        self.lock()
            .credentials
            .insert(namespace.to_string(), (username.to_string(), password.to_string()));
    }

    /// Clear a namespace's authenticated flag, as an expiring session would.
    pub fn invalidate_authentication(&self, namespace: &str) {
        self.lock().namespace_mut(namespace).authenticated = false;
    }

    /// Whether the session is currently authenticated against a namespace.
    pub fn is_authenticated(&self, namespace: &str) -> bool {
        self.lock()
            .namespaces
            .get(namespace)
            .map(|ns| ns.authenticated)
            .unwrap_or(false)
    }

    /// Put documents into a container directly, bypassing the traits.
    pub fn seed(&self, namespace: &str, container: &str, documents: Vec<Document>) {
        self.lock()
            .namespace_mut(namespace)
            .containers
            .entry(container.to_string())
            .or_default()
            .extend(documents);
    }

    /// Container names currently present in a namespace, sorted.
    pub fn container_names(&self, namespace: &str) -> Vec<String> {
        self.lock()
            .namespaces
            .get(namespace)
            .map(|ns| ns.containers.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// Documents currently in a container.
    pub fn documents(&self, namespace: &str, container: &str) -> Vec<Document> {
        self.lock()
            .namespaces
            .get(namespace)
            .and_then(|ns| ns.containers.get(container).cloned())
            .unwrap_or_default()
    }

    /// Make every future drop of one container fail.
    pub fn poison_container(&self, namespace: &str, container: &str) {
        self.lock()
            .namespace_mut(namespace)
            .poisoned
            .insert(container.to_string());
    }

    /// Whether a connection switched the session into acknowledged writes.
    pub fn write_acknowledgement_required(&self) -> bool {
        self.lock().acknowledged_writes
    }

    fn lock(&self) -> MutexGuard<'_, StoreState> {
        self.state.lock().expect("memory store lock poisoned")
    }
}

/// A connection handed out by [`MemoryStore::connect`].
pub struct MemoryConnection {
    state: Arc<Mutex<StoreState>>,
}

impl MemoryConnection {
    fn lock(&self) -> MutexGuard<'_, StoreState> {
        self.state.lock().expect("memory store lock poisoned")
    }
}

impl StoreConnection for MemoryConnection {
    type Namespace = MemoryNamespace;

    fn namespace(&self, name: &str) -> Result<MemoryNamespace, BoxError> {
        Ok(MemoryNamespace {
            state: Arc::clone(&self.state),
            name: name.to_string(),
        })
    }

    fn require_acknowledged_writes(&mut self) {
        self.lock().acknowledged_writes = true;
    }
}

/// A handle to one namespace of a [`MemoryStore`].
pub struct MemoryNamespace {
    state: Arc<Mutex<StoreState>>,
    name: String,
}

impl MemoryNamespace {
    fn lock(&self) -> MutexGuard<'_, StoreState> {
        self.state.lock().expect("memory store lock poisoned")
    }
}

impl NamespaceHandle for MemoryNamespace {
    fn is_authenticated(&self) -> bool {
        self.lock()
            .namespaces
            .get(&self.name)
            .map(|ns| ns.authenticated)
            .unwrap_or(false)
    }

    fn authenticate(&mut self, username: &str, password: &str) -> Result<bool, BoxError> {
        let mut state = self.lock();
        let accepted = match state.credentials.get(&self.name) {
            Some((user, pass)) => user == username && pass == password,
            None => true,
        };
        if accepted {
            state.namespace_mut(&self.name).authenticated = true;
        }
        Ok(accepted)
    }

    fn container_names(&self) -> Result<Vec<String>, BoxError> {
        Ok(self
            .lock()
            .namespaces
            .get(&self.name)
            .map(|ns| ns.containers.keys().cloned().collect())
            .unwrap_or_default())
    }

    fn drop_container(&self, name: &str) -> Result<(), BoxError> {
        let mut state = self.lock();
        let namespace = state.namespace_mut(&self.name);
        if namespace.poisoned.contains(name) {
            return Err(format!("container {} refused to drop", name).into());
        }
        namespace.containers.remove(name);
        Ok(())
    }

    fn insert_documents(&self, container: &str, documents: &[Document]) -> Result<(), BoxError> {
        self.lock()
            .namespace_mut(&self.name)
            .containers
            .entry(container.to_string())
            .or_default()
            .extend_from_slice(documents);
        Ok(())
    }

    fn documents(&self, container: &str) -> Result<Vec<Document>, BoxError> {
        Ok(self
            .lock()
            .namespaces
            .get(&self.name)
            .and_then(|ns| ns.containers.get(container).cloned())
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_seed_and_inspect() {
        let store = MemoryStore::new();
        store.seed("testdb", "orders", vec![json!({"id": 1})]);
        store.seed("testdb", "orders", vec![json!({"id": 2})]);

        assert_eq!(store.container_names("testdb"), ["orders"]);
        assert_eq!(store.documents("testdb", "orders").len(), 2);
        assert!(store.documents("testdb", "missing").is_empty());
    }

    #[test]
    fn test_namespaces_are_isolated() {
        let store = MemoryStore::new();
        store.seed("a", "orders", vec![json!({"id": 1})]);

        assert_eq!(store.container_names("a"), ["orders"]);
        assert!(store.container_names("b").is_empty());
    }

    #[test]
    fn test_trait_view_matches_direct_view() {
        let store = MemoryStore::new();
        store.seed("testdb", "orders", vec![json!({"id": 1})]);

        let handle = store.connect().namespace("testdb").unwrap();
        assert_eq!(handle.container_names().unwrap(), ["orders"]);
        assert_eq!(handle.documents("orders").unwrap(), vec![json!({"id": 1})]);

        handle.insert_documents("users", &[json!({"id": 2})]).unwrap();
        assert_eq!(store.container_names("testdb"), ["orders", "users"]);
    }

    #[test]
    fn test_credential_gate() {
        let store = MemoryStore::new();
        store.require_credentials("testdb", "tester", "secret");

        let mut handle = store.connect().namespace("testdb").unwrap();
        assert!(!handle.is_authenticated());
        assert!(!handle.authenticate("tester", "wrong").unwrap());
        assert!(!handle.is_authenticated());
        assert!(handle.authenticate("tester", "secret").unwrap());
        assert!(handle.is_authenticated());

        store.invalidate_authentication("testdb");
        assert!(!handle.is_authenticated());
    }

    #[test]
    fn test_ungated_namespace_accepts_anything() {
        let store = MemoryStore::new();
        let mut handle = store.connect().namespace("testdb").unwrap();
        assert!(handle.authenticate("anyone", "anything").unwrap());
    }

    #[test]
    fn test_poisoned_container_refuses_to_drop() {
        let store = MemoryStore::new();
        store.seed("testdb", "orders", vec![json!({"id": 1})]);
        store.poison_container("testdb", "orders");

        let handle = store.connect().namespace("testdb").unwrap();
        assert!(handle.drop_container("orders").is_err());
        assert_eq!(store.container_names("testdb"), ["orders"]);

        // Unpoisoned containers still drop.
        handle.insert_documents("users", &[json!({"id": 2})]).unwrap();
        handle.drop_container("users").unwrap();
        assert_eq!(store.container_names("testdb"), ["orders"]);
    }

    #[test]
    fn test_write_acknowledgement_flag() {
        let store = MemoryStore::new();
        assert!(!store.write_acknowledgement_required());

        let mut connection = store.connect();
        connection.require_acknowledged_writes();
        assert!(store.write_acknowledgement_required());
    }
}
