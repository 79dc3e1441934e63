//! In-crate test doubles for the connection traits.
//!
//! Deliberately minimal; the full-featured in-memory store for downstream
//! users lives in `seedset-testkit`.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use crate::connection::{Document, NamespaceHandle, StoreConnection};
use crate::error::BoxError;

#[derive(Default)]
pub struct FakeState {
    pub containers: BTreeMap<String, Vec<Document>>,
    pub credentials: Option<(String, String)>,
    pub authenticated: bool,
    pub acknowledged_writes: bool,
    pub fail_drop: Option<String>,
    pub fail_listing: bool,
}

/// Single-namespace fake store, shared through clones.
#[derive(Clone, Default)]
pub struct FakeConnection {
    pub state: Rc<RefCell<FakeState>>,
}

impl FakeConnection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed(&self, container: &str, documents: Vec<Document>) {
        self.state
            .borrow_mut()
            .containers
            .entry(container.to_string())
            .or_default()
            .extend(documents);
    }

    pub fn container_names(&self) -> Vec<String> {
        self.state.borrow().containers.keys().cloned().collect()
    }

    pub fn documents(&self, container: &str) -> Vec<Document> {
        self.state
            .borrow()
            .containers
            .get(container)
            .cloned()
            .unwrap_or_default()
    }
}

impl StoreConnection for FakeConnection {
    type Namespace = FakeNamespace;

    fn namespace(&self, _name: &str) -> Result<FakeNamespace, BoxError> {
        Ok(FakeNamespace {
            state: Rc::clone(&self.state),
        })
    }

    fn require_acknowledged_writes(&mut self) {
        self.state.borrow_mut().acknowledged_writes = true;
    }
}

pub struct FakeNamespace {
    state: Rc<RefCell<FakeState>>,
}

impl NamespaceHandle for FakeNamespace {
    fn is_authenticated(&self) -> bool {
        self.state.borrow().authenticated
    }

    fn authenticate(&mut self, username: &str, password: &str) -> Result<bool, BoxError> {
        let mut state = self.state.borrow_mut();
        let accepted = match &state.credentials {
            Some((user, pass)) => user == username && pass == password,
            None => true,
        };
        if accepted {
            state.authenticated = true;
        }
        Ok(accepted)
    }

    fn container_names(&self) -> Result<Vec<String>, BoxError> {
        let state = self.state.borrow();
        if state.fail_listing {
            return Err("container listing failed".into());
        }
        Ok(state.containers.keys().cloned().collect())
    }

    fn drop_container(&self, name: &str) -> Result<(), BoxError> {
        let mut state = self.state.borrow_mut();
        if state.fail_drop.as_deref() == Some(name) {
            return Err(format!("container {} refused to drop", name).into());
        }
        state.containers.remove(name);
        Ok(())
    }

    fn insert_documents(&self, container: &str, documents: &[Document]) -> Result<(), BoxError> {
        self.state
            .borrow_mut()
            .containers
            .entry(container.to_string())
            .or_default()
            .extend_from_slice(documents);
        Ok(())
    }

    fn documents(&self, container: &str) -> Result<Vec<Document>, BoxError> {
        Ok(self
            .state
            .borrow()
            .containers
            .get(container)
            .cloned()
            .unwrap_or_default())
    }
}
