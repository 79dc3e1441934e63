//! Dataset lifecycle orchestration.

use std::io::Read;

use crate::config::StoreConfig;
use crate::connection::{NamespaceHandle, StoreConnection};
use crate::error::{DatasetError, Operation};
use crate::strategy::{
    CompareError, ComparisonStrategy, InsertionStrategy, JsonComparison, JsonInsertion,
};
use crate::system::is_system_container;

/// Sequences authenticate → (purge | insert | compare) against one store
/// connection.
///
/// One instance serves one test's setup/verify cycle and owns its
/// connection exclusively. All calls are synchronous and fail fast: no
/// retries, no partial-success reporting. Parallel suites must use one
/// instance (and one connection) per suite.
///
/// Construction switches the connection into acknowledged-write mode, so
/// the store confirms every write before the call returns.
pub struct DatasetOperation<C: StoreConnection> {
    connection: C,
    config: StoreConfig,
    insertion: Box<dyn InsertionStrategy<C::Namespace>>,
    comparison: Box<dyn ComparisonStrategy<C::Namespace>>,
}

impl<C: StoreConnection> DatasetOperation<C> {
    /// Create an operation with the default JSON strategies.
    pub fn new(connection: C, config: StoreConfig) -> Self {
        Self::builder(connection, config).build()
    }

    /// Start building an operation with non-default strategies.
    pub fn builder(connection: C, config: StoreConfig) -> DatasetOperationBuilder<C> {
        DatasetOperationBuilder {
            connection,
            config,
            insertion: None,
            comparison: None,
        }
    }

    /// Seed the namespace with the documents a fixture describes.
    ///
    /// Does not purge first; callers needing isolation run
    /// [`purge_all`](Self::purge_all) before inserting. An empty fixture
    /// inserts nothing and is not an error.
    pub fn insert(&self, mut fixture: impl Read) -> Result<(), DatasetError> {
        let handle = self.authenticated_namespace(Operation::Insert)?;
        self.insertion
            .insert(&handle, &mut fixture)
            .map_err(|e| DatasetError::infrastructure(Operation::Insert, e))
    }

    /// Drop every user container in the namespace.
    ///
    /// System containers are skipped silently; enumeration order is
    /// unspecified. A container that fails to drop aborts the whole purge.
    /// Purging an already purged namespace is a no-op.
    pub fn purge_all(&self) -> Result<(), DatasetError> {
        let handle = self.authenticated_namespace(Operation::Purge)?;
        let names = handle
            .container_names()
            .map_err(|e| DatasetError::infrastructure(Operation::Purge, e))?;

        for name in names {
            if is_system_container(&name) {
                continue;
            }
            log::debug!("dropping container {}", name);
            handle
                .drop_container(&name)
                .map_err(|e| DatasetError::infrastructure(Operation::Purge, e))?;
        }
        Ok(())
    }

    /// Check the namespace's live contents against an expected fixture.
    ///
    /// Returns `Ok(true)` when they match; this method never returns
    /// `Ok(false)`. A mismatch is always raised as
    /// [`DatasetError::Mismatch`], untouched, so tests can tell "the data
    /// differs" apart from "the harness is broken".
    pub fn verify_matches(&self, mut fixture: impl Read) -> Result<bool, DatasetError> {
        let handle = self.authenticated_namespace(Operation::Compare)?;
        match self.comparison.compare(&handle, &mut fixture) {
            Ok(()) => Ok(true),
            Err(CompareError::Mismatch(mismatch)) => Err(DatasetError::Mismatch(mismatch)),
            Err(CompareError::Other(cause)) => {
                Err(DatasetError::infrastructure(Operation::Compare, cause))
            }
        }
    }

    /// The live underlying connection, for collaborators that need direct
    /// store access. No authentication side effect.
    pub fn connection(&self) -> &C {
        &self.connection
    }

    /// Resolve the configured namespace and authenticate when needed.
    ///
    /// Re-run on every operation: authentication state is session-scoped
    /// and may have been invalidated since the last call.
    fn authenticated_namespace(&self, operation: Operation) -> Result<C::Namespace, DatasetError> {
        let mut handle = self
            .connection
            .namespace(self.config.namespace())
            .map_err(|e| DatasetError::infrastructure(operation, e))?;

        if let (Some(username), Some(password)) = (self.config.username(), self.config.password()) {
            if !handle.is_authenticated() {
                log::debug!("authenticating against namespace {}", self.config.namespace());
                let accepted = handle
                    .authenticate(username, password)
                    .map_err(|e| DatasetError::infrastructure(operation, e))?;
                if !accepted {
                    return Err(DatasetError::CredentialsRejected {
                        namespace: self.config.namespace().to_string(),
                    });
                }
            }
        }

        Ok(handle)
    }
}

/// Builder for a [`DatasetOperation`] with pluggable strategies.
///
/// Both strategies default to the JSON implementations and can be replaced
/// independently.
pub struct DatasetOperationBuilder<C: StoreConnection> {
    connection: C,
    config: StoreConfig,
    insertion: Option<Box<dyn InsertionStrategy<C::Namespace>>>,
    comparison: Option<Box<dyn ComparisonStrategy<C::Namespace>>>,
}

impl<C: StoreConnection> DatasetOperationBuilder<C> {
    /// Replace the default insertion strategy.
    pub fn insertion(mut self, strategy: impl InsertionStrategy<C::Namespace> + 'static) -> Self {
        self.insertion = Some(Box::new(strategy));
        self
    }

    /// Replace the default comparison strategy.
    pub fn comparison(mut self, strategy: impl ComparisonStrategy<C::Namespace> + 'static) -> Self {
        self.comparison = Some(Box::new(strategy));
        self
    }

    /// Build the operation, switching the connection into
    /// acknowledged-write mode.
    pub fn build(self) -> DatasetOperation<C> {
        let mut connection = self.connection;
        connection.require_acknowledged_writes();
        DatasetOperation {
            connection,
            config: self.config,
            insertion: self.insertion.unwrap_or_else(|| Box::new(JsonInsertion)),
            comparison: self.comparison.unwrap_or_else(|| Box::new(JsonComparison)),
        }
    }
}
