//! Store configuration.

use std::fmt;

/// Configuration for the target store namespace.
///
/// Immutable once constructed. Credentials are optional; when both a
/// username and a password are present, every namespace access is
/// authenticated before containers are read, written or dropped.
///
/// Loading configuration from files or the environment belongs to the
/// caller; this type only carries the values.
#[derive(Clone)]
pub struct StoreConfig {
    namespace: String,
    username: Option<String>,
    password: Option<String>,
}

impl StoreConfig {
    /// Create a configuration without credentials.
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            username: None,
            password: None,
        }
    }

    /// Create a configuration with credentials.
    pub fn with_credentials(
        namespace: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            namespace: namespace.into(),
            username: Some(username.into()),
            password: Some(password.into()),
        }
    }

    /// The namespace (logical database) this configuration addresses.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Whether both a username and a password were supplied.
    pub fn has_credentials(&self) -> bool {
        self.username.is_some() && self.password.is_some()
    }

    /// The configured username, if any.
    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    /// The configured password, if any.
    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }
}

// The password must never reach logs or failure output.
impl fmt::Debug for StoreConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreConfig")
            .field("namespace", &self.namespace)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}
