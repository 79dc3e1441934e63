//! Fixture construction helpers.

use std::io::Cursor;
use std::path::Path;

use fs_err as fs;
use seedset_core::Document;

/// Builds a JSON dataset fixture in code.
///
/// ```
/// use seedset_testkit::FixtureBuilder;
/// use serde_json::json;
///
/// let fixture = FixtureBuilder::new()
///     .container("orders", vec![json!({"id": 1})])
///     .container("users", vec![json!({"id": 2})]);
///
/// let bytes = fixture.to_bytes();
/// assert!(!bytes.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct FixtureBuilder {
    containers: serde_json::Map<String, serde_json::Value>,
}

impl FixtureBuilder {
    /// Create an empty fixture.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a container and its documents.
    pub fn container(mut self, name: &str, documents: Vec<Document>) -> Self {
        self.containers
            .insert(name.to_string(), serde_json::Value::Array(documents));
        self
    }

    /// Render the fixture as JSON bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        // A JSON object with string keys always serializes.
        serde_json::to_vec(&serde_json::Value::Object(self.containers.clone()))
            .expect("fixture serialization")
    }

    /// Render the fixture as a readable stream.
    ///
    /// Each call yields a fresh stream; dataset operations consume a stream
    /// exactly once.
    pub fn reader(&self) -> Cursor<Vec<u8>> {
        Cursor::new(self.to_bytes())
    }
}

/// Open a fixture file as a readable stream.
pub fn fixture_from_file(path: impl AsRef<Path>) -> std::io::Result<fs::File> {
    fs::File::open(path.as_ref())
}
