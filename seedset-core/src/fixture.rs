//! Dataset fixture model.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io::Read;

use crate::connection::Document;
use crate::error::BoxError;

/// A parsed dataset fixture: container names mapped to their documents.
///
/// The on-stream representation is a single JSON object:
///
/// ```json
/// { "orders": [{"id": 1}], "users": [{"id": 2}, {"id": 3}] }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DataSet {
    containers: BTreeMap<String, Vec<Document>>,
}

impl DataSet {
    /// Parse a dataset from a fixture stream.
    ///
    /// The stream is read to the end exactly once. An empty or
    /// whitespace-only stream is an empty dataset, not an error.
    pub fn from_reader(reader: &mut dyn Read) -> Result<Self, BoxError> {
        let mut raw = String::new();
        reader.read_to_string(&mut raw)?;
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        let containers = serde_json::from_str(&raw)?;
        Ok(Self { containers })
    }

    /// Container names described by this fixture, sorted.
    pub fn containers(&self) -> impl Iterator<Item = &str> {
        self.containers.keys().map(String::as_str)
    }

    /// Documents for one container, if the fixture describes it.
    pub fn documents(&self, container: &str) -> Option<&[Document]> {
        self.containers.get(container).map(Vec::as_slice)
    }

    /// Iterate over (container, documents) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Document])> {
        self.containers
            .iter()
            .map(|(name, docs)| (name.as_str(), docs.as_slice()))
    }

    /// Whether the fixture describes no containers at all.
    pub fn is_empty(&self) -> bool {
        self.containers.is_empty()
    }
}
