//! Snapshot registry for host-supplied type graphs
//!
//! A [`GraphSnapshot`] holds the frozen type nodes a host front-end hands
//! to the query layer, keyed by qualified name in declaration order. The
//! snapshot itself is plain data: building one never derives hierarchy or
//! closure information, and querying one never mutates it.

use crate::TypeHandle;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Snapshot interchange error
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// Malformed snapshot document
    #[error("Parse error: {0}")]
    Parse(String),

    /// Underlying file could not be read
    #[error("IO error: {0}")]
    Io(String),

    /// File extension other than `.json`
    #[error("Unsupported file extension: {0}. Expected .json")]
    UnsupportedExtension(String),

    /// A second node registered under an already-taken qualified name
    #[error("Duplicate type: {0}")]
    DuplicateType(String),
}

/// Read-only registry of type nodes, keyed by qualified name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GraphSnapshot {
    types: IndexMap<String, TypeHandle>,
}

impl GraphSnapshot {
    /// Create an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a snapshot from frozen nodes, keeping their order.
    pub fn from_nodes<I>(nodes: I) -> Result<Self, SnapshotError>
    where
        I: IntoIterator<Item = TypeHandle>,
    {
        let mut snapshot = Self::new();
        for node in nodes {
            snapshot.insert(node)?;
        }
        Ok(snapshot)
    }

    /// Register a node under its qualified name.
    ///
    /// A node whose qualified name is already taken is rejected; two
    /// distinct declarations never share one name in a well-formed graph.
    pub fn insert(&mut self, node: TypeHandle) -> Result<(), SnapshotError> {
        let qualified_name = node.qualified_name();
        if self.types.contains_key(&qualified_name) {
            return Err(SnapshotError::DuplicateType(qualified_name));
        }
        self.types.insert(qualified_name, node);
        Ok(())
    }

    /// Look up a node by qualified name (e.g. "System.Int32").
    pub fn get(&self, qualified_name: &str) -> Option<&TypeHandle> {
        self.types.get(qualified_name)
    }

    /// Whether a node with the given qualified name is registered.
    pub fn contains(&self, qualified_name: &str) -> bool {
        self.types.contains_key(qualified_name)
    }

    /// Number of registered nodes.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Whether the snapshot is empty.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Iterate the registered nodes in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &TypeHandle> {
        self.types.values()
    }

    /// Serialize the snapshot to JSON.
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        serde_json::to_string_pretty(self).map_err(|e| SnapshotError::Parse(e.to_string()))
    }

    /// Load a snapshot from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        let snapshot: Self =
            serde_json::from_str(json).map_err(|e| SnapshotError::Parse(e.to_string()))?;
        log::debug!("loaded type-graph snapshot with {} types", snapshot.len());
        Ok(snapshot)
    }

    /// Load a snapshot from a `.json` file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, SnapshotError> {
        let path = path.as_ref();
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => {}
            Some(ext) => return Err(SnapshotError::UnsupportedExtension(format!(".{ext}"))),
            None => {
                return Err(SnapshotError::UnsupportedExtension(
                    "(no extension)".to_string(),
                ));
            }
        }
        let json =
            std::fs::read_to_string(path).map_err(|e| SnapshotError::Io(e.to_string()))?;
        Self::from_json(&json)
    }
}

impl<'a> IntoIterator for &'a GraphSnapshot {
    type Item = &'a TypeHandle;
    type IntoIter = indexmap::map::Values<'a, String, TypeHandle>;

    fn into_iter(self) -> Self::IntoIter {
        self.types.values()
    }
}
