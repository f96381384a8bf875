//! Core types shared across the aggregation engine.

use serde::{Deserialize, Serialize};

/// Positional identity of a record inside the file store
pub type StoreIndex = usize;

/// One logical file: a slash-delimited relative path and its text content.
///
/// Names are not unique; two records may share a name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    pub name: String,
    pub content: String,
}

impl FileRecord {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    /// Non-empty path segments of the record name
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        path_segments(&self.name)
    }
}

/// Split a slash-delimited path, skipping empty segments.
pub fn path_segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}
