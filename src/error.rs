//! Failure taxonomy for content loading.
//!
//! These errors never leave the loader's public API: [`crate::loader`]
//! converts every one of them into `None` or an empty list and records a
//! diagnostic. They exist so the conversion happens in one place and so
//! tests can assert on the reason a project was dropped.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("file not found: {}", .0.display())]
    MissingFile(PathBuf),

    #[error("failed to read {}: {source}", .path.display())]
    UnreadableFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed JSON in {}: {source}", .path.display())]
    MalformedJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("directory not found: {}", .0.display())]
    MissingDirectory(PathBuf),
}

impl LoadError {
    /// True for the "nothing there" cases, as opposed to content that exists
    /// but could not be used.
    pub fn is_absence(&self) -> bool {
        matches!(self, LoadError::MissingFile(_) | LoadError::MissingDirectory(_))
    }
}
