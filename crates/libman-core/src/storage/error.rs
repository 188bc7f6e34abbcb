//! Storage error types.
//!
//! Malformed records are not errors at this layer: they are skipped with a
//! warning while loading. What remains is the storage medium failing.

use std::{io, path::Path};

use thiserror::Error;

/// Errors that can occur during storage operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// Reading or writing a data file failed
    #[error("I/O error on {path}: {message}")]
    Io {
        /// File involved
        path: String,
        /// Underlying error, rendered
        message: String,
    },

    /// A thread panicked while holding the in-memory store
    #[error("storage lock poisoned")]
    Poisoned,
}

impl StorageError {
    /// Wrap an I/O error with the path it happened on.
    pub fn io(path: &Path, err: &io::Error) -> Self {
        Self::Io { path: path.display().to_string(), message: err.to_string() }
    }
}
