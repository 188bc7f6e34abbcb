//! Error types for the application layer.
//!
//! Domain failures ([`libman_core::LibraryError`]) never reach this type:
//! screens turn them into notices. What remains ends or interrupts the
//! session.

use std::io;

use libman_core::StorageError;
use thiserror::Error;

/// Errors that stop the session loop.
#[derive(Error, Debug)]
pub enum AppError {
    /// Terminal read or write failed
    #[error("terminal I/O error: {0}")]
    Io(#[from] io::Error),

    /// Loading or the final save failed
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// Input closed while a screen was waiting for a line
    #[error("input closed")]
    InputClosed,
}

impl AppError {
    /// Returns true if this error ends the session without being a failure.
    pub fn is_graceful(&self) -> bool {
        matches!(self, Self::InputClosed)
    }
}
