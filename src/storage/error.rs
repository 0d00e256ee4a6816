//! Storage error types.

use derive_more::{Display, Error};

/// Storage backend error with location tracking.
///
/// These never cross the crate's public boundary: the score and theme
/// layers catch them, log, and fall back to defaults.
#[derive(Debug, Clone, Display, Error)]
#[display("storage error: {} at {}:{}", message, file, line)]
pub struct StorageError {
    /// What went wrong.
    pub message: String,
    /// Line number where the error was raised.
    pub line: u32,
    /// Source file where the error was raised.
    pub file: &'static str,
}

impl StorageError {
    /// Creates a new storage error recording the caller's location.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<std::io::Error> for StorageError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(format!("I/O error: {err}"))
    }
}
