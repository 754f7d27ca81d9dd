//! Error types for the fuzzer front-end.

use std::io;

use thiserror::Error;

use fuzzer_core::Failure;

/// Errors returned by [`crate::run_cli`].
#[derive(Debug, Error)]
pub enum Error {
    /// The engine rejected the configuration or a check failed.
    #[error(transparent)]
    Core(#[from] fuzzer_core::Error),

    /// The counting tests failed.
    #[error(transparent)]
    Failure(#[from] Failure),

    /// Reading the pause confirmation failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Returns the failed check, if this error is one.
    pub fn failure(&self) -> Option<&Failure> {
        match self {
            Self::Core(fuzzer_core::Error::Failure(failure)) | Self::Failure(failure) => {
                Some(failure)
            }
            _ => None,
        }
    }
}

/// Result type for front-end operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Formats an error as the single line printed before exiting.
pub fn format_error_for_stderr(err: &Error) -> String {
    format!("Error => {err}")
}
