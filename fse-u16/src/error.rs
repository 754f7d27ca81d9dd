//! Error types reported by the FSE-U16 codec.

use std::fmt;

/// Type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

/// Error values returned by counting, compression and decompression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Input cannot be modelled (e.g. an empty histogram).
    Generic,

    /// Destination buffer cannot hold the result.
    DstSizeTooSmall,

    /// Source length is inconsistent with the frame it claims to hold.
    SrcSizeWrong,

    /// Frame content is malformed or failed an integrity check.
    CorruptionDetected,

    /// Requested precision exceeds [`crate::MAX_TABLE_LOG`].
    TableLogTooLarge,

    /// Symbol bound exceeds [`crate::MAX_SYMBOL_VALUE`].
    MaxSymbolValueTooLarge,

    /// Input contains a symbol above the caller's bound.
    MaxSymbolValueTooSmall,
}

impl Error {
    /// Returns the human-readable name of the error.
    pub const fn name(self) -> &'static str {
        match self {
            Error::Generic => "Error (generic)",
            Error::DstSizeTooSmall => "Destination buffer is too small",
            Error::SrcSizeWrong => "Src size incorrect",
            Error::CorruptionDetected => "Corrupted block detected",
            Error::TableLogTooLarge => "tableLog requires too much memory",
            Error::MaxSymbolValueTooLarge => "Unsupported max possible Symbol Value : too large",
            Error::MaxSymbolValueTooSmall => "Specified maxSymbolValue is too small",
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::error::Error for Error {}
