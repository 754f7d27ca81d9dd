//! Error types for fuzzing runs.
//!
//! Codec errors are expected values on some paths and are inspected by the
//! checks themselves. A [`Violation`] is a harness-level assertion failure;
//! wrapped into a [`Failure`] it carries what is needed to replay the case.

use std::fmt;

use thiserror::Error;

/// Result alias using the crate-level [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;

/// Phase of a round-trip check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Destination sized exactly to the original length.
    Exact,
    /// Destination larger than the original length.
    Oversized,
    /// Destination smaller than the original length.
    Undersized,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Exact => write!(f, "exact-size"),
            Stage::Oversized => write!(f, "oversized"),
            Stage::Undersized => write!(f, "undersized"),
        }
    }
}

/// Degenerate compressor results that carry no frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Degenerate {
    /// Size 0: input is stored uncompressed.
    Raw,
    /// Size 1: input is a single repeated symbol.
    Rle,
}

impl fmt::Display for Degenerate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Degenerate::Raw => write!(f, "raw"),
            Degenerate::Rle => write!(f, "rle"),
        }
    }
}

/// A mismatch between expected and observed codec behavior.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Violation {
    /// Compression reported an error.
    #[error("compression failed : {error}")]
    CompressFailed {
        /// Codec error name
        error: String,
    },

    /// The slot after the destination changed.
    #[error("decompression overrun output buffer (write beyond specified end) in {stage} test")]
    Overrun {
        /// Check that detected the overrun
        stage: Stage,
    },

    /// Decompression failed where it must succeed.
    #[error(
        "decompression failed in {stage} test : {error} (origSize = {orig_size} shorts, cSize = {compressed_size} bytes)"
    )]
    DecompressFailed {
        /// Check that failed
        stage: Stage,
        /// Codec error name
        error: String,
        /// Original length in symbols
        orig_size: usize,
        /// Compressed length in bytes
        compressed_size: usize,
    },

    /// Decoded data differs from the original.
    #[error("decompressed data corrupted in {stage} test")]
    Corrupted {
        /// Check that detected the corruption
        stage: Stage,
    },

    /// Decompression into a too-small destination reported success.
    #[error(
        "decompression should have failed (origSize = {orig_size} shorts, dstSize = {dst_size} shorts)"
    )]
    UndersizedAccepted {
        /// Original length in symbols
        orig_size: usize,
        /// Destination length in symbols
        dst_size: usize,
    },

    /// A raw or single-symbol result does not reproduce its input.
    #[error("{kind} block does not reproduce its input")]
    DegenerateMismatch {
        /// Which degenerate result was checked
        kind: Degenerate,
    },

    /// The codec stored a block raw although an order-0 coder fits it in
    /// at most half of the raw size.
    #[error("raw block returned for {orig_size} symbols, an order-0 estimate fits them in {estimate} bytes")]
    RawNotJustified {
        /// Input length in symbols
        orig_size: usize,
        /// Estimated frame size in bytes
        estimate: usize,
    },

    /// Verification scratch cannot hold the requested view.
    #[error("verification buffer holds {capacity} symbols, {requested} requested")]
    ScratchTooSmall {
        /// Requested view length
        requested: usize,
        /// Available capacity
        capacity: usize,
    },

    /// Counting failed with a valid bound.
    #[error("count() should have worked with bound {bound} : {error}")]
    CountRejected {
        /// Bound passed to the codec
        bound: u32,
        /// Codec error name
        error: String,
    },

    /// Counting succeeded with a bound above the codec maximum.
    #[error("count() should have failed : max too large (bound {bound})")]
    CountAcceptedTooLarge {
        /// Bound passed to the codec
        bound: u32,
    },

    /// Counting succeeded with a bound below the data maximum.
    #[error("count() should have failed : max too low (bound {bound})")]
    CountAcceptedTooLow {
        /// Bound passed to the codec
        bound: u32,
    },

    /// Counts do not add up to the input length.
    #[error("count() accounted for {counted} of {expected} symbols")]
    CountMismatch {
        /// Sum of the reported counts
        counted: u64,
        /// Input length
        expected: u64,
    },
}

/// Seed and test number identifying a round.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TestContext {
    /// Seed the run started from.
    pub seed: u32,
    /// Index of the round.
    pub test_nb: u32,
}

impl TestContext {
    /// Attaches this context to a violation.
    pub fn fail(self, violation: Violation) -> Failure {
        Failure {
            seed: self.seed,
            test_nb: self.test_nb,
            violation,
        }
    }
}

/// A violation together with the data needed to replay it.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{violation} (seed {seed}, test nb {test_nb})")]
pub struct Failure {
    /// Seed the run started from.
    pub seed: u32,
    /// Index of the failing round.
    pub test_nb: u32,
    /// What went wrong.
    pub violation: Violation,
}

/// Errors returned by the fuzzing entry points.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid option supplied by the caller.
    #[error("invalid option: {0}")]
    InvalidOption(String),

    /// A check failed.
    #[error(transparent)]
    Failure(#[from] Failure),
}
