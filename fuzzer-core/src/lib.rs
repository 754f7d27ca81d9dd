//! Deterministic round-trip fuzzing for 16-bit entropy codecs.
//!
//! The engine drives any codec implementing [`SymbolCodec`] through two
//! phases:
//!
//! - [`run_unit_tests`]: boundary checks of the symbol counting contract
//! - [`run_fuzz_tests`]: pseudo-random slices of a skewed input buffer are
//!   compressed and decoded into exact, oversized and undersized
//!   destinations, each guarded by a sentinel
//!
//! Everything random derives from a single seed, so a failing run is
//! replayed bit for bit from its seed and test number.
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//!
//! use fuzzer_core::{run_fuzz_tests, FseU16, FuzzConfig, Reporter, LEVEL_SILENT};
//!
//! let config = FuzzConfig {
//!     seed: 42,
//!     total_tests: 8,
//!     buffer_len: 32 * 1024,
//!     max_test_size_mask: 0xFFF,
//!     ..FuzzConfig::default()
//! };
//! let mut reporter = Reporter::new(Vec::new(), LEVEL_SILENT, Duration::from_millis(200));
//! let summary = run_fuzz_tests(&FseU16, &config, &mut reporter)?;
//! assert_eq!(summary.tests, 8);
//! # Ok::<(), fuzzer_core::Error>(())
//! ```

pub mod codec;
pub mod config;
pub mod error;
pub mod fingerprint;
pub mod fuzz;
pub mod generator;
pub mod guard;
pub mod report;
pub mod rng;
pub mod timing;
pub mod unit;

pub use codec::{FseU16, SymbolCodec};
pub use config::FuzzConfig;
pub use error::{Degenerate, Error, Failure, Result, Stage, TestContext, Violation};
pub use fuzz::{run_fuzz_tests, seed_at, FuzzSummary, RoundOutcome};
pub use report::{Reporter, DEFAULT_LEVEL, LEVEL_ERRORS, LEVEL_RESULTS, LEVEL_SILENT, LEVEL_TRACE};
pub use rng::FuzzRng;
pub use timing::PROGRESS_INTERVAL;
pub use unit::run_unit_tests;
