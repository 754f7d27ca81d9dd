//! Configuration of a command-line run.

use std::time::{SystemTime, UNIX_EPOCH};

use fuzzer_core::config::DEFAULT_TOTAL_TESTS;
use fuzzer_core::{FuzzConfig, DEFAULT_LEVEL, LEVEL_TRACE};

/// Seeds drawn from the clock stay below this value, keeping them easy to retype.
pub const CLOCK_SEED_RANGE: u128 = 10_000;

/// Options of a `fuzzer-u16` invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Seed of the run
    pub seed: u32,
    /// Index one past the last test
    pub total_tests: u32,
    /// First test to execute
    pub start_test: u32,
    /// Trace every test and stage
    pub verbose: bool,
    /// Wait for Enter before exiting
    pub pause: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            seed: clock_seed(),
            total_tests: DEFAULT_TOTAL_TESTS,
            start_test: 0,
            verbose: false,
            pause: false,
        }
    }
}

impl CliConfig {
    /// Display level of the console reporter.
    pub fn display_level(&self) -> u8 {
        if self.verbose {
            LEVEL_TRACE
        } else {
            DEFAULT_LEVEL
        }
    }

    /// Engine configuration for this run.
    pub fn fuzz_config(&self) -> FuzzConfig {
        FuzzConfig {
            seed: self.seed,
            total_tests: self.total_tests,
            start_test: self.start_test,
            ..FuzzConfig::default()
        }
    }
}

/// Wall-clock milliseconds, reduced to a short seed.
///
/// A clock set before the epoch yields seed 0.
pub fn clock_seed() -> u32 {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis())
        .unwrap_or_default();
    (millis % CLOCK_SEED_RANGE) as u32
}
