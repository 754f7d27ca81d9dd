//! Configuration of a fuzzing run.

use crate::error::{Error, Result};

/// Number of tests in a default run.
pub const DEFAULT_TOTAL_TESTS: u32 = 32 * 1024;

/// Symbols in the generated input buffer.
pub const DEFAULT_BUFFER_LEN: usize = (1 << 20) - 1;

/// Test lengths are `(rand & mask) + 1`.
pub const DEFAULT_MAX_TEST_SIZE_MASK: usize = 0x1FFFF;

/// Share of the remaining probability table given to each new symbol.
pub const DEFAULT_PROBABILITY: f64 = 0.08;

/// Precision requested from the codec.
pub const DEFAULT_TABLE_LOG: u32 = 12;

/// Symbols kept free at the end of the input buffer.
pub const SAFETY_MARGIN: usize = 64;

/// Largest slack added to or removed from a destination.
pub const MAX_SLACK: usize = 32;

/// Parameters of a fuzzing run.
#[derive(Debug, Clone, PartialEq)]
pub struct FuzzConfig {
    /// Seed of the run; generates the input buffer and the test sequence.
    pub seed: u32,
    /// Index one past the last test.
    pub total_tests: u32,
    /// Index of the first test; earlier tests are skipped by replaying the seed.
    pub start_test: u32,
    /// Length of the generated input buffer in symbols.
    pub buffer_len: usize,
    /// Mask bounding the test length; must be `2^k - 1`.
    pub max_test_size_mask: usize,
    /// Skew of the generated symbol distribution, in `(0, 1)`.
    pub probability: f64,
    /// Precision passed to the codec's compress call.
    pub table_log: u32,
}

impl Default for FuzzConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            total_tests: DEFAULT_TOTAL_TESTS,
            start_test: 0,
            buffer_len: DEFAULT_BUFFER_LEN,
            max_test_size_mask: DEFAULT_MAX_TEST_SIZE_MASK,
            probability: DEFAULT_PROBABILITY,
            table_log: DEFAULT_TABLE_LOG,
        }
    }
}

impl FuzzConfig {
    /// Longest slice a test may use.
    pub fn max_test_size(&self) -> usize {
        self.max_test_size_mask + 1
    }

    /// Number of distinct slice offsets.
    pub fn offset_range(&self) -> usize {
        self.buffer_len
            .saturating_sub(SAFETY_MARGIN)
            .saturating_sub(self.max_test_size_mask)
    }

    /// Checks that every slice the run can draw stays inside the buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidOption`] if the mask is not of the form
    /// `2^k - 1`, the buffer leaves no room for offsets, or the
    /// probability is outside `(0, 1)`.
    pub fn validate(&self) -> Result<()> {
        if !self.max_test_size_mask.wrapping_add(1).is_power_of_two() {
            return Err(Error::InvalidOption(format!(
                "test size mask {:#x} is not one less than a power of two",
                self.max_test_size_mask
            )));
        }
        if self.offset_range() == 0 {
            return Err(Error::InvalidOption(format!(
                "buffer of {} symbols is too small for tests of up to {} symbols",
                self.buffer_len,
                self.max_test_size()
            )));
        }
        if !(self.probability > 0.0 && self.probability < 1.0) {
            return Err(Error::InvalidOption(format!(
                "probability {} is outside (0, 1)",
                self.probability
            )));
        }
        Ok(())
    }
}
