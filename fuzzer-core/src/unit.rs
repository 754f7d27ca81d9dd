//! Boundary tests of the counting contract.

use crate::codec::SymbolCodec;
use crate::error::{Failure, TestContext, Violation};

/// Length of the counting test buffer.
pub const UNIT_BUFFER_LEN: usize = 16 * 1024;

/// Buffer cycling through every symbol from 0 to `max_symbol_value`.
pub fn cycling_symbols(len: usize, max_symbol_value: u32) -> Vec<u16> {
    let period = max_symbol_value as usize + 1;
    (0..len).map(|i| (i % period) as u16).collect()
}

/// Runs the counting tests.
///
/// The codec's maximum must be accepted and account for every symbol; a
/// bound above the codec maximum and a bound below the data maximum must
/// both be rejected.
///
/// # Errors
///
/// Returns the first [`Failure`], with a zero seed and test number.
pub fn run_unit_tests<C: SymbolCodec>(codec: &C) -> Result<(), Failure> {
    check_count_bounds(codec).map_err(|violation| TestContext::default().fail(violation))
}

fn check_count_bounds<C: SymbolCodec>(codec: &C) -> Result<(), Violation> {
    let max = codec.max_symbol_value();
    let src = cycling_symbols(UNIT_BUFFER_LEN, max);
    let mut counts = vec![0u32; max as usize + 2];

    codec
        .count(&mut counts, &src, max)
        .map_err(|err| Violation::CountRejected {
            bound: max,
            error: err.to_string(),
        })?;
    let counted: u64 = counts.iter().map(|&c| u64::from(c)).sum();
    if counted != src.len() as u64 {
        return Err(Violation::CountMismatch {
            counted,
            expected: src.len() as u64,
        });
    }

    let bound = max + 1;
    if codec.count(&mut counts, &src, bound).is_ok() {
        return Err(Violation::CountAcceptedTooLarge { bound });
    }

    if let Some(bound) = max.checked_sub(1) {
        if codec.count(&mut counts, &src, bound).is_ok() {
            return Err(Violation::CountAcceptedTooLow { bound });
        }
    }

    Ok(())
}
