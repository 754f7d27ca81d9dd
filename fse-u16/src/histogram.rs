//! Symbol counting with a caller-supplied bound.

use crate::error::{Error, Result};
use crate::MAX_SYMBOL_VALUE;

/// Summary of a counting pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Histogram {
    /// Largest symbol value present in the input (0 for empty input).
    pub max_symbol_value: u32,
    /// Occurrences of the most frequent symbol.
    pub largest_count: u32,
    /// Number of distinct symbols present.
    pub present: usize,
}

/// Counts symbol occurrences of `src` into `counts[..=max_symbol_value]`.
///
/// The bound is part of the contract: it must not exceed
/// [`MAX_SYMBOL_VALUE`], and every symbol of `src` must be at most
/// `max_symbol_value`. Counting never silently drops symbols above the bound.
///
/// # Errors
///
/// - [`Error::MaxSymbolValueTooLarge`] if `max_symbol_value > MAX_SYMBOL_VALUE`
/// - [`Error::DstSizeTooSmall`] if `counts` has fewer than `max_symbol_value + 1` slots
/// - [`Error::MaxSymbolValueTooSmall`] if `src` contains a symbol above the bound
pub fn count(counts: &mut [u32], src: &[u16], max_symbol_value: u32) -> Result<Histogram> {
    if max_symbol_value > MAX_SYMBOL_VALUE {
        return Err(Error::MaxSymbolValueTooLarge);
    }

    let slots = max_symbol_value as usize + 1;
    let counts = counts.get_mut(..slots).ok_or(Error::DstSizeTooSmall)?;
    counts.fill(0);

    for &symbol in src {
        let slot = counts
            .get_mut(usize::from(symbol))
            .ok_or(Error::MaxSymbolValueTooSmall)?;
        *slot += 1;
    }

    let max_symbol_value = counts.iter().rposition(|&c| c > 0).unwrap_or(0) as u32;
    let largest_count = counts.iter().copied().max().unwrap_or(0);
    let present = counts.iter().filter(|&&c| c > 0).count();

    Ok(Histogram {
        max_symbol_value,
        largest_count,
        present,
    })
}
