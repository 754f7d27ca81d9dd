//! Skewed 16-bit symbol generation.
//!
//! Uniform noise is a poor stand-in for entropy-coder input. The generator
//! instead builds a lookup table in which each successive symbol owns a
//! geometrically shrinking share of the slots, then samples it.

use crate::rng::FuzzRng;

/// Slots in the probability table. Must be a power of two.
pub const PROBABILITY_TABLE_SIZE: usize = 4 * 1024;

/// First symbol assigned in the probability table.
pub const START_SYMBOL: u16 = 240;

/// Builds the probability table.
///
/// Starting at [`START_SYMBOL`], each symbol receives `remaining * p + 1`
/// slots. The symbol id wraps back to 1 once it reaches `max_symbol_value`.
pub fn build_probability_table(probability: f64, max_symbol_value: u32) -> Vec<u16> {
    let max_symbol = u16::try_from(max_symbol_value).unwrap_or(u16::MAX);
    let mut symbol = if START_SYMBOL < max_symbol {
        START_SYMBOL
    } else {
        1
    };

    let mut table = Vec::with_capacity(PROBABILITY_TABLE_SIZE);
    let mut remaining = PROBABILITY_TABLE_SIZE as u32;
    while remaining > 0 {
        let n = ((f64::from(remaining) * probability) as u32 + 1).min(remaining);
        table.extend(std::iter::repeat(symbol).take(n as usize));
        symbol += 1;
        if symbol >= max_symbol {
            symbol = 1;
        }
        remaining -= n;
    }

    table
}

/// Generates `len` symbols from `seed`.
///
/// The result is a pure function of its arguments.
pub fn generate_symbols(len: usize, probability: f64, seed: u32, max_symbol_value: u32) -> Vec<u16> {
    let table = build_probability_table(probability, max_symbol_value);
    let mask = PROBABILITY_TABLE_SIZE - 1;
    let mut rng = FuzzRng::new(seed);

    (0..len)
        .map(|_| table[rng.next_u32() as usize & mask])
        .collect()
}
