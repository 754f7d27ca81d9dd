//! Normalized distributions and the tANS state tables derived from them.
//!
//! Encoder and decoder build their tables from the same [`NormalizedCounts`]
//! through the same symbol spread, so a frame only has to carry the
//! normalized distribution.

use crate::error::{Error, Result};


/// Frequencies scaled so they sum to exactly `1 << table_log`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct NormalizedCounts {
    /// Normalized frequency per symbol, indexed by symbol value.
    pub(crate) freq: Vec<u16>,
    /// Precision of the table; `table_size = 1 << table_log`.
    pub(crate) table_log: u32,
}

impl NormalizedCounts {
    pub(crate) fn table_size(&self) -> usize {
        1usize << self.table_log
    }
}

/// Floor of log2 for a positive integer.
pub(crate) fn highest_bit_set(x: u32) -> u32 {
    debug_assert!(x > 0);
    31 - x.leading_zeros()
}

/// Scales raw `counts` (summing to `total`) to a table of `1 << table_log`.
///
/// Every present symbol keeps at least one slot. The rounding remainder is
/// handed out round-robin starting from the most frequent symbols.
pub(crate) fn normalize(counts: &[u32], total: u64, table_log: u32) -> Result<NormalizedCounts> {
    let table_size = 1u32 << table_log;

    let mut present: Vec<usize> = counts
        .iter()
        .enumerate()
        .filter(|(_, &c)| c > 0)
        .map(|(symbol, _)| symbol)
        .collect();

    if total == 0 || present.is_empty() || present.len() > table_size as usize {
        return Err(Error::Generic);
    }

    present.sort_by(|&a, &b| counts[b].cmp(&counts[a]).then(a.cmp(&b)));

    let mut freq = vec![0u16; counts.len()];
    let mut distributed = 0i64;
    for &symbol in &present {
        let scaled = (u64::from(counts[symbol]) * u64::from(table_size) / total).max(1);
        freq[symbol] = scaled as u16;
        distributed += scaled as i64;
    }

    let mut diff = i64::from(table_size) - distributed;
    let mut idx = 0;
    while diff > 0 {
        freq[present[idx % present.len()]] += 1;
        diff -= 1;
        idx += 1;
    }
    while diff < 0 {
        let symbol = present[idx % present.len()];
        if freq[symbol] > 1 {
            freq[symbol] -= 1;
            diff += 1;
        }
        idx += 1;
    }

    debug_assert_eq!(freq.iter().map(|&f| u32::from(f)).sum::<u32>(), table_size);

    Ok(NormalizedCounts { freq, table_log })
}

/// Spreads symbols over the state table with the classic odd FSE step.
///
/// The step is coprime with the power-of-two table size, so the walk visits
/// every slot exactly once and ends back at slot 0.
pub(crate) fn spread_symbols(norm: &NormalizedCounts) -> Vec<u16> {
    let table_size = norm.table_size();
    let mask = table_size - 1;
    let step = (table_size >> 1) + (table_size >> 3) + 3;

    let mut table = vec![0u16; table_size];
    let mut position = 0usize;
    for (symbol, &freq) in norm.freq.iter().enumerate() {
        for _ in 0..freq {
            table[position] = symbol as u16;
            position = (position + step) & mask;
        }
    }

    debug_assert_eq!(position, 0);
    table
}

/// One decoder state: emit `symbol`, read `bits`, continue at `new_state + bits`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct DecodeEntry {
    pub(crate) symbol: u16,
    pub(crate) bits: u8,
    pub(crate) new_state: u16,
}

/// Builds the decoder table indexed by state.
pub(crate) fn build_decode_table(norm: &NormalizedCounts, spread: &[u16]) -> Vec<DecodeEntry> {
    let table_size = norm.table_size() as u32;
    let mut symbol_next: Vec<u32> = norm.freq.iter().map(|&f| u32::from(f)).collect();

    spread
        .iter()
        .map(|&symbol| {
            let next = symbol_next[usize::from(symbol)];
            symbol_next[usize::from(symbol)] += 1;

            let bits = norm.table_log - highest_bit_set(next);
            DecodeEntry {
                symbol,
                bits: bits as u8,
                new_state: ((next << bits) - table_size) as u16,
            }
        })
        .collect()
}

/// Per-symbol parameters for one encoder transition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct SymbolTransform {
    /// Added to the state; the top 16 bits give the number of bits to flush.
    pub(crate) delta_nb_bits: u32,
    /// Offset from the shifted state into `state_table`.
    pub(crate) delta_find_state: i32,
}

/// Encoder tables. States live in `[table_size, 2 * table_size)`.
#[derive(Debug, Clone)]
pub(crate) struct EncodeTable {
    pub(crate) table_log: u32,
    pub(crate) state_table: Vec<u16>,
    pub(crate) transforms: Vec<SymbolTransform>,
}

impl EncodeTable {
    pub(crate) fn new(norm: &NormalizedCounts, spread: &[u16]) -> Self {
        let table_size = norm.table_size() as u32;
        let table_log = norm.table_log;

        let mut cumul = Vec::with_capacity(norm.freq.len());
        let mut running = 0u32;
        for &freq in &norm.freq {
            cumul.push(running);
            running += u32::from(freq);
        }

        let mut state_table = vec![0u16; table_size as usize];
        for (position, &symbol) in spread.iter().enumerate() {
            let slot = &mut cumul[usize::from(symbol)];
            state_table[*slot as usize] = (table_size + position as u32) as u16;
            *slot += 1;
        }

        let mut total = 0i32;
        let transforms = norm
            .freq
            .iter()
            .map(|&freq| match freq {
                0 => SymbolTransform::default(),
                1 => {
                    let transform = SymbolTransform {
                        delta_nb_bits: (table_log << 16) - table_size,
                        delta_find_state: total - 1,
                    };
                    total += 1;
                    transform
                }
                freq => {
                    let freq = u32::from(freq);
                    let max_bits_out = table_log - highest_bit_set(freq - 1);
                    let min_state_plus = freq << max_bits_out;
                    let transform = SymbolTransform {
                        delta_nb_bits: (max_bits_out << 16) - min_state_plus,
                        delta_find_state: total - freq as i32,
                    };
                    total += freq as i32;
                    transform
                }
            })
            .collect();

        Self {
            table_log,
            state_table,
            transforms,
        }
    }

    pub(crate) fn initial_state(&self) -> u32 {
        1 << self.table_log
    }

    /// Encodes `symbol` from `state`; returns `(value, nb_bits, next_state)`.
    #[inline]
    pub(crate) fn encode(&self, state: u32, symbol: u16) -> (u32, u32, u32) {
        let transform = self.transforms[usize::from(symbol)];
        let nb_bits = (state + transform.delta_nb_bits) >> 16;
        let value = state & ((1 << nb_bits) - 1);
        let index = ((state >> nb_bits) as i32 + transform.delta_find_state) as usize;
        (value, nb_bits, u32::from(self.state_table[index]))
    }
}
