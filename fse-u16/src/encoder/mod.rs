//! FSE-U16 compression.

use crate::bitstream::BitWriter;
use crate::error::{Error, Result};
use crate::frame::{header_size, write_header, MAX_HEADER_SIZE};
use crate::histogram::count;
use crate::table::{highest_bit_set, normalize, spread_symbols, EncodeTable};
use crate::{DEFAULT_TABLE_LOG, MAX_SYMBOL_VALUE, MAX_TABLE_LOG, MIN_TABLE_LOG};

#[cfg(test)]
mod tests;

/// Worst-case frame size for `len` symbols.
///
/// A destination of this size is always large enough for [`compress`].
pub const fn compress_bound(len: usize) -> usize {
    MAX_HEADER_SIZE + len * 2 + 8
}

/// Chooses the table precision for a block.
///
/// Small inputs do not benefit from large tables, but the table must stay
/// at least twice as large as the number of distinct symbols.
fn optimal_table_log(requested: u32, src_len: usize, present: usize) -> u32 {
    let src_len = u32::try_from(src_len).unwrap_or(u32::MAX);
    let src_log = highest_bit_set(src_len) + 1;
    let symbols_log = highest_bit_set(present as u32) + 2;

    requested
        .min(src_log)
        .max(symbols_log)
        .clamp(MIN_TABLE_LOG, MAX_TABLE_LOG)
}

/// Compresses `src` into `dst`.
///
/// # Parameters
///
/// * `dst` - Destination buffer; never written past its length
/// * `src` - Symbols to compress
/// * `max_symbol_value` - Caller's bound on the symbol values in `src`
/// * `table_log` - Requested precision; `0` selects [`DEFAULT_TABLE_LOG`]
///
/// # Returns
///
/// * `Ok(0)` - `src` is empty or not compressible; store it raw
/// * `Ok(1)` - `src` is a single repeated symbol; store it as a run
/// * `Ok(n)` - `dst[..n]` holds the compressed frame
///
/// # Errors
///
/// - [`Error::TableLogTooLarge`] if `table_log > MAX_TABLE_LOG`
/// - [`Error::MaxSymbolValueTooLarge`] / [`Error::MaxSymbolValueTooSmall`] for a bad bound
/// - [`Error::SrcSizeWrong`] if `src` holds more than `u32::MAX` symbols
/// - [`Error::DstSizeTooSmall`] if the frame does not fit into `dst`
pub fn compress(dst: &mut [u8], src: &[u16], max_symbol_value: u32, table_log: u32) -> Result<usize> {
    if src.is_empty() {
        return Ok(0);
    }

    let table_log = if table_log == 0 {
        DEFAULT_TABLE_LOG
    } else {
        table_log
    };
    if table_log > MAX_TABLE_LOG {
        return Err(Error::TableLogTooLarge);
    }
    if max_symbol_value > MAX_SYMBOL_VALUE {
        return Err(Error::MaxSymbolValueTooLarge);
    }
    let symbol_count = u32::try_from(src.len()).map_err(|_| Error::SrcSizeWrong)?;

    let mut counts = vec![0u32; max_symbol_value as usize + 1];
    let histogram = count(&mut counts, src, max_symbol_value)?;
    if histogram.largest_count as usize == src.len() {
        return Ok(1);
    }

    let table_log = optimal_table_log(table_log, src.len(), histogram.present);
    let counts = &counts[..=histogram.max_symbol_value as usize];
    let norm = normalize(counts, src.len() as u64, table_log)?;
    let table = EncodeTable::new(&norm, &spread_symbols(&norm));

    // Encode back to front; the decoder consumes the chunks front to back.
    let mut chunks = Vec::with_capacity(src.len());
    let mut state = table.initial_state();
    let mut total_bits = u64::from(table_log);
    for &symbol in src.iter().rev() {
        let (value, nb_bits, next) = table.encode(state, symbol);
        chunks.push((value, nb_bits));
        total_bits += u64::from(nb_bits);
        state = next;
    }

    let frame_size = header_size(histogram.present) as u64 + total_bits.div_ceil(8);
    if frame_size >= src.len() as u64 * 2 {
        return Ok(0);
    }
    if frame_size > dst.len() as u64 {
        return Err(Error::DstSizeTooSmall);
    }
    let total_bits = u32::try_from(total_bits).map_err(|_| Error::SrcSizeWrong)?;

    let header = write_header(dst, symbol_count, &norm, total_bits)?;
    let mut writer = BitWriter::new(&mut dst[header..]);
    writer.write_bits(state - table.initial_state(), table_log)?;
    for &(value, nb_bits) in chunks.iter().rev() {
        writer.write_bits(value, nb_bits)?;
    }
    let written = writer.finish()?;

    Ok(header + written)
}
