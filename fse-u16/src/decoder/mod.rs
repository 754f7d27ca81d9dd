//! FSE-U16 decompression.

use crate::bitstream::BitReader;
use crate::error::{Error, Result};
use crate::frame::Frame;
use crate::table::{build_decode_table, spread_symbols};

#[cfg(test)]
mod tests;

/// Decompresses the frame in `src` into `dst`.
///
/// Returns the number of symbols written. Nothing is ever written past
/// `dst.len()`: a destination smaller than the frame's symbol count is
/// rejected before decoding starts.
///
/// # Errors
///
/// - [`Error::DstSizeTooSmall`] if `dst` cannot hold every symbol
/// - [`Error::SrcSizeWrong`] if `src` is truncated or has trailing bytes
/// - [`Error::TableLogTooLarge`] / [`Error::MaxSymbolValueTooLarge`] for unsupported headers
/// - [`Error::CorruptionDetected`] if the bitstream does not decode consistently
pub fn decompress(dst: &mut [u16], src: &[u8]) -> Result<usize> {
    let frame = Frame::parse(src)?;
    let dst = dst
        .get_mut(..frame.symbol_count)
        .ok_or(Error::DstSizeTooSmall)?;

    let table = build_decode_table(&frame.norm, &spread_symbols(&frame.norm));
    let mut reader = BitReader::new(frame.bitstream, frame.total_bits);

    let mut state = reader.read_bits(frame.norm.table_log)? as usize;
    for slot in dst.iter_mut() {
        let entry = table[state];
        *slot = entry.symbol;
        state = usize::from(entry.new_state) + reader.read_bits(u32::from(entry.bits))? as usize;
    }

    // The encoder starts from state zero, so a consistent stream ends there.
    if state != 0 || !reader.is_exhausted() {
        return Err(Error::CorruptionDetected);
    }

    Ok(frame.symbol_count)
}
