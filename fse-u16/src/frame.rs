//! Frame layout shared by the encoder and decoder.
//!
//! ```text
//! +-----------+--------------+---------+-------------------------+-----------+-----------+
//! | table_log | symbol count | present | (symbol, freq) * present | bit count | bitstream |
//! |    u8     |    u32 LE    |  u16 LE |      u16 LE, u16 LE      |   u32 LE  |   bytes   |
//! +-----------+--------------+---------+-------------------------+-----------+-----------+
//! ```
//!
//! The first `table_log` bits of the bitstream hold the initial decoder state.

use crate::error::{Error, Result};
use crate::table::NormalizedCounts;
use crate::{MAX_SYMBOL_VALUE, MAX_TABLE_LOG, MIN_TABLE_LOG};

/// Size of the fixed fields preceding the distribution.
const PREFIX_SIZE: usize = 1 + 4 + 2;

/// Size of one `(symbol, freq)` pair.
const PAIR_SIZE: usize = 4;

/// Size of the bit count field.
const BIT_COUNT_SIZE: usize = 4;

/// Largest possible header, reached when every symbol is present.
pub(crate) const MAX_HEADER_SIZE: usize =
    PREFIX_SIZE + PAIR_SIZE * (MAX_SYMBOL_VALUE as usize + 1) + BIT_COUNT_SIZE;

/// Number of header bytes for a distribution with `present` symbols.
pub(crate) fn header_size(present: usize) -> usize {
    PREFIX_SIZE + PAIR_SIZE * present + BIT_COUNT_SIZE
}

/// Writes the header into `dst` and returns the number of bytes used.
pub(crate) fn write_header(
    dst: &mut [u8],
    symbol_count: u32,
    norm: &NormalizedCounts,
    total_bits: u32,
) -> Result<usize> {
    let present: Vec<(u16, u16)> = norm
        .freq
        .iter()
        .enumerate()
        .filter(|(_, &f)| f > 0)
        .map(|(symbol, &f)| (symbol as u16, f))
        .collect();

    let size = header_size(present.len());
    let header = dst.get_mut(..size).ok_or(Error::DstSizeTooSmall)?;

    header[0] = norm.table_log as u8;
    header[1..5].copy_from_slice(&symbol_count.to_le_bytes());
    header[5..7].copy_from_slice(&(present.len() as u16).to_le_bytes());

    let mut pos = PREFIX_SIZE;
    for (symbol, freq) in present {
        header[pos..pos + 2].copy_from_slice(&symbol.to_le_bytes());
        header[pos + 2..pos + 4].copy_from_slice(&freq.to_le_bytes());
        pos += PAIR_SIZE;
    }
    header[pos..pos + BIT_COUNT_SIZE].copy_from_slice(&total_bits.to_le_bytes());

    Ok(size)
}

/// A parsed and validated frame.
#[derive(Debug)]
pub(crate) struct Frame<'a> {
    pub(crate) symbol_count: usize,
    pub(crate) norm: NormalizedCounts,
    pub(crate) total_bits: u64,
    pub(crate) bitstream: &'a [u8],
}

fn read_u16(src: &[u8], pos: usize) -> Result<u16> {
    src.get(pos..pos + 2)
        .map(|b| u16::from_le_bytes([b[0], b[1]]))
        .ok_or(Error::SrcSizeWrong)
}

fn read_u32(src: &[u8], pos: usize) -> Result<u32> {
    src.get(pos..pos + 4)
        .map(|b| u32::from_le_bytes([b[0], b[1], b[2], b[3]]))
        .ok_or(Error::SrcSizeWrong)
}

impl<'a> Frame<'a> {
    /// Parses `src`, rejecting anything that would not decode consistently.
    pub(crate) fn parse(src: &'a [u8]) -> Result<Self> {
        let table_log = u32::from(*src.first().ok_or(Error::SrcSizeWrong)?);
        if table_log > MAX_TABLE_LOG {
            return Err(Error::TableLogTooLarge);
        }
        if table_log < MIN_TABLE_LOG {
            return Err(Error::CorruptionDetected);
        }

        let symbol_count = read_u32(src, 1)? as usize;
        let present = usize::from(read_u16(src, 5)?);
        if present == 0 {
            return Err(Error::CorruptionDetected);
        }

        let mut pairs = Vec::with_capacity(present);
        let mut pos = PREFIX_SIZE;
        for _ in 0..present {
            let symbol = read_u16(src, pos)?;
            let freq = read_u16(src, pos + 2)?;
            pos += PAIR_SIZE;

            if u32::from(symbol) > MAX_SYMBOL_VALUE {
                return Err(Error::MaxSymbolValueTooLarge);
            }
            if freq == 0 || pairs.last().is_some_and(|&(prev, _)| prev >= symbol) {
                return Err(Error::CorruptionDetected);
            }
            pairs.push((symbol, freq));
        }

        let table_size = 1u32 << table_log;
        let sum: u32 = pairs.iter().map(|&(_, f)| u32::from(f)).sum();
        if sum != table_size {
            return Err(Error::CorruptionDetected);
        }

        let total_bits = u64::from(read_u32(src, pos)?);
        pos += BIT_COUNT_SIZE;

        let bitstream = &src[pos..];
        if bitstream.len() as u64 != total_bits.div_ceil(8) {
            return Err(Error::SrcSizeWrong);
        }

        let max_symbol = pairs.last().map_or(0, |&(s, _)| usize::from(s));
        let mut freq = vec![0u16; max_symbol + 1];
        for (symbol, f) in pairs {
            freq[usize::from(symbol)] = f;
        }

        Ok(Frame {
            symbol_count,
            norm: NormalizedCounts { freq, table_log },
            total_bits,
            bitstream,
        })
    }
}
