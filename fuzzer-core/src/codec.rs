//! Contract between the fuzzer and the codec under test.

/// Operations the fuzzer drives.
///
/// Implementations report failures through `Err`, never by writing past a
/// destination slice. `Display` of [`SymbolCodec::Error`] is the error name
/// shown in diagnostics.
pub trait SymbolCodec {
    /// Error type reported by the codec.
    type Error: std::error::Error;

    /// Largest symbol value the codec accepts.
    fn max_symbol_value(&self) -> u32;

    /// Destination size that always fits a compressed block of `len` symbols.
    fn compress_bound(&self, len: usize) -> usize;

    /// Compresses `src`; `0` and `1` denote raw and single-symbol blocks.
    fn compress(
        &self,
        dst: &mut [u8],
        src: &[u16],
        max_symbol_value: u32,
        table_log: u32,
    ) -> Result<usize, Self::Error>;

    /// Decompresses a block, returning the number of symbols written.
    fn decompress(&self, dst: &mut [u16], src: &[u8]) -> Result<usize, Self::Error>;

    /// Counts symbols of `src` under a caller bound, returning the largest count.
    fn count(&self, counts: &mut [u32], src: &[u16], max_symbol_value: u32) -> Result<usize, Self::Error>;
}

/// The FSE-U16 codec from the `fse-u16` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct FseU16;

impl SymbolCodec for FseU16 {
    type Error = fse_u16::Error;

    fn max_symbol_value(&self) -> u32 {
        fse_u16::MAX_SYMBOL_VALUE
    }

    fn compress_bound(&self, len: usize) -> usize {
        fse_u16::compress_bound(len)
    }

    fn compress(
        &self,
        dst: &mut [u8],
        src: &[u16],
        max_symbol_value: u32,
        table_log: u32,
    ) -> Result<usize, Self::Error> {
        fse_u16::compress(dst, src, max_symbol_value, table_log)
    }

    fn decompress(&self, dst: &mut [u16], src: &[u8]) -> Result<usize, Self::Error> {
        fse_u16::decompress(dst, src)
    }

    fn count(&self, counts: &mut [u32], src: &[u16], max_symbol_value: u32) -> Result<usize, Self::Error> {
        fse_u16::count(counts, src, max_symbol_value).map(|hist| hist.largest_count as usize)
    }
}
