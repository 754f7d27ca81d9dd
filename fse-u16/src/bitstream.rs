//! LSB-first bit packing over caller-provided buffers.

use crate::error::{Error, Result};

/// Packs bits LSB-first into a borrowed byte slice.
///
/// Every byte store is bounds-checked; running out of room yields
/// [`Error::DstSizeTooSmall`] instead of writing past the slice.
pub(crate) struct BitWriter<'a> {
    dst: &'a mut [u8],
    pos: usize,
    container: u64,
    bit_pos: u32,
}

impl<'a> BitWriter<'a> {
    pub(crate) fn new(dst: &'a mut [u8]) -> Self {
        Self {
            dst,
            pos: 0,
            container: 0,
            bit_pos: 0,
        }
    }

    /// Appends the low `nb_bits` of `value`. Higher bits must be zero.
    pub(crate) fn write_bits(&mut self, value: u32, nb_bits: u32) -> Result<()> {
        debug_assert!(nb_bits <= 32);
        debug_assert!(nb_bits == 32 || value >> nb_bits == 0);

        self.container |= u64::from(value) << self.bit_pos;
        self.bit_pos += nb_bits;
        while self.bit_pos >= 8 {
            self.push_byte(self.container as u8)?;
            self.container >>= 8;
            self.bit_pos -= 8;
        }
        Ok(())
    }

    /// Flushes the partial byte and returns the number of bytes written.
    pub(crate) fn finish(mut self) -> Result<usize> {
        if self.bit_pos > 0 {
            self.push_byte(self.container as u8)?;
        }
        Ok(self.pos)
    }

    fn push_byte(&mut self, byte: u8) -> Result<()> {
        let slot = self.dst.get_mut(self.pos).ok_or(Error::DstSizeTooSmall)?;
        *slot = byte;
        self.pos += 1;
        Ok(())
    }
}

/// Reads bits LSB-first, never beyond the declared bit count.
pub(crate) struct BitReader<'a> {
    src: &'a [u8],
    byte_pos: usize,
    container: u64,
    available: u32,
    remaining: u64,
}

impl<'a> BitReader<'a> {
    pub(crate) fn new(src: &'a [u8], total_bits: u64) -> Self {
        Self {
            src,
            byte_pos: 0,
            container: 0,
            available: 0,
            remaining: total_bits,
        }
    }

    pub(crate) fn read_bits(&mut self, nb_bits: u32) -> Result<u32> {
        debug_assert!(nb_bits <= 32);
        if nb_bits == 0 {
            return Ok(0);
        }
        if u64::from(nb_bits) > self.remaining {
            return Err(Error::CorruptionDetected);
        }

        self.refill();
        if self.available < nb_bits {
            return Err(Error::SrcSizeWrong);
        }

        let value = (self.container & ((1u64 << nb_bits) - 1)) as u32;
        self.container >>= nb_bits;
        self.available -= nb_bits;
        self.remaining -= u64::from(nb_bits);
        Ok(value)
    }

    /// True once every declared bit has been consumed.
    pub(crate) fn is_exhausted(&self) -> bool {
        self.remaining == 0
    }

    fn refill(&mut self) {
        while self.available <= 56 && self.byte_pos < self.src.len() {
            self.container |= u64::from(self.src[self.byte_pos]) << self.available;
            self.byte_pos += 1;
            self.available += 8;
        }
    }
}
