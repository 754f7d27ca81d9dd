//! Finite State Entropy (tANS) codec for 16-bit symbol streams.
//!
//! The codec compresses blocks of `u16` symbols whose values do not exceed
//! [`MAX_SYMBOL_VALUE`]. All operations work on caller-provided buffers and
//! report an [`Error`] instead of writing past a destination.
//!
//! # Return codes
//!
//! [`compress`] reserves two sizes for degenerate blocks that carry no frame:
//!
//! - `0`: empty or incompressible input, to be stored raw by the caller
//! - `1`: a single repeated symbol, to be stored as a run by the caller
//!
//! # Example
//!
//! ```rust
//! use fse_u16::{compress, compress_bound, decompress, MAX_SYMBOL_VALUE};
//!
//! let src: Vec<u16> = (0..4096u32).map(|i| (i % 7 + i % 3) as u16).collect();
//! let mut compressed = vec![0_u8; compress_bound(src.len())];
//! let size = compress(&mut compressed, &src, MAX_SYMBOL_VALUE, 12)?;
//! assert!(size > 1);
//!
//! let mut decoded = vec![0_u16; src.len()];
//! let len = decompress(&mut decoded, &compressed[..size])?;
//! assert_eq!(&decoded[..len], &src[..]);
//! # Ok::<(), fse_u16::Error>(())
//! ```

mod bitstream;
mod decoder;
mod encoder;
mod error;
mod frame;
mod histogram;
mod table;

pub use decoder::decompress;
pub use encoder::{compress, compress_bound};
pub use error::{Error, Result};
pub use histogram::{count, Histogram};

/// Largest symbol value the codec accepts.
pub const MAX_SYMBOL_VALUE: u32 = 286;

/// Smallest table precision.
pub const MIN_TABLE_LOG: u32 = 5;

/// Largest table precision.
pub const MAX_TABLE_LOG: u32 = 12;

/// Precision used when the caller passes `0`.
pub const DEFAULT_TABLE_LOG: u32 = 11;
