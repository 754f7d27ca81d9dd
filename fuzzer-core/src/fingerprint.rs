//! 64-bit content fingerprints for in-memory equality checks.

use xxhash_rust::xxh64::Xxh64;

/// Symbols converted per hasher update.
const CHUNK_SYMBOLS: usize = 2048;

/// XXH64 (seed 0) of the little-endian bytes of `symbols`.
pub fn fingerprint(symbols: &[u16]) -> u64 {
    let mut hasher = Xxh64::new(0);
    let mut bytes = [0u8; CHUNK_SYMBOLS * 2];

    for block in symbols.chunks(CHUNK_SYMBOLS) {
        for (dst, &symbol) in bytes.chunks_exact_mut(2).zip(block) {
            dst.copy_from_slice(&symbol.to_le_bytes());
        }
        hasher.update(&bytes[..block.len() * 2]);
    }

    hasher.digest()
}
