//! Unit tests for block compression.

use super::*;
use crate::decompress;

/// Deterministic, skewed test input.
fn skewed(len: usize) -> Vec<u16> {
    let mut state = 12345u32;
    (0..len)
        .map(|_| {
            state = state.wrapping_mul(1_103_515_245).wrapping_add(12345);
            let r = (state >> 16) & 0xff;
            (r.leading_zeros() - 24 + 200) as u16
        })
        .collect()
}

#[test]
/// Empty input is reported as raw.
fn empty_input_is_raw() {
    let mut dst = vec![0u8; 16];
    assert_eq!(compress(&mut dst, &[], MAX_SYMBOL_VALUE, 12).unwrap(), 0);
}

#[test]
/// A single repeated symbol is reported as a run.
fn constant_input_is_rle() {
    let src = vec![42u16; 100];
    let mut dst = vec![0u8; compress_bound(src.len())];
    assert_eq!(compress(&mut dst, &src, MAX_SYMBOL_VALUE, 12).unwrap(), 1);
}

#[test]
/// Tiny inputs whose frame would exceed their raw size are reported as raw.
fn tiny_input_is_incompressible() {
    let src = [1u16, 2, 1, 2];
    let mut dst = vec![0u8; compress_bound(src.len())];
    assert_eq!(compress(&mut dst, &src, MAX_SYMBOL_VALUE, 12).unwrap(), 0);
}

#[test]
/// Compressed skewed data decodes back to the input.
fn skewed_input_round_trips() {
    let src = skewed(50_000);
    let mut dst = vec![0u8; compress_bound(src.len())];
    let size = compress(&mut dst, &src, MAX_SYMBOL_VALUE, 12).unwrap();
    assert!(size > 1);
    assert!(size < src.len() * 2);

    let mut decoded = vec![0u16; src.len()];
    assert_eq!(decompress(&mut decoded, &dst[..size]).unwrap(), src.len());
    assert_eq!(decoded, src);
}

#[test]
/// Every precision from the minimum to the maximum round-trips.
fn all_table_logs_round_trip() {
    let src = skewed(3_000);
    for table_log in MIN_TABLE_LOG..=MAX_TABLE_LOG {
        let mut dst = vec![0u8; compress_bound(src.len())];
        let size = compress(&mut dst, &src, MAX_SYMBOL_VALUE, table_log).unwrap();
        assert!(size > 1, "table_log {table_log}");

        let mut decoded = vec![0u16; src.len()];
        decompress(&mut decoded, &dst[..size]).unwrap();
        assert_eq!(decoded, src, "table_log {table_log}");
    }
}

#[test]
/// A destination that is too small is reported, and bytes past it stay intact.
fn small_destination_is_rejected() {
    let src = skewed(10_000);
    let mut dst = vec![0u8; compress_bound(src.len())];
    let size = compress(&mut dst, &src, MAX_SYMBOL_VALUE, 12).unwrap();

    let mut tight = vec![0xA5u8; size];
    let err = compress(&mut tight[..size - 1], &src, MAX_SYMBOL_VALUE, 12).unwrap_err();
    assert_eq!(err, Error::DstSizeTooSmall);
    assert_eq!(tight[size - 1], 0xA5);

    assert_eq!(compress(&mut tight, &src, MAX_SYMBOL_VALUE, 12).unwrap(), size);
    assert_eq!(tight, dst[..size]);
}

#[test]
fn oversized_table_log_is_rejected() {
    let src = skewed(100);
    let mut dst = vec![0u8; compress_bound(src.len())];
    assert_eq!(
        compress(&mut dst, &src, MAX_SYMBOL_VALUE, MAX_TABLE_LOG + 1),
        Err(Error::TableLogTooLarge)
    );
}

#[test]
fn bound_below_data_is_rejected() {
    let src = skewed(1_000);
    let mut dst = vec![0u8; compress_bound(src.len())];
    assert_eq!(
        compress(&mut dst, &src, 150, 12),
        Err(Error::MaxSymbolValueTooSmall)
    );
    assert_eq!(
        compress(&mut dst, &src, MAX_SYMBOL_VALUE + 1, 12),
        Err(Error::MaxSymbolValueTooLarge)
    );
}

#[test]
/// Small blocks use a smaller table than requested.
fn table_log_shrinks_for_small_inputs() {
    assert_eq!(optimal_table_log(12, 40, 3), 6);
    assert_eq!(optimal_table_log(12, 1 << 20, 3), 12);
    assert_eq!(optimal_table_log(5, 1 << 20, 287), 10);
    assert_eq!(optimal_table_log(12, 2, 2), MIN_TABLE_LOG);
}
