//! Unit tests for block decompression.

use super::*;
use crate::{compress, compress_bound, MAX_SYMBOL_VALUE};

fn compressed_sample(len: usize) -> (Vec<u16>, Vec<u8>) {
    let src: Vec<u16> = (0..len as u32)
        .map(|i| match i % 16 {
            0..=9 => 240,
            10..=13 => 241,
            14 => 17,
            _ => (i % 200) as u16,
        })
        .collect();
    let mut dst = vec![0u8; compress_bound(src.len())];
    let size = compress(&mut dst, &src, MAX_SYMBOL_VALUE, 12).unwrap();
    assert!(size > 1);
    dst.truncate(size);
    (src, dst)
}

#[test]
/// Decoding into an exactly sized destination succeeds.
fn exact_destination_succeeds() {
    let (src, frame) = compressed_sample(5_000);
    let mut out = vec![0u16; src.len()];
    assert_eq!(decompress(&mut out, &frame).unwrap(), src.len());
    assert_eq!(out, src);
}

#[test]
/// Extra room is left untouched.
fn oversized_destination_succeeds() {
    let (src, frame) = compressed_sample(5_000);
    let mut out = vec![0xBEEFu16; src.len() + 17];
    assert_eq!(decompress(&mut out, &frame).unwrap(), src.len());
    assert_eq!(&out[..src.len()], &src[..]);
    assert!(out[src.len()..].iter().all(|&s| s == 0xBEEF));
}

#[test]
/// A destination short by any amount fails without writing.
fn undersized_destination_fails() {
    let (src, frame) = compressed_sample(5_000);
    for shrink in [1, 2, 31, 32, 4_999] {
        let mut out = vec![0xBEEFu16; src.len()];
        let err = decompress(&mut out[..src.len() - shrink], &frame).unwrap_err();
        assert_eq!(err, Error::DstSizeTooSmall);
        assert!(out.iter().all(|&s| s == 0xBEEF));
    }
}

#[test]
/// Trailing or missing bytes are reported as a size mismatch.
fn wrong_source_length_fails() {
    let (src, mut frame) = compressed_sample(2_000);
    let mut out = vec![0u16; src.len()];

    assert_eq!(
        decompress(&mut out, &frame[..frame.len() - 1]).unwrap_err(),
        Error::SrcSizeWrong
    );

    frame.push(0);
    assert_eq!(decompress(&mut out, &frame).unwrap_err(), Error::SrcSizeWrong);
}

#[test]
/// A frame claiming more symbols than were encoded is detected.
fn inflated_symbol_count_is_detected() {
    let (src, mut frame) = compressed_sample(2_000);
    let claimed = (src.len() as u32 + 10).to_le_bytes();
    frame[1..5].copy_from_slice(&claimed);

    let mut out = vec![0u16; src.len() + 10];
    assert!(decompress(&mut out, &frame).is_err());
}

#[test]
/// Degenerate compressor outputs are not frames.
fn degenerate_codes_are_not_frames() {
    let mut out = vec![0u16; 8];
    assert_eq!(decompress(&mut out, &[]).unwrap_err(), Error::SrcSizeWrong);
    assert!(decompress(&mut out, &[0]).is_err());
}
