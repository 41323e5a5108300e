//! Padding module
//!
//! This module pads an arbitrary-length byte string up to a multiple of
//! [`BITRATE`](crate::state::BITRATE) with a fixed sentinel, as the duplex
//! absorbs and encrypts only whole rate-sized blocks.

use crate::state::BITRATE;

/// Sentinel byte appended before the zero fill. Distinct from
/// [`crate::bits::PERMUTATION_ALL_SET`] (`0x7F`): the sentinel is
/// `PERMUTATION_ALL_SET + 1 = 0x80`.
pub const PAD_SENTINEL: u8 = 0x80;

/// Pads `data` with one sentinel byte followed by zero bytes until the
/// length is a multiple of [`BITRATE`]. Always appends at least one byte,
/// even when `data.len()` is already a multiple of `BITRATE`.
pub fn pad(data: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(padded_len(data.len()));
    out.extend_from_slice(data);
    out.push(PAD_SENTINEL);
    out.resize(padded_len(data.len()), 0);
    out
}

/// Computes the padded length of an `n`-byte input without materializing it.
pub fn padded_len(n: usize) -> usize {
    (n / BITRATE + 1) * BITRATE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn always_grows() {
        for n in [0usize, 1, 31, 32, 33, 63, 64, 1000] {
            let data = vec![0xAB; n];
            let padded = pad(&data);
            assert!(padded.len() > data.len());
        }
    }

    #[test]
    fn always_a_multiple_of_bitrate() {
        for n in [0usize, 1, 31, 32, 33, 63, 64, 1000] {
            let data = vec![0xAB; n];
            assert_eq!(pad(&data).len() % BITRATE, 0);
        }
    }

    #[test]
    fn padded_len_matches_pad() {
        for n in [0usize, 1, 31, 32, 33, 1000] {
            let data = vec![0u8; n];
            assert_eq!(pad(&data).len(), padded_len(n));
        }
    }

    #[test]
    fn sentinel_then_zeros() {
        let data = b"hello";
        let padded = pad(data);
        assert_eq!(&padded[..5], data);
        assert_eq!(padded[5], PAD_SENTINEL);
        assert!(padded[6..].iter().all(|&b| b == 0));
    }

    #[test]
    fn empty_input_yields_one_full_block() {
        let padded = pad(&[]);
        assert_eq!(padded.len(), BITRATE);
        assert_eq!(padded[0], PAD_SENTINEL);
    }
}
