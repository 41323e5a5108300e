//! I/O module
//!
//! Thin, binary-safe file reader collaborator. The core never touches
//! files directly; this module exists so the CLI (and callers embedding the
//! crate) have one place to load key/IV/AD/plaintext material from disk.

use std::path::Path;

use crate::error::Error;

/// Reads the entire contents of `path` as raw bytes, with no transcoding.
pub fn read_all(path: impl AsRef<Path>) -> Result<Vec<u8>, Error> {
    std::fs::read(path).map_err(Error::from)
}

/// Parses a hex string into raw bytes (used for key/IV/AD command-line arguments).
pub fn parse_hex(s: &str) -> Result<Vec<u8>, Error> {
    if s.len() % 2 != 0 {
        return Err(Error::Malformed("hex string must have an even length"));
    }
    (0..s.len())
        .step_by(2)
        .map(|i| {
            u8::from_str_radix(&s[i..i + 2], 16)
                .map_err(|_| Error::Malformed("invalid hex digit"))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_hex_round_trips() {
        assert_eq!(parse_hex("00ff10").unwrap(), vec![0x00, 0xff, 0x10]);
    }

    #[test]
    fn parse_hex_rejects_odd_length() {
        assert!(parse_hex("abc").is_err());
    }

    #[test]
    fn parse_hex_rejects_non_hex() {
        assert!(parse_hex("zz").is_err());
    }
}
