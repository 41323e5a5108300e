//! Error types module
//!
//! This module provides the error type shared by every fallible operation
//! in the crate.

use std::fmt;

/// The maximum associated-data or plaintext length this crate will process.
///
/// Chosen so that `len + BITRATE` (the padding worst case) never overflows
/// `usize`, matching the implicit ceiling in the original reference
/// implementation (`FILE_MAX_SIZE`).
pub const MAX_INPUT_LEN: usize = usize::MAX - crate::state::BITRATE;

/// Crate-wide error type
#[derive(Debug)]
pub enum Error {
    /// Associated data or plaintext exceeded [`MAX_INPUT_LEN`]
    InputTooLarge { len: usize, max: usize },
    /// A recomputed tag did not match the one supplied by the caller
    TagMismatch,
    /// A [`Session`](crate::session::Session) method was called out of the
    /// required `init -> absorb_ad -> encrypt|decrypt` order
    SessionMisuse(&'static str),
    /// A byte string handed to the duplex was not shaped the way the
    /// construction requires (e.g. a ciphertext shorter than a tag, or not
    /// padded to a block multiple)
    Malformed(&'static str),
    /// Propagated from a collaborator (file I/O)
    Io(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InputTooLarge { len, max } => {
                write!(f, "input of {len} bytes exceeds the maximum of {max} bytes")
            }
            Error::TagMismatch => write!(f, "authentication tag mismatch"),
            Error::SessionMisuse(msg) => write!(f, "session used out of order: {msg}"),
            Error::Malformed(msg) => write!(f, "malformed input: {msg}"),
            Error::Io(err) => write!(f, "I/O error: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

/// Checks an AD or plaintext length against [`MAX_INPUT_LEN`]
pub(crate) fn check_len(len: usize) -> Result<(), Error> {
    if len > MAX_INPUT_LEN {
        log::error!("input length {len} exceeds maximum {MAX_INPUT_LEN}");
        return Err(Error::InputTooLarge {
            len,
            max: MAX_INPUT_LEN,
        });
    }
    Ok(())
}
