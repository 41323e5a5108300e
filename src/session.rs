//! Session module
//!
//! This module provides [`Session`], the high-level entry point that wires
//! the duplex primitives together in the order the construction requires:
//! `new` -> `absorb_ad` -> `encrypt` or `decrypt`. The final step derives
//! and returns the tag, so there is no separate `get_tag` call on the public
//! surface — consuming `encrypt`/`decrypt` by value enforces that a session
//! is used exactly once.

use crate::duplex;
use crate::error::{check_len, Error};
use crate::padding::padded_len;
use crate::state::{Iv, Key, State, Tag, TAG_SIZE};
use crate::tag;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
enum Phase {
    Fresh,
    AdAbsorbed,
}

/// A single authenticated-encryption session
///
/// Owns the 80-byte duplex state and the key. Not `Copy`, not `Clone`: the
/// state is a tree-shaped, exclusively owned resource. Dropping a `Session`
/// zeroizes `key` directly and `state` through [`State`]'s own `Drop` impl.
pub struct Session {
    key: Key,
    state: State,
    phase: Phase,
}

impl Session {
    /// Derives the initial state from `key` and `iv` (§4.8).
    pub fn new(key: Key, iv: Iv) -> Self {
        Session {
            state: State::new(&key, &iv),
            key,
            phase: Phase::Fresh,
        }
    }

    /// Absorbs associated data. May be called exactly once, before
    /// `encrypt` or `decrypt`.
    pub fn absorb_ad(&mut self, ad: &[u8]) -> Result<(), Error> {
        if self.phase != Phase::Fresh {
            return Err(Error::SessionMisuse(
                "absorb_ad called more than once, or after encrypt/decrypt",
            ));
        }
        check_len(ad.len())?;

        duplex::absorb_ad(&mut self.state, ad);
        self.phase = Phase::AdAbsorbed;
        Ok(())
    }

    /// Encrypts `plaintext` and finalizes the session.
    ///
    /// Returns `(ciphertext, tag)` where `ciphertext` already has `tag`
    /// appended: `ciphertext.len() == padded_len(plaintext.len()) + 16`.
    pub fn encrypt(mut self, plaintext: &[u8]) -> Result<(Vec<u8>, Tag), Error> {
        self.require_ad_absorbed()?;
        check_len(plaintext.len())?;

        let (mut ciphertext, aux) = duplex::encrypt(&mut self.state, &self.key, plaintext);
        let tag = tag::derive(&mut self.state, &aux);
        ciphertext.extend_from_slice(&tag);

        log::trace!(
            "encrypted {} bytes into {} bytes of ciphertext",
            plaintext.len(),
            ciphertext.len()
        );
        Ok((ciphertext, tag))
    }

    /// Decrypts `ciphertext` (which must include the trailing 16-byte tag)
    /// and finalizes the session.
    ///
    /// Returns `(plaintext, tag)` where `plaintext` is the padded plaintext
    /// (§8 property 1) and `tag` is the *recomputed* tag — callers must
    /// compare it against the trailing 16 bytes of `ciphertext` with
    /// [`crate::tag::valid`] before trusting `plaintext`.
    pub fn decrypt(mut self, ciphertext: &[u8]) -> Result<(Vec<u8>, Tag), Error> {
        self.require_ad_absorbed()?;
        check_len(ciphertext.len())?;

        if ciphertext.len() < TAG_SIZE {
            return Err(Error::Malformed("ciphertext shorter than a tag"));
        }
        let body_len = ciphertext.len() - TAG_SIZE;
        if body_len % crate::state::BITRATE != 0 {
            return Err(Error::Malformed(
                "ciphertext body length is not a multiple of the bitrate",
            ));
        }

        let body = &ciphertext[..body_len];
        let (plaintext, aux) = duplex::decrypt(&mut self.state, &self.key, body);
        let tag = tag::derive(&mut self.state, &aux);

        log::trace!("decrypted {body_len} bytes of ciphertext body");
        Ok((plaintext, tag))
    }

    fn require_ad_absorbed(&self) -> Result<(), Error> {
        if self.phase != Phase::AdAbsorbed {
            Err(Error::SessionMisuse(
                "encrypt/decrypt called before absorb_ad",
            ))
        } else {
            Ok(())
        }
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        use zeroize::Zeroize;
        self.key.zeroize();
    }
}

/// Convenience wrapper: decrypts and verifies the tag in one call,
/// returning [`Error::TagMismatch`] instead of handing back unauthenticated
/// plaintext.
pub fn decrypt_and_verify(session: Session, ciphertext: &[u8]) -> Result<Vec<u8>, Error> {
    if ciphertext.len() < TAG_SIZE {
        return Err(Error::Malformed("ciphertext shorter than a tag"));
    }
    let received_tag_start = ciphertext.len() - TAG_SIZE;
    let mut received: Tag = [0u8; TAG_SIZE];
    received.copy_from_slice(&ciphertext[received_tag_start..]);

    let (plaintext, recomputed) = session.decrypt(ciphertext)?;
    if !tag::valid(&received, &recomputed) {
        return Err(Error::TagMismatch);
    }
    Ok(plaintext)
}

/// `((plaintext.len() / 32) + 1) * 32 + 16` — the length `encrypt` returns for a given plaintext length.
pub fn encrypted_len(plaintext_len: usize) -> usize {
    padded_len(plaintext_len) + TAG_SIZE
}
