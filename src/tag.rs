//! Tag module
//!
//! Finalizes a session's state into a 16-byte authentication tag and
//! provides a data-independent-time comparison for verifying one.

use subtle::ConstantTimeEq;

use crate::duplex::AuxBlock;
use crate::pbox;
use crate::round;
use crate::state::{State, Tag, BITRATE};

/// Derives the tag from the final state and the auxiliary stream
/// accumulated during encryption or decryption.
///
/// Applies one more round of `f` (count derived from the first 16 bytes of
/// the state), shuffles the concatenated auxiliary stream, and XORs its
/// first 16 bytes with `S[rate..rate+16)`.
pub fn derive(state: &mut State, aux: &[AuxBlock]) -> Tag {
    let rounds = round::count(&state.0[0..16], 1);
    round::f(&mut state.0, rounds);

    let flat: Vec<u8> = aux.iter().flat_map(|block| block.iter().copied()).collect();
    let shuffled = pbox::shuffle_bytes(&flat);

    let mut tag = [0u8; 16];
    for i in 0..16 {
        tag[i] = state.0[BITRATE + i] ^ shuffled[i];
    }

    log::trace!("derived tag from {} auxiliary blocks", aux.len());
    tag
}

/// Compares two tags in data-independent time.
pub fn valid(a: &Tag, b: &Tag) -> bool {
    a[..].ct_eq(&b[..]).into()
}
