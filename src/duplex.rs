//! Duplex module
//!
//! Implements the three duplex passes that ride on top of the round
//! function `f`: absorbing associated data, encrypting plaintext, and
//! decrypting ciphertext. Each pass interleaves input XOR (or overwrite)
//! with output emission inside a single call to `f` per block.

use crate::padding;
use crate::round;
use crate::state::{Key, State, BITRATE, CAPACITY, STATE_SIZE};

/// One block's worth of key-mixed auxiliary bytes, accumulated per
/// plaintext/ciphertext block and folded into the tag at the end of a session.
pub type AuxBlock = [u8; 16];

/// Absorbs associated data into `state`, rate-sized block by block.
///
/// `ad` is padded first (§4.7); each padded block is XORed into the rate
/// and `f` is applied for a round count derived from that block alone.
pub fn absorb_ad(state: &mut State, ad: &[u8]) {
    let padded = padding::pad(ad);
    for block in padded.chunks(BITRATE) {
        xor_into_rate(state, block);
        let rounds = round::count(block, 1);
        round::f(&mut state.0, rounds);
    }
}

/// Encrypts padded plaintext block by block, emitting ciphertext and the
/// auxiliary stream used later by [`crate::tag::derive`].
///
/// Per block: XOR the block into the rate, emit the post-XOR rate as
/// ciphertext, apply `f` with a round count derived from the post-XOR
/// capacity region, then XOR `key` into the first 16 bytes past the rate to
/// produce this block's auxiliary bytes.
pub fn encrypt(state: &mut State, key: &Key, plaintext: &[u8]) -> (Vec<u8>, Vec<AuxBlock>) {
    let padded = padding::pad(plaintext);
    let mut ciphertext = Vec::with_capacity(padded.len());
    let mut aux = Vec::with_capacity(padded.len() / BITRATE);

    for block in padded.chunks(BITRATE) {
        xor_into_rate(state, block);
        ciphertext.extend_from_slice(state.rate());

        let rounds = round::count(capacity_rate_window(state), 1);
        round::f(&mut state.0, rounds);

        aux.push(aux_block(state, key));
    }

    (ciphertext, aux)
}

/// Decrypts ciphertext block by block (excluding a trailing tag, which the
/// caller strips before calling this function).
///
/// Per block: XOR the rate with the ciphertext block to recover plaintext,
/// then **overwrite** (not XOR) the rate with the ciphertext block before
/// applying `f`. This asymmetry versus [`encrypt`] is essential to
/// round-trip correctness.
pub fn decrypt(state: &mut State, key: &Key, ciphertext: &[u8]) -> (Vec<u8>, Vec<AuxBlock>) {
    let mut plaintext = Vec::with_capacity(ciphertext.len());
    let mut aux = Vec::with_capacity(ciphertext.len() / BITRATE);

    for block in ciphertext.chunks(BITRATE) {
        let mut p = vec![0u8; BITRATE];
        for i in 0..BITRATE {
            p[i] = state.0[i] ^ block[i];
        }
        plaintext.extend_from_slice(&p);

        state.rate_mut().copy_from_slice(block);

        let rounds = round::count(capacity_rate_window(state), 1);
        round::f(&mut state.0, rounds);

        aux.push(aux_block(state, key));
    }

    (plaintext, aux)
}

fn xor_into_rate(state: &mut State, block: &[u8]) {
    for i in 0..BITRATE {
        state.0[i] ^= block[i];
    }
}

/// `S[capacity..capacity+rate)`: the tail `rate`-byte window of the
/// capacity region, used to derive the round count for `f` after a block's
/// rate has been updated.
fn capacity_rate_window(state: &State) -> &[u8] {
    &state.0[CAPACITY..CAPACITY + BITRATE]
}

/// `xor(key, S[rate..rate+16))`
fn aux_block(state: &State, key: &Key) -> AuxBlock {
    let mut a = [0u8; 16];
    for i in 0..16 {
        a[i] = key[i] ^ state.0[BITRATE + i];
    }
    a
}

const _: () = assert!(CAPACITY + BITRATE == STATE_SIZE);
