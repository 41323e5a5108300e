//! P-box module
//!
//! Data-dependent byte permutation layer of the round function `f`.
//! [`update_permutation`] derives a permutation of four indices from a
//! trigger byte; [`shuffle_bytes`] applies it to reorder a byte span into
//! four equal chunks; [`apply_state`] slides a 4-byte window cyclically
//! across the whole state.

use crate::bits::{bit, PERMUTATION_ALL_SET};
use crate::state::STATE_SIZE;

/// Updates a 4-element index permutation from a trigger byte.
///
/// Four conditional pairwise swaps, each gated on the XOR of two bits of
/// `x`, followed by two overrides that are checked *after* the swaps:
/// `x == 0x7F` forces `v = [3,1,0,2]`, `x == 0` forces `v = [0,2,3,1]`.
pub fn update_permutation(x: u8, v: &mut [usize; 4]) {
    if bit(x, 5) ^ bit(x, 1) != 0 {
        v.swap(0, 2);
    }
    if bit(x, 6) ^ bit(x, 2) != 0 {
        v.swap(1, 3);
    }
    if bit(x, 7) ^ bit(x, 3) != 0 {
        v.swap(0, 1);
    }
    if bit(x, 4) ^ bit(x, 0) != 0 {
        v.swap(2, 3);
    }

    if x == PERMUTATION_ALL_SET {
        *v = [3, 1, 0, 2];
    }
    if x == 0 {
        *v = [0, 2, 3, 1];
    }
}

/// Shuffles `src` (whose length must be a multiple of 4) into a freshly
/// allocated vector of the same length, reordering four equal-sized chunks
/// according to the permutation derived from their first bytes.
///
/// The four chunks' first bytes (`src[0]`, `src[B]`, `src[2B]`, `src[3B]`)
/// are fed into [`update_permutation`] left to right, so each later trigger
/// sees the permutation already updated by the earlier ones.
pub fn shuffle_bytes(src: &[u8]) -> Vec<u8> {
    debug_assert_eq!(src.len() % 4, 0);
    let b = src.len() / 4;

    let mut v = [0usize, 1, 2, 3];
    for k in 0..4 {
        update_permutation(src[k * b], &mut v);
    }

    let mut dst = Vec::with_capacity(src.len());
    for idx in v {
        dst.extend_from_slice(&src[idx * b..idx * b + b]);
    }
    dst
}

/// Applies the P-box state-wide: for each position `i` of the state, reads
/// the cyclic 4-byte window `S[i], S[i+1], S[i+2], S[i+3]` (indices mod
/// `STATE_SIZE`), shuffles it with a one-byte chunk size, and writes the
/// result back to the same four positions before moving to `i + 1`.
///
/// The pass is sequential and in place: iteration `i` observes every write
/// made by iterations `0..i`.
pub fn apply_state(state: &mut [u8; STATE_SIZE]) {
    for i in 0..STATE_SIZE {
        let idx = [i, (i + 1) % STATE_SIZE, (i + 2) % STATE_SIZE, (i + 3) % STATE_SIZE];
        let word = [state[idx[0]], state[idx[1]], state[idx[2]], state[idx[3]]];
        let shuffled = shuffle_bytes(&word);
        for (k, &pos) in idx.iter().enumerate() {
            state[pos] = shuffled[k];
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_set_trigger_forces_override() {
        let mut v = [1usize, 0, 3, 2];
        update_permutation(PERMUTATION_ALL_SET, &mut v);
        assert_eq!(v, [3, 1, 0, 2]);
    }

    #[test]
    fn zero_trigger_forces_override() {
        let mut v = [3usize, 2, 1, 0];
        update_permutation(0, &mut v);
        assert_eq!(v, [0, 2, 3, 1]);
    }

    #[test]
    fn overrides_win_regardless_of_starting_permutation() {
        for start in [[0, 1, 2, 3], [3, 2, 1, 0], [1, 0, 3, 2]] {
            let mut v = start;
            update_permutation(PERMUTATION_ALL_SET, &mut v);
            assert_eq!(v, [3, 1, 0, 2]);

            let mut v = start;
            update_permutation(0, &mut v);
            assert_eq!(v, [0, 2, 3, 1]);
        }
    }

    #[test]
    fn shuffle_bytes_is_a_rearrangement() {
        let src: Vec<u8> = (0..16).collect();
        let shuffled = shuffle_bytes(&src);
        let mut sorted_src = src.clone();
        let mut sorted_shuffled = shuffled.clone();
        sorted_src.sort();
        sorted_shuffled.sort();
        assert_eq!(sorted_src, sorted_shuffled);
        assert_eq!(shuffled.len(), src.len());
    }

    #[test]
    fn pbox_state_changes_the_state() {
        let mut state = [0u8; STATE_SIZE];
        for (i, b) in state.iter_mut().enumerate() {
            *b = (i * 13 + 7) as u8;
        }
        let original = state;
        apply_state(&mut state);
        assert_ne!(state, original);
    }
}
