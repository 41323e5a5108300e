//! State module
//!
//! Defines the fixed-size constants of the construction and [`State`], the
//! single 80-byte owned buffer that every duplex operation mutates in
//! place. [`State::new`] derives the initial state from a key and IV.

use crate::bits;
use crate::pbox;
use crate::round;

/// Width of the duplex state, in bytes
pub const STATE_SIZE: usize = 80;
/// Width of the input-visible prefix ("rate") of the state, in bytes
pub const BITRATE: usize = 32;
/// Width of the hidden suffix ("capacity") of the state, in bytes
pub const CAPACITY: usize = STATE_SIZE - BITRATE;
/// Width of the four S-box/P-box sub-blocks, in bytes
pub const BLOCK_SIZE: usize = STATE_SIZE / 4;

/// Width of a key, IV, or tag, in bytes
pub const KEY_SIZE: usize = 16;
pub const IV_SIZE: usize = KEY_SIZE;
pub const TAG_SIZE: usize = KEY_SIZE;

const _: () = assert!(STATE_SIZE == 4 * BLOCK_SIZE);
const _: () = assert!(BITRATE <= STATE_SIZE);

pub type Key = [u8; KEY_SIZE];
pub type Iv = [u8; IV_SIZE];
pub type Tag = [u8; TAG_SIZE];

/// The 80-byte duplex state
///
/// Owns its buffer exclusively; every permutation and every duplex step
/// mutates it in place. Never aliased, never shared.
#[derive(Clone)]
pub struct State(pub(crate) [u8; STATE_SIZE]);

impl State {
    /// Derives the initial state from `key` and `iv`.
    ///
    /// Writes `key ‖ invert(iv) ‖ shuffle(key) ‖ iv ‖ (key xor iv)` into the
    /// 80-byte buffer, then applies `f` for a round count derived from the
    /// whole state with a stride of 2.
    pub fn new(key: &Key, iv: &Iv) -> Self {
        let niv = bits::invert(iv);
        let sk = pbox::shuffle_bytes(key);
        let kxv = bits::xor(key, iv);

        let mut bytes = [0u8; STATE_SIZE];
        bytes[0..16].copy_from_slice(key);
        bytes[16..32].copy_from_slice(&niv);
        bytes[32..48].copy_from_slice(&sk);
        bytes[48..64].copy_from_slice(iv);
        bytes[64..80].copy_from_slice(&kxv);

        let rounds = round::count(&bytes, 2);
        round::f(&mut bytes, rounds);

        log::trace!("initialized state with {rounds} rounds");
        State(bytes)
    }

    pub fn rate(&self) -> &[u8] {
        &self.0[0..BITRATE]
    }

    pub fn rate_mut(&mut self) -> &mut [u8] {
        &mut self.0[0..BITRATE]
    }

    pub fn capacity_region(&self) -> &[u8] {
        &self.0[BITRATE..STATE_SIZE]
    }

    pub fn as_bytes(&self) -> &[u8; STATE_SIZE] {
        &self.0
    }
}

impl Drop for State {
    fn drop(&mut self) {
        use zeroize::Zeroize;
        self.0.zeroize();
    }
}

/// Generates a random 16-byte key
#[cfg(feature = "rand")]
pub fn random_key() -> Key {
    rand::random()
}

/// Generates a random 16-byte IV
#[cfg(feature = "rand")]
pub fn random_iv() -> Iv {
    rand::random()
}
