//! Sponge-duplex authenticated encryption
//!
//! An experimental AEAD construction: a keyed 80-byte duplex state is
//! permuted by a data-dependent composition of an S-box and a P-box, with
//! plaintext/ciphertext and associated data absorbed or squeezed through
//! the rate, and a tag folded from a key-mixed auxiliary stream.
//!
//! This is **not** a vetted cipher — it reproduces a specific construction
//! (including its small statistical bias) rather than inventing a secure
//! one. See [`stats`] for the optional cryptanalysis harness that
//! quantifies those biases.
//!
//! The typical flow:
//!
//! ```
//! use duplexcrypt::session::Session;
//! use duplexcrypt::tag;
//!
//! let key = [0x42u8; 16];
//! let iv = [0x24u8; 16];
//!
//! let mut session = Session::new(key, iv);
//! session.absorb_ad(b"header").unwrap();
//! let (ciphertext, sent_tag) = session.encrypt(b"hello world").unwrap();
//!
//! let mut session = Session::new(key, iv);
//! session.absorb_ad(b"header").unwrap();
//! let (plaintext, recomputed_tag) = session.decrypt(&ciphertext).unwrap();
//! assert!(tag::valid(&sent_tag, &recomputed_tag));
//! assert_eq!(&plaintext[..11], b"hello world");
//! ```

pub mod bits;
pub mod cli;
pub mod duplex;
pub mod error;
pub mod io;
pub mod padding;
pub mod pbox;
pub mod round;
pub mod sbox;
pub mod session;
pub mod state;
pub mod stats;
pub mod tag;

pub use error::Error;
pub use session::Session;
pub use state::{Iv, Key, Tag};
