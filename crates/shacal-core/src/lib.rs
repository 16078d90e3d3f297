//! SHA-1-derived 160-bit block cipher and whole-buffer encryption pipeline.
//!
//! The cipher reuses the SHA-1 round structure as a keyed permutation in the
//! manner of SHACAL: an 80-round transform over a five-word state, driven by
//! subkeys expanded from a 128-bit key with the SHA-1 message-schedule
//! recurrence and round constants. This crate provides:
//! - Fresh key generation and the 80-word key schedule.
//! - Single-block encryption and decryption.
//! - A byte-buffer pipeline with zero padding and big-endian word packing.
//!
//! The implementation aims for clarity and bit-exact invertibility rather
//! than constant-time guarantees; it should not be treated as side-channel
//! hardened.
//!
//! # Compatibility caveats
//!
//! Blocks are transformed independently (no chaining, no IV), so identical
//! plaintext blocks produce identical ciphertext blocks. There is no
//! integrity check: tampered ciphertext decrypts silently to garbage. The
//! zero padding is not self-describing, so trailing plaintext zeros cannot
//! be told apart from the pad, which is never stripped on decryption. All
//! three properties are kept for wire compatibility and make the scheme
//! unsuitable for new designs.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod block;
mod cipher;
mod error;
mod key;
mod pipeline;
mod round;

pub use crate::block::{block_from_words, Block, BLOCK_BYTES, WORDS_PER_BLOCK};
pub use crate::cipher::{decrypt_block, encrypt_block, expand_key};
pub use crate::error::ShacalError;
pub use crate::key::{RoundKeys, ShacalKey, KEY_BYTES, KEY_WORDS, ROUNDS};
pub use crate::pipeline::{decrypt_bytes, encrypt_bytes};
