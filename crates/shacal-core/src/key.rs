//! Key types and fresh-key generation.

use rand::rngs::OsRng;
use rand::RngCore;

use crate::error::ShacalError;

/// Number of 32-bit words in an initial key.
pub const KEY_WORDS: usize = 4;

/// Number of bytes in a serialized initial key.
pub const KEY_BYTES: usize = KEY_WORDS * 4;

/// Number of rounds, and therefore of expanded round subkeys.
pub const ROUNDS: usize = 80;

/// 128-bit initial key wrapper.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShacalKey(pub [u32; KEY_WORDS]);

impl From<[u32; KEY_WORDS]> for ShacalKey {
    fn from(value: [u32; KEY_WORDS]) -> Self {
        Self(value)
    }
}

impl ShacalKey {
    /// Draws a fresh key from the operating system's entropy source.
    ///
    /// # Errors
    /// Returns [`ShacalError::Randomness`] if the source cannot supply
    /// entropy; the failure is fatal and not retried.
    pub fn generate() -> Result<Self, ShacalError> {
        let mut bytes = [0u8; KEY_BYTES];
        OsRng.try_fill_bytes(&mut bytes)?;
        Ok(Self::from_be_bytes(&bytes))
    }

    /// Builds a key from 16 big-endian bytes.
    pub fn from_be_bytes(bytes: &[u8; KEY_BYTES]) -> Self {
        let mut words = [0u32; KEY_WORDS];
        for (word, chunk) in words.iter_mut().zip(bytes.chunks_exact(4)) {
            *word = u32::from_be_bytes(chunk.try_into().expect("chunk length is four"));
        }
        Self(words)
    }

    /// Serializes the key as 16 big-endian bytes.
    pub fn to_be_bytes(&self) -> [u8; KEY_BYTES] {
        let mut bytes = [0u8; KEY_BYTES];
        for (chunk, word) in bytes.chunks_exact_mut(4).zip(self.0.iter()) {
            chunk.copy_from_slice(&word.to_be_bytes());
        }
        bytes
    }
}

/// Expanded round keys, one 32-bit subkey per round.
///
/// Derived once per cipher invocation via [`expand_key`](crate::expand_key)
/// and shared read-only across all blocks of a buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundKeys(pub [u32; ROUNDS]);

impl RoundKeys {
    /// Returns the subkey for the requested round (0..=79).
    #[inline]
    pub fn get(&self, round: usize) -> u32 {
        self.0[round]
    }
}
