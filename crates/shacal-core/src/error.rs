//! Error types for the cipher core.

use thiserror::Error;

/// Errors produced by the cipher core.
///
/// Every operation either fully succeeds or fails with one of these kinds;
/// no partial output is ever produced. Note that corrupted ciphertext is
/// *not* detectable at this layer: it decrypts to incorrect plaintext
/// without error.
#[derive(Debug, Error)]
pub enum ShacalError {
    /// A word slice handed to the block layer did not contain exactly five
    /// words. This is a programming-contract violation, not a data error.
    #[error("block must contain exactly 5 words, got {0}")]
    InvalidBlockLength(usize),
    /// Ciphertext handed to the pipeline for decryption is not a whole
    /// number of 20-byte blocks.
    #[error("ciphertext length {0} is not a multiple of 20 bytes")]
    InvalidCiphertextLength(usize),
    /// The operating system's randomness source could not supply entropy.
    /// Fatal; key generation is never retried.
    #[error("randomness source failure")]
    Randomness(#[from] rand::Error),
}
