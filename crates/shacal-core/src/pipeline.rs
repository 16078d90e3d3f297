//! Whole-buffer pipeline: zero padding, big-endian word packing, and the
//! per-block ECB drive.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::debug;

use crate::block::{block_from_words, Block, BLOCK_BYTES, WORDS_PER_BLOCK};
use crate::cipher::{decrypt_block, encrypt_block, expand_key};
use crate::error::ShacalError;
use crate::key::{RoundKeys, ShacalKey};

/// Encrypts a byte buffer, padding it to a whole number of blocks first.
///
/// The pad is `20 - (len mod 20)` zero bytes, always in 1..=20: a
/// block-aligned input gains a full extra zero block. The pad carries no
/// length marker and [`decrypt_bytes`] never strips it.
///
/// # Errors
/// Only a programming-contract violation inside the block layer can fail
/// here; the padded buffer always satisfies its length preconditions.
pub fn encrypt_bytes(data: &[u8], key: &ShacalKey) -> Result<Vec<u8>, ShacalError> {
    let pad = BLOCK_BYTES - data.len() % BLOCK_BYTES;
    let mut padded = Vec::with_capacity(data.len() + pad);
    padded.extend_from_slice(data);
    padded.resize(data.len() + pad, 0);

    let mut words = unpack_words(&padded);
    debug!(
        bytes = padded.len(),
        blocks = words.len() / WORDS_PER_BLOCK,
        "encrypting buffer"
    );
    let round_keys = expand_key(key);
    transform_words(&mut words, &round_keys, encrypt_block)?;
    Ok(pack_words(&words))
}

/// Decrypts a block-aligned ciphertext buffer.
///
/// Zero padding added during encryption remains in the output; callers
/// that need the exact plaintext length must track it out of band.
///
/// # Errors
/// Returns [`ShacalError::InvalidCiphertextLength`] if `data` is not a
/// multiple of 20 bytes. No partial output is produced.
pub fn decrypt_bytes(data: &[u8], key: &ShacalKey) -> Result<Vec<u8>, ShacalError> {
    if data.len() % BLOCK_BYTES != 0 {
        return Err(ShacalError::InvalidCiphertextLength(data.len()));
    }
    let mut words = unpack_words(data);
    debug!(
        bytes = data.len(),
        blocks = words.len() / WORDS_PER_BLOCK,
        "decrypting buffer"
    );
    let round_keys = expand_key(key);
    transform_words(&mut words, &round_keys, decrypt_block)?;
    Ok(pack_words(&words))
}

/// Runs the block transform over every five-word chunk independently.
///
/// Blocks carry no chaining dependency, so with the `parallel` feature the
/// chunks are farmed out to the rayon pool; output order is preserved
/// because each chunk is rewritten in place, and the round keys are shared
/// read-only across workers.
fn transform_words(
    words: &mut [u32],
    round_keys: &RoundKeys,
    step: fn(&Block, &RoundKeys) -> Block,
) -> Result<(), ShacalError> {
    let apply = |chunk: &mut [u32]| -> Result<(), ShacalError> {
        let block = block_from_words(chunk)?;
        chunk.copy_from_slice(&step(&block, round_keys));
        Ok(())
    };

    #[cfg(feature = "parallel")]
    return words.par_chunks_mut(WORDS_PER_BLOCK).try_for_each(apply);

    #[cfg(not(feature = "parallel"))]
    words.chunks_mut(WORDS_PER_BLOCK).try_for_each(apply)
}

/// Unpacks big-endian bytes into 32-bit words; callers guarantee the
/// length is word-aligned.
fn unpack_words(bytes: &[u8]) -> Vec<u32> {
    bytes
        .chunks_exact(4)
        .map(|chunk| u32::from_be_bytes(chunk.try_into().expect("chunk length is four")))
        .collect()
}

/// Packs 32-bit words back into big-endian bytes.
fn pack_words(words: &[u32]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(words.len() * 4);
    for word in words {
        bytes.extend_from_slice(&word.to_be_bytes());
    }
    bytes
}
