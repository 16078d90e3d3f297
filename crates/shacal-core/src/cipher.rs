//! Key schedule and single-block encryption/decryption.

use crate::block::Block;
use crate::key::{RoundKeys, ShacalKey, KEY_WORDS, ROUNDS};
use crate::round::{
    decrypt_round, encrypt_round, f_choice, f_majority, f_parity, key_add, key_sub,
};

/// Per-quartile constants added to the expanded subkeys.
const ROUND_CONSTANTS: [u32; 4] = [0x5A82_7999, 0x6ED9_EBA1, 0x8F1B_BCDC, 0xCA62_C1D6];

/// Number of schedule slots seeded directly from the initial key.
const SEED_WORDS: usize = 16;

/// Rounds per quartile; each quartile uses one round function.
const QUARTILE: usize = ROUNDS / 4;

/// Expands a 128-bit key into 80 round subkeys.
///
/// The four key words are repeated cyclically to fill the first 16 schedule
/// slots; slots 16..79 follow the SHA-1 message-schedule recurrence
/// `w[t] = rotl(w[t-3] ^ w[t-8] ^ w[t-14] ^ w[t-16], 1)`. Each subkey then
/// has its quartile constant added. Same key in, same subkeys out, always.
pub fn expand_key(key: &ShacalKey) -> RoundKeys {
    let mut w = [0u32; ROUNDS];
    for (t, slot) in w.iter_mut().enumerate().take(SEED_WORDS) {
        *slot = key.0[t % KEY_WORDS];
    }
    for t in SEED_WORDS..ROUNDS {
        w[t] = (w[t - 3] ^ w[t - 8] ^ w[t - 14] ^ w[t - 16]).rotate_left(1);
    }
    for (t, word) in w.iter_mut().enumerate() {
        *word = word.wrapping_add(ROUND_CONSTANTS[t / QUARTILE]);
    }
    RoundKeys(w)
}

/// Encrypts a single five-word block with pre-expanded round keys.
///
/// Quartile order is choice, parity, majority, parity — the SHA-1 pattern.
/// Each round applies the forward step, then adds the round subkey into
/// word 0.
pub fn encrypt_block(block: &Block, round_keys: &RoundKeys) -> Block {
    let mut state = *block;
    for t in 0..QUARTILE {
        encrypt_round(&mut state, f_choice);
        key_add(&mut state, round_keys.get(t));
    }
    for t in QUARTILE..2 * QUARTILE {
        encrypt_round(&mut state, f_parity);
        key_add(&mut state, round_keys.get(t));
    }
    for t in 2 * QUARTILE..3 * QUARTILE {
        encrypt_round(&mut state, f_majority);
        key_add(&mut state, round_keys.get(t));
    }
    for t in 3 * QUARTILE..ROUNDS {
        encrypt_round(&mut state, f_parity);
        key_add(&mut state, round_keys.get(t));
    }
    state
}

/// Decrypts a single five-word block with pre-expanded round keys.
///
/// Exact inverse of [`encrypt_block`]: subkeys are removed in reverse
/// order, each followed by the inverse round step with the round function
/// the matching forward round used.
pub fn decrypt_block(block: &Block, round_keys: &RoundKeys) -> Block {
    let mut state = *block;
    for i in 0..QUARTILE {
        key_sub(&mut state, round_keys.get(ROUNDS - i - 1));
        decrypt_round(&mut state, f_parity);
    }
    for i in QUARTILE..2 * QUARTILE {
        key_sub(&mut state, round_keys.get(ROUNDS - i - 1));
        decrypt_round(&mut state, f_majority);
    }
    for i in 2 * QUARTILE..3 * QUARTILE {
        key_sub(&mut state, round_keys.get(ROUNDS - i - 1));
        decrypt_round(&mut state, f_parity);
    }
    for i in 3 * QUARTILE..ROUNDS {
        key_sub(&mut state, round_keys.get(ROUNDS - i - 1));
        decrypt_round(&mut state, f_choice);
    }
    state
}
