//! Round functions and the invertible round step.

use crate::block::Block;

/// Choice function: each bit of `b` selects the bit of `c` or `d`.
#[inline]
pub fn f_choice(b: u32, c: u32, d: u32) -> u32 {
    (b & c) | (!b & d)
}

/// Parity function: three-way XOR.
#[inline]
pub fn f_parity(b: u32, c: u32, d: u32) -> u32 {
    b ^ c ^ d
}

/// Majority function: bitwise two-of-three vote.
#[inline]
pub fn f_majority(b: u32, c: u32, d: u32) -> u32 {
    (b & c) | (b & d) | (c & d)
}

/// Applies one forward round step to the state in place.
#[inline]
pub fn encrypt_round(state: &mut Block, rf: impl Fn(u32, u32, u32) -> u32) {
    let [a, b, c, d, e] = *state;
    let t = rf(b, c, d).wrapping_add(e).wrapping_add(a.rotate_left(5));
    *state = [t, a, b.rotate_left(30), c, d];
}

/// Applies one inverse round step, undoing [`encrypt_round`] for the same
/// round function.
///
/// `rotate_left(c, 2)` recovers the pre-rotation B word, so the same `rf`
/// inputs as the forward step are reconstructed exactly.
#[inline]
pub fn decrypt_round(state: &mut Block, rf: impl Fn(u32, u32, u32) -> u32) {
    let [a, b, c, d, e] = *state;
    let restored = c.rotate_left(2);
    let t = a
        .wrapping_sub(rf(restored, d, e))
        .wrapping_sub(b.rotate_left(5));
    *state = [b, restored, d, e, t];
}

/// Mixes a round subkey into word 0 of the state (other words untouched).
#[inline]
pub fn key_add(state: &mut Block, subkey: u32) {
    state[0] = state[0].wrapping_add(subkey);
}

/// Removes a round subkey from word 0 with wrapping subtraction.
#[inline]
pub fn key_sub(state: &mut Block, subkey: u32) {
    state[0] = state[0].wrapping_sub(subkey);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::RngCore;

    fn random_block(rng: &mut impl RngCore) -> Block {
        let mut block = [0u32; 5];
        for word in block.iter_mut() {
            *word = rng.next_u32();
        }
        block
    }

    #[test]
    fn round_step_inverts_for_every_round_function() {
        let fns: [fn(u32, u32, u32) -> u32; 3] = [f_choice, f_parity, f_majority];
        let mut rng = rand::thread_rng();
        for rf in fns {
            for _ in 0..200 {
                let original = random_block(&mut rng);
                let mut state = original;
                encrypt_round(&mut state, rf);
                decrypt_round(&mut state, rf);
                assert_eq!(state, original);
            }
        }
    }

    #[test]
    fn round_step_inverts_at_edge_states() {
        for state in [[0u32; 5], [u32::MAX; 5]] {
            let mut working = state;
            encrypt_round(&mut working, f_majority);
            decrypt_round(&mut working, f_majority);
            assert_eq!(working, state);
        }
    }

    #[test]
    fn key_add_and_sub_cancel_with_wraparound() {
        let mut state = [u32::MAX, 1, 2, 3, 4];
        key_add(&mut state, 0xDEAD_BEEF);
        key_sub(&mut state, 0xDEAD_BEEF);
        assert_eq!(state, [u32::MAX, 1, 2, 3, 4]);
    }

    #[test]
    fn key_add_touches_only_word_zero() {
        let mut state = [0u32, 10, 20, 30, 40];
        key_add(&mut state, 7);
        assert_eq!(state, [7, 10, 20, 30, 40]);
    }
}
