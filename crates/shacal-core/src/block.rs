//! Block representation helpers.

use crate::error::ShacalError;

/// Number of 32-bit words in a cipher block.
pub const WORDS_PER_BLOCK: usize = 5;

/// Number of bytes in a serialized cipher block.
pub const BLOCK_BYTES: usize = WORDS_PER_BLOCK * 4;

/// Cipher block of five 32-bit words (160 bits).
pub type Block = [u32; WORDS_PER_BLOCK];

/// Converts a word slice into a [`Block`], checking the length precondition.
///
/// # Errors
/// Returns [`ShacalError::InvalidBlockLength`] if `words` does not contain
/// exactly five words.
pub fn block_from_words(words: &[u32]) -> Result<Block, ShacalError> {
    words
        .try_into()
        .map_err(|_| ShacalError::InvalidBlockLength(words.len()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_exactly_five_words() {
        let words = [1u32, 2, 3, 4, 5];
        assert_eq!(block_from_words(&words).unwrap(), words);
    }

    #[test]
    fn rejects_short_and_long_slices() {
        assert!(matches!(
            block_from_words(&[0u32; 4]),
            Err(ShacalError::InvalidBlockLength(4))
        ));
        assert!(matches!(
            block_from_words(&[0u32; 6]),
            Err(ShacalError::InvalidBlockLength(6))
        ));
    }
}
