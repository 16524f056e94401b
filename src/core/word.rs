//! Word representation
//!
//! A Word stores a fixed-length, uppercase-normalized sequence of ASCII letters.
//! Both secrets and guesses are Words, so the evaluator never sees a length mismatch.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of letters in every secret and guess
pub const WORD_LEN: usize = 5;

/// A validated word of exactly [`WORD_LEN`] letters
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    letters: [u8; WORD_LEN],
}

/// Reasons a raw string is not a playable word
///
/// Rejected input never reaches the game state, so it never costs an attempt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Please enter a valid {len}-letter word (got {0} characters)", len = WORD_LEN)]
    InvalidLength(usize),
    #[error("Please enter a valid {len}-letter word (letters only)", len = WORD_LEN)]
    InvalidAlphabet,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Leading and trailing whitespace is ignored and letters are uppercased.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly [`WORD_LEN`]
    /// - Contains anything other than ASCII letters
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Word;
    ///
    /// let word = Word::new("crane").unwrap();
    /// assert_eq!(word.text(), "CRANE");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref().trim();

        let count = text.chars().count();
        if count != WORD_LEN {
            return Err(WordError::InvalidLength(count));
        }

        if !text.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(WordError::InvalidAlphabet);
        }

        let mut letters = [0u8; WORD_LEN];
        for (slot, byte) in letters.iter_mut().zip(text.bytes()) {
            *slot = byte.to_ascii_uppercase();
        }

        Ok(Self { letters })
    }

    /// Get the word as a string slice (always uppercase)
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        // Only ASCII letters are ever stored
        std::str::from_utf8(&self.letters).unwrap_or_default()
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[u8; WORD_LEN] {
        &self.letters
    }

    /// Get the letter at a specific position
    ///
    /// # Panics
    /// Panics if `position >= WORD_LEN`
    #[inline]
    #[must_use]
    pub const fn letter_at(&self, position: usize) -> u8 {
        self.letters[position]
    }

    /// Number of times `letter` (uppercase) occurs in the word
    #[must_use]
    pub fn occurrences(&self, letter: u8) -> usize {
        self.letters.iter().filter(|&&l| l == letter).count()
    }
}

impl FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}
