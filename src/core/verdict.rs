//! Guess feedback calculation and representation
//!
//! A verdict holds one mark per position:
//! - Absent (letter not available in the secret)
//! - Misplaced (letter in the secret, wrong position)
//! - Correct (letter in the correct position)

use super::word::{WORD_LEN, Word};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Feedback for a single position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Mark {
    Absent,
    Misplaced,
    Correct,
}

impl Mark {
    /// Emoji square used in share strings
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Misplaced => '🟨',
            Self::Absent => '⬜',
        }
    }

    /// Single-letter code (`G`, `Y`, `-`)
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Misplaced => 'Y',
            Self::Absent => '-',
        }
    }
}

/// Feedback for a whole guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Verdict([Mark; WORD_LEN]);

/// Error returned when parsing a verdict string
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VerdictParseError {
    #[error("verdict must have {len} marks, got {0}", len = WORD_LEN)]
    InvalidLength(usize),
    #[error("invalid mark '{0}' (use G/Y/- or 🟩🟨⬜)")]
    InvalidMark(char),
}

impl Verdict {
    /// All positions correct
    pub const SOLVED: Self = Self([Mark::Correct; WORD_LEN]);

    /// Build a verdict from raw marks
    #[inline]
    #[must_use]
    pub const fn new(marks: [Mark; WORD_LEN]) -> Self {
        Self(marks)
    }

    /// Compute the verdict for `guess` against `secret`
    ///
    /// Duplicate letters are handled by consuming letters from a pool built
    /// from the secret, so a letter is never credited more often than it
    /// occurs in the secret.
    ///
    /// # Algorithm
    /// 1. First pass: mark every exact position match Correct and tombstone
    ///    that slot of the pool
    /// 2. Second pass: for each remaining position, consume the first
    ///    matching pool slot and mark Misplaced, otherwise leave Absent
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Mark, Verdict, Word};
    ///
    /// let secret = Word::new("speed").unwrap();
    /// let guess = Word::new("erase").unwrap();
    /// let verdict = Verdict::evaluate(&secret, &guess);
    ///
    /// assert_eq!(verdict.to_string(), "Y--YY");
    /// assert_eq!(verdict.count(Mark::Correct), 0);
    /// ```
    #[must_use]
    pub fn evaluate(secret: &Word, guess: &Word) -> Self {
        let mut marks = [Mark::Absent; WORD_LEN];
        let mut pool: [Option<u8>; WORD_LEN] = (*secret.letters()).map(Some);
        let guess = guess.letters();

        // Every exact match must be removed before any misplaced letter is scored
        for (i, slot) in pool.iter_mut().enumerate() {
            if *slot == Some(guess[i]) {
                marks[i] = Mark::Correct;
                *slot = None;
            }
        }

        for (i, mark) in marks.iter_mut().enumerate() {
            if *mark != Mark::Absent {
                continue;
            }
            if let Some(slot) = pool.iter_mut().find(|slot| **slot == Some(guess[i])) {
                *mark = Mark::Misplaced;
                *slot = None;
            }
        }

        Self(marks)
    }

    /// All marks in position order
    #[inline]
    #[must_use]
    pub const fn marks(&self) -> &[Mark; WORD_LEN] {
        &self.0
    }

    /// Mark at a specific position
    ///
    /// # Panics
    /// Panics if `position >= WORD_LEN`
    #[inline]
    #[must_use]
    pub const fn mark_at(&self, position: usize) -> Mark {
        self.0[position]
    }

    /// Check if every position is correct
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.0.iter().all(|&m| m == Mark::Correct)
    }

    /// Count positions carrying the given mark
    #[must_use]
    pub fn count(&self, mark: Mark) -> usize {
        self.0.iter().filter(|&&m| m == mark).count()
    }

    /// Convert verdict to emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|m| m.emoji()).collect()
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mark in &self.0 {
            write!(f, "{}", mark.code())?;
        }
        Ok(())
    }
}

impl FromStr for Verdict {
    type Err = VerdictParseError;

    /// Parse strings like "GY-GY" or "🟩🟨⬜🟩🟨"
    ///
    /// Accepts `G`/`g`/🟩, `Y`/`y`/🟨 and `-`/`_`/⬜.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.trim().chars().collect();
        if chars.len() != WORD_LEN {
            return Err(VerdictParseError::InvalidLength(chars.len()));
        }

        let mut marks = [Mark::Absent; WORD_LEN];
        for (mark, ch) in marks.iter_mut().zip(chars) {
            *mark = match ch {
                'G' | 'g' | '🟩' => Mark::Correct,
                'Y' | 'y' | '🟨' => Mark::Misplaced,
                '-' | '_' | '⬜' => Mark::Absent,
                other => return Err(VerdictParseError::InvalidMark(other)),
            };
        }

        Ok(Self(marks))
    }
}
