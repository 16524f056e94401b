//! Best known mark per letter, for the on-screen keyboard

use crate::core::{Mark, Verdict, Word};
use rustc_hash::FxHashMap;

/// Keyboard rows in display order
pub const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Strongest mark seen for each guessed letter
#[derive(Debug, Default, Clone)]
pub struct LetterBoard {
    marks: FxHashMap<u8, Mark>,
}

impl LetterBoard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a verdict in; a letter never moves down from Correct to Misplaced
    pub fn record(&mut self, guess: &Word, verdict: &Verdict) {
        for (&letter, &mark) in guess.letters().iter().zip(verdict.marks()) {
            self.marks
                .entry(letter)
                .and_modify(|best| *best = (*best).max(mark))
                .or_insert(mark);
        }
    }

    /// Mark for `letter` (uppercase), `None` if never guessed
    #[must_use]
    pub fn mark(&self, letter: u8) -> Option<Mark> {
        self.marks.get(&letter).copied()
    }

    pub fn clear(&mut self) {
        self.marks.clear();
    }
}
