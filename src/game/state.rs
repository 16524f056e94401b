//! Per-game state machine
//!
//! A `GameState` is created with a secret and mutated only by submitting guesses.
//! Once the outcome is `Won` or `Lost` every further guess is rejected.

use super::GameError;
use crate::core::{Verdict, Word};
use log::debug;
use std::fmt;

/// Default number of attempts per game
pub const DEFAULT_MAX_ATTEMPTS: usize = 6;

/// Where a game currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Won,
    Lost,
}

impl Outcome {
    /// `Won` and `Lost` accept no further guesses
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::InProgress => "in progress",
            Self::Won => "won",
            Self::Lost => "lost",
        };
        f.write_str(text)
    }
}

/// Everything a presenter needs to know about one accepted guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub guess: Word,
    pub verdict: Verdict,
    pub attempts_used: usize,
    pub attempts_max: usize,
    pub outcome: Outcome,
    /// The secret, present only once the game is over
    pub revealed: Option<Word>,
}

/// State of a single game
#[derive(Debug, Clone)]
pub struct GameState {
    secret: Word,
    attempts_used: usize,
    attempts_max: usize,
    outcome: Outcome,
    history: Vec<(Word, Verdict)>,
}

impl GameState {
    /// Start a new game around `secret`
    ///
    /// `attempts_max` is clamped to at least one attempt.
    #[must_use]
    pub fn new(secret: Word, attempts_max: usize) -> Self {
        let attempts_max = attempts_max.max(1);
        Self {
            secret,
            attempts_used: 0,
            attempts_max,
            outcome: Outcome::InProgress,
            history: Vec::with_capacity(attempts_max),
        }
    }

    /// Submit an already-validated guess
    ///
    /// # Errors
    /// Returns `GameError::GameOver` if the game already ended; the state is unchanged.
    pub fn submit(&mut self, guess: Word) -> Result<Turn, GameError> {
        if self.outcome.is_terminal() {
            return Err(GameError::GameOver);
        }

        let verdict = Verdict::evaluate(&self.secret, &guess);
        self.attempts_used += 1;

        self.outcome = if guess == self.secret {
            Outcome::Won
        } else if self.attempts_used == self.attempts_max {
            Outcome::Lost
        } else {
            Outcome::InProgress
        };

        debug!(
            "attempt {}/{}: {guess} -> {verdict} ({})",
            self.attempts_used, self.attempts_max, self.outcome
        );

        self.history.push((guess.clone(), verdict));

        Ok(Turn {
            guess,
            verdict,
            attempts_used: self.attempts_used,
            attempts_max: self.attempts_max,
            outcome: self.outcome,
            revealed: self.outcome.is_terminal().then(|| self.secret.clone()),
        })
    }

    /// Validate raw input and submit it
    ///
    /// Invalid input is rejected before evaluation and does not use an attempt.
    ///
    /// # Errors
    /// Returns `GameError::InvalidGuess` for malformed input and
    /// `GameError::GameOver` if the game already ended.
    pub fn submit_str(&mut self, raw: &str) -> Result<Turn, GameError> {
        if self.outcome.is_terminal() {
            return Err(GameError::GameOver);
        }
        let guess = Word::new(raw)?;
        self.submit(guess)
    }

    /// The secret word
    ///
    /// Presenters should only show this once [`Outcome::is_terminal`] holds.
    #[inline]
    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    #[inline]
    #[must_use]
    pub const fn attempts_used(&self) -> usize {
        self.attempts_used
    }

    #[inline]
    #[must_use]
    pub const fn attempts_max(&self) -> usize {
        self.attempts_max
    }

    #[inline]
    #[must_use]
    pub const fn attempts_left(&self) -> usize {
        self.attempts_max - self.attempts_used
    }

    #[inline]
    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Accepted guesses with their verdicts, oldest first
    #[must_use]
    pub fn history(&self) -> &[(Word, Verdict)] {
        &self.history
    }
}
