//! Collaborator traits the game loop talks to
//!
//! The core never reads the terminal or loads words itself; front-ends
//! implement these traits instead.

use super::{GameError, Statistics, Turn};
use crate::core::Word;

/// Supplies secrets
pub trait VocabularyProvider {
    /// Draw the secret for a new game; called exactly once per game
    fn pick_secret(&mut self) -> Word;
}

/// Supplies validated guesses
pub trait InputCollector {
    /// Collect the next guess for `attempt` (1-based) of `attempts_max`
    ///
    /// Implementations validate length and alphabet themselves and keep
    /// asking until a valid word arrives. `Ok(None)` means the player stopped.
    ///
    /// # Errors
    /// Returns an error if input can no longer be read.
    fn next_guess(&mut self, attempt: usize, attempts_max: usize)
    -> Result<Option<Word>, GameError>;
}

/// Renders game progress; never mutates game state
pub trait Presenter {
    /// Called once before the first game of a session
    ///
    /// # Errors
    /// Returns an error if output fails.
    fn welcome(&mut self, _attempts_max: usize) -> Result<(), GameError> {
        Ok(())
    }

    /// Called after every accepted guess
    ///
    /// # Errors
    /// Returns an error if output fails.
    fn present(&mut self, turn: &Turn) -> Result<(), GameError>;

    /// Called after a game reaches `Won` or `Lost`
    ///
    /// # Errors
    /// Returns an error if output fails.
    fn game_over(&mut self, _stats: &Statistics) -> Result<(), GameError> {
        Ok(())
    }
}

/// Decides whether another game starts
pub trait RestartSignal {
    /// `true` starts a brand-new game, anything else ends the session
    ///
    /// # Errors
    /// Returns an error if the signal cannot be read.
    fn play_again(&mut self) -> Result<bool, GameError>;
}
