//! Game flow: per-game state machine, turn loop and restartable sessions
//!
//! Everything here is synchronous and single-threaded. Input, output and
//! secret selection go through the traits in [`ports`].

mod game_loop;
pub mod ports;
mod session;
mod state;
mod stats;

#[cfg(test)]
pub(crate) mod scripted;

pub use game_loop::GameLoop;
pub use ports::{InputCollector, Presenter, RestartSignal, VocabularyProvider};
pub use session::Session;
pub use state::{DEFAULT_MAX_ATTEMPTS, GameState, Outcome, Turn};
pub use stats::Statistics;

use crate::core::WordError;
use thiserror::Error;

/// Errors surfaced by the game and its collaborators
#[derive(Debug, Error)]
pub enum GameError {
    #[error(transparent)]
    InvalidGuess(#[from] WordError),
    #[error("the game is already over")]
    GameOver,
    #[error("the vocabulary contains no playable words")]
    EmptyVocabulary,
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
