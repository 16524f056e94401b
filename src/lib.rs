//! Wordle Game
//!
//! A terminal word-guessing game: guess the secret 5-letter word in six attempts.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::Word;
//! use wordle_game::game::{GameState, Outcome};
//!
//! let mut game = GameState::new(Word::new("speed").unwrap(), 6);
//!
//! let turn = game.submit(Word::new("erase").unwrap()).unwrap();
//! assert_eq!(turn.verdict.to_emoji(), "🟨⬜⬜🟨🟨");
//!
//! let turn = game.submit(Word::new("speed").unwrap()).unwrap();
//! assert_eq!(turn.outcome, Outcome::Won);
//! ```

// Core domain types
pub mod core;

// Game state machine, turn loop and sessions
pub mod game;

// Session configuration
pub mod config;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
