//! Core domain types for the game
//!
//! Pure types with no I/O: words and the feedback computed for a guess.

mod verdict;
mod word;

pub use verdict::{Mark, Verdict, VerdictParseError};
pub use word::{WORD_LEN, Word, WordError};
