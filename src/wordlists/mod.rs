//! Word lists for secret selection
//!
//! Provides the embedded list compiled into the binary, file loading, and
//! the random [`Vocabulary`] the game draws secrets from.

mod embedded;
pub mod loader;
mod vocabulary;

pub use embedded::{SECRETS, SECRETS_COUNT};
pub use vocabulary::Vocabulary;
