//! Interactive TUI interface
//!
//! Full-screen game built on ratatui and crossterm.

mod app;
mod keyboard;
mod rendering;

pub use app::{App, InputMode, Message, MessageStyle, run_tui};
pub use keyboard::{KEYBOARD_ROWS, LetterBoard};
