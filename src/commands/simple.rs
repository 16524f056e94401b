//! Simple line-mode game
//!
//! Text-based game without the TUI: prompts for guesses on stdin and prints
//! colored feedback after each attempt.

use crate::config::GameConfig;
use crate::core::{WORD_LEN, Word};
use crate::game::{
    GameError, InputCollector, Outcome, Presenter, RestartSignal, Session, Statistics, Turn,
    VocabularyProvider,
};
use crate::output::formatters::colored_guess;
use crate::output::{write_legend, write_statistics};
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use log::debug;
use std::io::{self, BufRead, IsTerminal, Write};
use std::thread;
use std::time::Duration;

const RESTART_PROMPT: &str = "Press F to play again or any other key to exit!";

/// Reads guesses line by line, re-prompting on invalid input
pub struct LineConsole<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> LineConsole<R, W> {
    pub const fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Read one line; `None` at end of input
    fn read_line(&mut self) -> Result<Option<String>, GameError> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

impl<R: BufRead, W: Write> InputCollector for LineConsole<R, W> {
    fn next_guess(
        &mut self,
        attempt: usize,
        attempts_max: usize,
    ) -> Result<Option<Word>, GameError> {
        loop {
            write!(self.writer, "Attempt {attempt}/{attempts_max}: ")?;
            self.writer.flush()?;

            let Some(line) = self.read_line()? else {
                writeln!(self.writer)?;
                return Ok(None);
            };

            match Word::new(&line) {
                Ok(word) => return Ok(Some(word)),
                Err(e) => {
                    debug!("rejected guess {:?}: {e}", line.trim());
                    writeln!(self.writer, "Please enter a valid {WORD_LEN}-letter word.")?;
                }
            }
        }
    }
}

/// Used when stdin is not a terminal: one game, no restart prompt
pub struct NoRestart;

impl RestartSignal for NoRestart {
    fn play_again(&mut self) -> Result<bool, GameError> {
        Ok(false)
    }
}

/// Restart on a single `F` keypress, read in raw mode
pub struct KeypressRestart;

impl RestartSignal for KeypressRestart {
    fn play_again(&mut self) -> Result<bool, GameError> {
        println!("{RESTART_PROMPT}");

        enable_raw_mode()?;
        let key = loop {
            match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => break Ok(key.code),
                Ok(_) => {}
                Err(e) => break Err(e),
            }
        };
        disable_raw_mode()?;

        let again = matches!(key?, KeyCode::Char('f' | 'F'));
        if !again {
            println!("Thanks for playing!");
        }
        Ok(again)
    }
}

/// Prints colored feedback for each turn
pub struct TerminalPresenter<W> {
    writer: W,
    pacing: bool,
}

impl<W: Write> TerminalPresenter<W> {
    /// `pacing` inserts short pauses while the welcome text is shown
    pub const fn new(writer: W, pacing: bool) -> Self {
        Self { writer, pacing }
    }

    fn pause(&self, seconds: u64) {
        if self.pacing {
            thread::sleep(Duration::from_secs(seconds));
        }
    }
}

impl<W: Write> Presenter for TerminalPresenter<W> {
    fn welcome(&mut self, attempts_max: usize) -> Result<(), GameError> {
        writeln!(self.writer, "Welcome to Wordle!")?;
        self.writer.flush()?;
        self.pause(2);
        write_legend(&mut self.writer, attempts_max)?;
        self.writer.flush()?;
        self.pause(3);
        Ok(())
    }

    fn present(&mut self, turn: &Turn) -> Result<(), GameError> {
        writeln!(self.writer, "{}", colored_guess(&turn.guess, &turn.verdict))?;

        match (turn.outcome, &turn.revealed) {
            (Outcome::Won, Some(secret)) => writeln!(
                self.writer,
                "Congratulations! You've guessed the word '{secret}' correctly!"
            )?,
            (Outcome::Lost, Some(secret)) => writeln!(
                self.writer,
                "Sorry, you've used all attempts. The correct word was '{secret}'."
            )?,
            _ => {}
        }

        self.writer.flush()?;
        Ok(())
    }

    fn game_over(&mut self, stats: &Statistics) -> Result<(), GameError> {
        write_statistics(&mut self.writer, stats)?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Run the line-mode game until the player declines a restart
///
/// Uses single-key restart prompts when stdin is a terminal; piped input
/// plays exactly one game.
///
/// # Errors
///
/// Returns an error if there's an I/O error reading input or writing output.
pub fn run_simple<V: VocabularyProvider + ?Sized>(
    vocabulary: &mut V,
    config: &GameConfig,
) -> Result<Statistics, GameError> {
    let mut console = LineConsole::new(io::stdin().lock(), io::stdout());
    let mut presenter = TerminalPresenter::new(io::stdout(), config.intro);

    let mut restart: Box<dyn RestartSignal> = if io::stdin().is_terminal() {
        Box::new(KeypressRestart)
    } else {
        Box::new(NoRestart)
    };

    Session {
        vocabulary,
        input: &mut console,
        presenter: &mut presenter,
        restart: restart.as_mut(),
    }
    .run(config)
}
