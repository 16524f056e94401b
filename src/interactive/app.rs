//! TUI application state and logic

use super::keyboard::LetterBoard;
use crate::config::GameConfig;
use crate::core::WORD_LEN;
use crate::game::{GameError, GameState, Outcome, Statistics, Turn, VocabularyProvider};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::info;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<V> {
    vocabulary: V,
    pub config: GameConfig,
    pub state: GameState,
    pub letters: LetterBoard,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub input_mode: InputMode,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<V: VocabularyProvider> App<V> {
    pub fn new(mut vocabulary: V, config: GameConfig) -> Self {
        let state = GameState::new(vocabulary.pick_secret(), config.attempts_max);
        let stats = Statistics::new(config.attempts_max);

        let mut app = Self {
            vocabulary,
            config,
            state,
            letters: LetterBoard::new(),
            input_buffer: String::new(),
            messages: Vec::new(),
            stats,
            input_mode: InputMode::Guessing,
            should_quit: false,
        };
        app.add_message("Welcome to Wordle!", MessageStyle::Info);
        app.add_message(
            &format!(
                "You have {} attempts to guess the {WORD_LEN}-letter word.",
                app.state.attempts_max()
            ),
            MessageStyle::Info,
        );
        app
    }

    /// Discard the current game and draw a fresh secret
    pub fn new_game(&mut self) {
        self.state = GameState::new(self.vocabulary.pick_secret(), self.config.attempts_max);
        self.letters.clear();
        self.input_buffer.clear();
        self.messages.clear();
        self.input_mode = InputMode::Guessing;
        info!("new game started ({} attempts)", self.state.attempts_max());
        self.add_message("New game started!", MessageStyle::Info);
    }

    pub fn type_letter(&mut self, c: char) {
        if self.input_buffer.len() < WORD_LEN && c.is_ascii_alphabetic() {
            self.input_buffer.push(c.to_ascii_uppercase());
        }
    }

    pub fn backspace(&mut self) {
        self.input_buffer.pop();
    }

    /// Submit the typed word; invalid words are kept for editing and cost nothing
    pub fn submit_guess(&mut self) {
        let raw = std::mem::take(&mut self.input_buffer);

        match self.state.submit_str(&raw) {
            Ok(turn) => self.show_turn(&turn),
            Err(GameError::InvalidGuess(e)) => {
                self.input_buffer = raw;
                self.add_message(&e.to_string(), MessageStyle::Error);
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    fn show_turn(&mut self, turn: &Turn) {
        self.letters.record(&turn.guess, &turn.verdict);

        match (turn.outcome, &turn.revealed) {
            (Outcome::Won, Some(secret)) => {
                self.add_message(
                    &format!("Congratulations! You've guessed the word '{secret}' correctly!"),
                    MessageStyle::Success,
                );
            }
            (Outcome::Lost, Some(secret)) => {
                self.add_message(
                    &format!("Sorry, you've used all attempts. The correct word was '{secret}'."),
                    MessageStyle::Error,
                );
            }
            _ => {
                let text = format!("{} {}", turn.guess, turn.verdict.to_emoji());
                self.add_message(&text, MessageStyle::Info);
                return;
            }
        }

        self.stats.record(&self.state);
        self.input_mode = InputMode::GameOver;
        self.add_message(
            "Press F to play again or any other key to exit!",
            MessageStyle::Info,
        );
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Esc
            || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
        {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::Guessing => match key.code {
                KeyCode::Char(c) => self.type_letter(c),
                KeyCode::Backspace => self.backspace(),
                KeyCode::Enter => self.submit_guess(),
                _ => {}
            },
            InputMode::GameOver => match key.code {
                KeyCode::Char('f' | 'F') => self.new_game(),
                _ => self.should_quit = true,
            },
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<V: VocabularyProvider>(app: App<V>) -> Result<Statistics> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B, V>(terminal: &mut Terminal<B>, mut app: App<V>) -> Result<Statistics>
where
    B: ratatui::backend::Backend,
    V: VocabularyProvider,
{
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(app.stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::scripted::FixedVocabulary;

    fn app(secrets: &[&str]) -> App<FixedVocabulary> {
        App::new(FixedVocabulary::new(secrets), GameConfig::default())
    }

    fn press(app: &mut App<FixedVocabulary>, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_word(app: &mut App<FixedVocabulary>, word: &str) {
        for c in word.chars() {
            press(app, KeyCode::Char(c));
        }
        press(app, KeyCode::Enter);
    }

    #[test]
    fn typing_is_limited_to_letters_and_word_length() {
        let mut app = app(&["crane"]);
        for c in "sl4tes!".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        assert_eq!(app.input_buffer, "SLTES");

        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.input_buffer, "SLTE");
    }

    #[test]
    fn short_word_is_rejected_without_using_attempt() {
        let mut app = app(&["crane"]);
        type_word(&mut app, "cran");

        assert_eq!(app.state.attempts_used(), 0);
        assert_eq!(app.input_buffer, "CRAN");
        assert_eq!(app.messages.last().map(|m| m.style), Some(MessageStyle::Error));
    }

    #[test]
    fn winning_switches_to_game_over() {
        let mut app = app(&["crane"]);
        type_word(&mut app, "slate");
        assert_eq!(app.input_mode, InputMode::Guessing);
        assert!(app.input_buffer.is_empty());

        type_word(&mut app, "crane");
        assert_eq!(app.state.outcome(), Outcome::Won);
        assert_eq!(app.input_mode, InputMode::GameOver);
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.letters.mark(b'C'), Some(crate::core::Mark::Correct));
    }

    #[test]
    fn f_restarts_with_fresh_secret() {
        let mut app = app(&["crane", "slate"]);
        for _ in 0..6 {
            type_word(&mut app, "pious");
        }
        assert_eq!(app.state.outcome(), Outcome::Lost);
        assert_eq!(app.stats.games_played, 1);

        press(&mut app, KeyCode::Char('f'));
        assert_eq!(app.input_mode, InputMode::Guessing);
        assert_eq!(app.state.attempts_used(), 0);
        assert_eq!(app.state.secret().text(), "SLATE");
        assert_eq!(app.letters.mark(b'P'), None);
        assert!(!app.should_quit);
    }

    #[test]
    fn other_key_after_game_quits() {
        let mut app = app(&["crane"]);
        type_word(&mut app, "crane");
        press(&mut app, KeyCode::Char('x'));
        assert!(app.should_quit);
    }

    #[test]
    fn escape_quits_mid_game() {
        let mut app = app(&["crane"]);
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
        assert_eq!(app.state.outcome(), Outcome::InProgress);
    }

    #[test]
    fn messages_are_capped() {
        let mut app = app(&["crane"]);
        for _ in 0..10 {
            app.add_message("hello", MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
    }
}
