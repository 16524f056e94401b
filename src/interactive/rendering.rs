//! TUI rendering with ratatui
//!
//! Board, keyboard and status panels for the game interface.

use super::app::{App, InputMode, MessageStyle};
use super::keyboard::KEYBOARD_ROWS;
use crate::core::{Mark, WORD_LEN};
use crate::game::Outcome;
use std::ops::Range;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui<V>(f: &mut Frame, app: &App<V>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50), // Board
            Constraint::Percentage(50), // Keyboard, attempts, messages
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🟩 WORDLE 🟨")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn mark_style(mark: Mark) -> Style {
    let (fg, bg) = match mark {
        Mark::Correct => (Color::Black, Color::Green),
        Mark::Misplaced => (Color::Black, Color::Yellow),
        Mark::Absent => (Color::White, Color::DarkGray),
    };
    Style::new().fg(fg).bg(bg).add_modifier(Modifier::BOLD)
}

fn tile(letter: char, style: Style) -> Span<'static> {
    Span::styled(format!(" {letter} "), style)
}

/// Rows of a `total`-row board that fit in `height` lines with `focus` kept on screen
fn visible_rows(total: usize, focus: usize, height: usize) -> Range<usize> {
    let height = height.max(1);
    if total <= height {
        return 0..total;
    }
    let end = (focus + 1).clamp(height, total);
    end - height..end
}

fn render_board<V>(f: &mut Frame, app: &App<V>, area: Rect) {
    let history = app.state.history();
    let total = app.state.attempts_max();
    let height = usize::from(area.height.saturating_sub(2));

    // Spacer lines only while every row still fits
    let spaced = total * 2 <= height;
    let focus = history.len().min(total.saturating_sub(1));
    let rows = visible_rows(total, focus, height);
    let mut lines = Vec::with_capacity(rows.len() * 2);

    for row in rows {
        let mut spans = Vec::with_capacity(WORD_LEN * 2);

        if let Some((guess, verdict)) = history.get(row) {
            for (letter, &mark) in guess.text().chars().zip(verdict.marks()) {
                spans.push(tile(letter, mark_style(mark)));
                spans.push(Span::raw(" "));
            }
        } else if row == history.len() && app.input_mode == InputMode::Guessing {
            let typed: Vec<char> = app.input_buffer.chars().collect();
            for i in 0..WORD_LEN {
                let letter = typed.get(i).copied().unwrap_or('_');
                spans.push(tile(
                    letter,
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ));
                spans.push(Span::raw(" "));
            }
        } else {
            for _ in 0..WORD_LEN {
                spans.push(tile('·', Style::default().fg(Color::DarkGray)));
                spans.push(Span::raw(" "));
            }
        }

        lines.push(Line::from(spans));
        if spaced {
            lines.push(Line::from(""));
        }
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_info_panel<V>(f: &mut Frame, app: &App<V>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Keyboard
            Constraint::Length(3), // Attempts gauge
            Constraint::Min(4),    // Messages
        ])
        .split(area);

    render_keyboard(f, app, chunks[0]);
    render_attempts(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_keyboard<V>(f: &mut Frame, app: &App<V>, area: Rect) {
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .bytes()
                .map(|letter| {
                    let style = app
                        .letters
                        .mark(letter)
                        .map_or_else(|| Style::default().fg(Color::White), mark_style);
                    tile(char::from(letter), style)
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Letters ")
            .borders(Borders::ALL),
    );
    f.render_widget(keyboard, area);
}

fn render_attempts<V>(f: &mut Frame, app: &App<V>, area: Rect) {
    let used = app.state.attempts_used();
    let max = app.state.attempts_max();
    // Cast is safe: used <= max, so the ratio is within [0, 100]
    let percent = (used * 100 / max) as u16;

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Attempts ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent)
        .label(format!("{used}/{max} used"));

    f.render_widget(gauge, area);
}

fn render_messages<V>(f: &mut Frame, app: &App<V>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input<V>(f: &mut Frame, app: &App<V>, area: Rect) {
    let (title, content, color) = match (app.input_mode, app.state.outcome()) {
        (InputMode::GameOver, Outcome::Won) => (
            " 🎉 Solved! | F: play again | any other key: exit ",
            app.state.secret().text(),
            Color::Green,
        ),
        (InputMode::GameOver, _) => (
            " Out of attempts | F: play again | any other key: exit ",
            app.state.secret().text(),
            Color::Red,
        ),
        (InputMode::Guessing, _) => (
            " Type your guess | Enter: submit | Esc: quit ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status<V>(f: &mut Frame, app: &App<V>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let games = Paragraph::new(format!("Games: {}", app.stats.games_played))
        .alignment(Alignment::Center);
    f.render_widget(games, chunks[0]);

    let win_rate = Paragraph::new(format!("Win Rate: {:.0}%", app.stats.win_rate()))
        .alignment(Alignment::Center);
    f.render_widget(win_rate, chunks[1]);

    let streak = Paragraph::new(format!(
        "Streak: {} (best {})",
        app.stats.current_streak, app.stats.best_streak
    ))
    .alignment(Alignment::Center);
    f.render_widget(streak, chunks[2]);

    let help = Paragraph::new("Esc: Quit | Enter: Submit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::game::scripted::FixedVocabulary;
    use ratatui::{Terminal, backend::TestBackend};

    fn draw(app: &App<FixedVocabulary>) -> String {
        draw_sized(app, 100, 30)
    }

    fn draw_sized(app: &App<FixedVocabulary>, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();

        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn renders_board_and_status() {
        let mut app = App::new(FixedVocabulary::new(&["crane"]), GameConfig::default());
        app.state.submit_str("slate").unwrap();

        let screen = draw(&app);
        assert!(screen.contains("Board"));
        assert!(screen.contains("1/6 used"));
        assert!(screen.contains("Games: 0"));
    }

    #[test]
    fn game_over_shows_secret() {
        let mut app = App::new(FixedVocabulary::new(&["crane"]), GameConfig::default());
        for c in "crane".chars() {
            app.type_letter(c);
        }
        app.submit_guess();

        let screen = draw(&app);
        assert!(screen.contains("Solved!"));
        assert!(screen.contains("CRANE"));
    }

    #[test]
    fn visible_rows_follow_focus() {
        assert_eq!(visible_rows(6, 0, 20), 0..6);
        assert_eq!(visible_rows(26, 0, 13), 0..13);
        assert_eq!(visible_rows(26, 12, 13), 0..13);
        assert_eq!(visible_rows(26, 18, 13), 6..19);
        assert_eq!(visible_rows(26, 25, 13), 13..26);
        assert_eq!(visible_rows(26, 3, 0), 3..4);
    }

    #[test]
    fn long_board_keeps_current_row_visible() {
        let config = GameConfig {
            attempts_max: 26,
            ..GameConfig::default()
        };
        let mut app = App::new(FixedVocabulary::new(&["crane"]), config);
        for _ in 0..18 {
            app.state.submit_str("pious").unwrap();
        }
        for c in "cra".chars() {
            app.type_letter(c);
        }

        let screen = draw_sized(&app, 100, 24);
        assert!(screen.contains(" C   R   A   _   _ "));
        assert!(screen.contains("18/26 used"));
    }
}
