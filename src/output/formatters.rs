//! Formatting utilities for terminal output

use crate::core::{Mark, Verdict, Word};
use colored::{ColoredString, Colorize};

/// Color a single letter by its mark
#[must_use]
pub fn color_letter(letter: char, mark: Mark) -> ColoredString {
    let text = letter.to_string();
    match mark {
        Mark::Correct => text.bright_green().bold(),
        Mark::Misplaced => text.bright_yellow().bold(),
        Mark::Absent => text.bright_black(),
    }
}

/// Render a guess with each letter colored by its verdict
#[must_use]
pub fn colored_guess(guess: &Word, verdict: &Verdict) -> String {
    guess
        .text()
        .chars()
        .zip(verdict.marks())
        .map(|(letter, &mark)| color_letter(letter, mark).to_string())
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        // Cast is safe: clamped to [0, width] below
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colored_guess_keeps_letters_in_order() {
        colored::control::set_override(false);
        let guess = Word::new("erase").unwrap();
        let verdict = Verdict::evaluate(&Word::new("speed").unwrap(), &guess);
        assert_eq!(colored_guess(&guess, &verdict), "ERASE");
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0.0, 100.0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(100.0, 100.0, 10), "██████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50.0, 100.0, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }
}
