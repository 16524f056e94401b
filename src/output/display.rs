//! Display functions for game output

use super::formatters::{color_letter, colored_guess, create_progress_bar};
use crate::commands::CheckResult;
use crate::core::{Mark, WORD_LEN};
use crate::game::Statistics;
use colored::Colorize;
use std::io::{self, Write};

/// Write the rules and color legend
///
/// # Errors
/// Returns any error from the underlying writer.
pub fn write_legend<W: Write + ?Sized>(out: &mut W, attempts_max: usize) -> io::Result<()> {
    writeln!(
        out,
        "You have {attempts_max} attempts to guess the {WORD_LEN}-letter word."
    )?;
    writeln!(out)?;
    writeln!(out, "After each guess, letters will be colored as follows:")?;
    writeln!(out)?;
    writeln!(
        out,
        "{}: Correct letter in the correct position",
        color_letter('G', Mark::Correct)
    )?;
    writeln!(
        out,
        "{}: Correct letter in the wrong position",
        color_letter('Y', Mark::Misplaced)
    )?;
    writeln!(out, "{}: Incorrect letter", color_letter('X', Mark::Absent))?;
    writeln!(out)
}

/// Write session statistics with a guess distribution
///
/// # Errors
/// Returns any error from the underlying writer.
pub fn write_statistics<W: Write + ?Sized>(out: &mut W, stats: &Statistics) -> io::Result<()> {
    writeln!(out, "\n{}", "Statistics".bright_cyan().bold())?;
    writeln!(
        out,
        "   Played: {}  Win %: {:.0}  Streak: {}  Best: {}",
        stats.games_played,
        stats.win_rate(),
        stats.current_streak,
        stats.best_streak
    )?;

    let most = stats.guess_distribution.iter().copied().max().unwrap_or(0);
    for (attempts, &count) in stats.guess_distribution.iter().enumerate().skip(1) {
        let bar = create_progress_bar(count as f64, most as f64, 20);
        writeln!(out, "   {attempts}: {} {count}", bar.green())?;
    }
    writeln!(out)
}

/// Print the result of checking a single guess
pub fn print_check_result(result: &CheckResult) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Secret: {}   Guess: {}",
        result.secret.text().bright_white().bold(),
        result.guess.text().bright_white().bold()
    );
    println!("{}", "─".repeat(40).cyan());
    println!(
        "\n  {}   {}   {}",
        colored_guess(&result.guess, &result.verdict),
        result.verdict.to_emoji(),
        result.verdict
    );

    if result.verdict.is_solved() {
        println!("\n{}", "✅ Exact match!".green().bold());
    } else {
        println!(
            "\n  {} correct, {} misplaced, {} absent",
            result.verdict.count(Mark::Correct),
            result.verdict.count(Mark::Misplaced),
            result.verdict.count(Mark::Absent)
        );
    }
}
