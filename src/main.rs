//! Wordle Game - CLI
//!
//! Terminal word-guessing game with TUI and line modes.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use log::info;
use wordle_game::{
    commands::{check_guess, run_simple},
    config::GameConfig,
    game::DEFAULT_MAX_ATTEMPTS,
    output::print_check_result,
    wordlists::{Vocabulary, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Guess the secret 5-letter word in six attempts",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Attempts per game
    #[arg(short, long, global = true, default_value_t = DEFAULT_MAX_ATTEMPTS as u64,
          value_parser = clap::value_parser!(u64).range(1..=26))]
    attempts: u64,

    /// Seed for reproducible secrets
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Skip the paced welcome text in simple mode
    #[arg(long, global = true)]
    no_intro: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line mode (type guesses at a prompt)
    Simple,

    /// Show the feedback for one guess against a given secret
    Check {
        /// The secret word
        secret: String,

        /// The guessed word
        guess: String,
    },
}

impl Cli {
    fn game_config(&self) -> GameConfig {
        GameConfig {
            attempts_max: self.attempts as usize,
            seed: self.seed,
            intro: !self.no_intro,
        }
    }
}

/// Load the vocabulary selected by the -w flag
fn load_vocabulary(wordlist: &str, seed: Option<u64>) -> Result<Vocabulary> {
    if wordlist == "embedded" {
        return Vocabulary::embedded(seed).context("Failed to load embedded word list");
    }

    let words =
        load_from_file(wordlist).with_context(|| format!("Failed to read word list {wordlist}"))?;
    if words.is_empty() {
        bail!("Word list {wordlist} contains no valid 5-letter words");
    }
    Ok(Vocabulary::new(words, seed)?)
}

fn setup_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
}

fn main() -> Result<()> {
    setup_logging();

    let cli = Cli::parse();
    let config = cli.game_config();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&cli.wordlist, config),
        Commands::Simple => run_simple_command(&cli.wordlist, &config),
        Commands::Check { secret, guess } => run_check_command(&secret, &guess),
    }
}

fn run_play_command(wordlist: &str, config: GameConfig) -> Result<()> {
    use wordle_game::interactive::{App, run_tui};

    let vocabulary = load_vocabulary(wordlist, config.seed)?;
    let app = App::new(vocabulary, config);
    let stats = run_tui(app)?;

    info!(
        "played {} games, won {}",
        stats.games_played, stats.games_won
    );
    Ok(())
}

fn run_simple_command(wordlist: &str, config: &GameConfig) -> Result<()> {
    let mut vocabulary = load_vocabulary(wordlist, config.seed)?;
    run_simple(&mut vocabulary, config).context("Line-mode game failed")?;
    Ok(())
}

fn run_check_command(secret: &str, guess: &str) -> Result<()> {
    let result = check_guess(secret, guess).context("Invalid word")?;
    print_check_result(&result);
    Ok(())
}
