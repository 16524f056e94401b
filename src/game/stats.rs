//! In-memory statistics for one session

use super::{GameState, Outcome};

/// Results across the games of a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub games_played: usize,
    pub games_won: usize,
    pub current_streak: usize,
    pub best_streak: usize,
    /// `guess_distribution[n]` counts games won in `n` attempts (index 0 unused)
    pub guess_distribution: Vec<usize>,
}

impl Statistics {
    #[must_use]
    pub fn new(attempts_max: usize) -> Self {
        Self {
            games_played: 0,
            games_won: 0,
            current_streak: 0,
            best_streak: 0,
            guess_distribution: vec![0; attempts_max + 1],
        }
    }

    /// Record a finished game; unfinished games are ignored
    pub fn record(&mut self, state: &GameState) {
        match state.outcome() {
            Outcome::InProgress => {}
            Outcome::Won => {
                self.games_played += 1;
                self.games_won += 1;
                self.current_streak += 1;
                self.best_streak = self.best_streak.max(self.current_streak);

                let attempts = state.attempts_used();
                if attempts >= self.guess_distribution.len() {
                    self.guess_distribution.resize(attempts + 1, 0);
                }
                self.guess_distribution[attempts] += 1;
            }
            Outcome::Lost => {
                self.games_played += 1;
                self.current_streak = 0;
            }
        }
    }

    /// Percentage of games won (0 when nothing was played)
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            self.games_won as f64 / self.games_played as f64 * 100.0
        }
    }
}

impl Default for Statistics {
    fn default() -> Self {
        Self::new(super::DEFAULT_MAX_ATTEMPTS)
    }
}
