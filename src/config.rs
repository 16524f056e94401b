//! Game configuration shared by every front-end

use crate::game::DEFAULT_MAX_ATTEMPTS;

/// Settings for a session of games
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Attempts allowed per game
    pub attempts_max: usize,
    /// Seed for secret selection; `None` draws from OS entropy
    pub seed: Option<u64>,
    /// Show the paced welcome legend in line mode
    pub intro: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            attempts_max: DEFAULT_MAX_ATTEMPTS,
            seed: None,
            intro: true,
        }
    }
}
