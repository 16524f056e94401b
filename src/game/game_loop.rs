//! Turn loop for a single game

use super::{GameError, GameState, InputCollector, Presenter, VocabularyProvider};
use log::info;

/// Drives one game from a fresh secret to `Won`, `Lost`, or the player stopping
pub struct GameLoop {
    state: GameState,
}

impl GameLoop {
    /// Start a game, drawing the secret exactly once
    pub fn start<V: VocabularyProvider + ?Sized>(vocabulary: &mut V, attempts_max: usize) -> Self {
        let state = GameState::new(vocabulary.pick_secret(), attempts_max);
        info!("new game started ({} attempts)", state.attempts_max());
        Self { state }
    }

    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    /// Run turns until the game ends or input stops
    ///
    /// Each guess is fully evaluated and presented before the next is requested.
    /// The returned state is terminal unless the player stopped early.
    ///
    /// # Errors
    /// Propagates collaborator failures (input or output I/O).
    pub fn run<I, P>(mut self, input: &mut I, presenter: &mut P) -> Result<GameState, GameError>
    where
        I: InputCollector + ?Sized,
        P: Presenter + ?Sized,
    {
        while !self.state.outcome().is_terminal() {
            let attempt = self.state.attempts_used() + 1;
            let Some(guess) = input.next_guess(attempt, self.state.attempts_max())? else {
                info!("player stopped after {} attempts", self.state.attempts_used());
                return Ok(self.state);
            };

            let turn = self.state.submit(guess)?;
            presenter.present(&turn)?;
        }

        info!(
            "game {} after {} attempts",
            self.state.outcome(),
            self.state.attempts_used()
        );
        Ok(self.state)
    }
}
