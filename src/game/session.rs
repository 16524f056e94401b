//! Back-to-back games with a restart prompt

use super::{
    GameError, GameLoop, InputCollector, Presenter, RestartSignal, Statistics, VocabularyProvider,
};
use crate::config::GameConfig;
use log::info;

/// A run of games sharing collaborators and statistics
///
/// No game state survives between games; only the statistics do.
pub struct Session<'a, V: ?Sized, I: ?Sized, P: ?Sized, R: ?Sized> {
    pub vocabulary: &'a mut V,
    pub input: &'a mut I,
    pub presenter: &'a mut P,
    pub restart: &'a mut R,
}

impl<V, I, P, R> Session<'_, V, I, P, R>
where
    V: VocabularyProvider + ?Sized,
    I: InputCollector + ?Sized,
    P: Presenter + ?Sized,
    R: RestartSignal + ?Sized,
{
    /// Play until the restart signal declines or the player stops mid-game
    ///
    /// # Errors
    /// Propagates collaborator failures.
    pub fn run(&mut self, config: &GameConfig) -> Result<Statistics, GameError> {
        let mut stats = Statistics::new(config.attempts_max);
        self.presenter.welcome(config.attempts_max)?;

        loop {
            let game = GameLoop::start(&mut *self.vocabulary, config.attempts_max);
            let state = game.run(&mut *self.input, &mut *self.presenter)?;

            if !state.outcome().is_terminal() {
                break;
            }

            stats.record(&state);
            self.presenter.game_over(&stats)?;

            if !self.restart.play_again()? {
                break;
            }
        }

        info!(
            "session finished: {} played, {} won",
            stats.games_played, stats.games_won
        );
        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::game::Outcome;
    use crate::game::scripted::{
        FixedVocabulary, RecordingPresenter, ScriptedInput, ScriptedRestart,
    };

    fn config() -> GameConfig {
        GameConfig::default()
    }

    #[test]
    fn single_game_without_restart() {
        let mut vocabulary = FixedVocabulary::new(&["crane"]);
        let mut input = ScriptedInput::new(&["crane"]);
        let mut presenter = RecordingPresenter::default();
        let mut restart = ScriptedRestart::new(&[false]);

        let stats = Session {
            vocabulary: &mut vocabulary,
            input: &mut input,
            presenter: &mut presenter,
            restart: &mut restart,
        }
        .run(&config())
        .unwrap();

        assert_eq!(stats.games_played, 1);
        assert_eq!(stats.games_won, 1);
        assert_eq!(restart.asked, 1);
        assert_eq!(presenter.welcomed, 1);
        assert_eq!(presenter.games_over.len(), 1);
    }

    #[test]
    fn restart_draws_fresh_secret_and_resets_attempts() {
        let mut vocabulary = FixedVocabulary::new(&["crane", "slate"]);
        // Game 1: lose against CRANE. Game 2: win against SLATE on the first try.
        let mut lines = vec!["pious"; 6];
        lines.push("slate");
        let mut input = ScriptedInput::new(&lines);
        let mut presenter = RecordingPresenter::default();
        let mut restart = ScriptedRestart::new(&[true, false]);

        let stats = Session {
            vocabulary: &mut vocabulary,
            input: &mut input,
            presenter: &mut presenter,
            restart: &mut restart,
        }
        .run(&config())
        .unwrap();

        assert_eq!(vocabulary.draws, 2);
        assert_eq!(stats.games_played, 2);
        assert_eq!(stats.games_won, 1);

        let lost = &presenter.turns[5];
        assert_eq!(lost.outcome, Outcome::Lost);
        assert_eq!(lost.revealed, Some(Word::new("crane").unwrap()));

        let won = &presenter.turns[6];
        assert_eq!(won.outcome, Outcome::Won);
        assert_eq!(won.attempts_used, 1);
        assert_eq!(input.prompts.last(), Some(&(1, 6)));
    }

    #[test]
    fn stopping_mid_game_ends_session_without_restart_prompt() {
        let mut vocabulary = FixedVocabulary::new(&["crane"]);
        let mut input = ScriptedInput::new(&["slate"]);
        let mut presenter = RecordingPresenter::default();
        let mut restart = ScriptedRestart::new(&[true]);

        let stats = Session {
            vocabulary: &mut vocabulary,
            input: &mut input,
            presenter: &mut presenter,
            restart: &mut restart,
        }
        .run(&config())
        .unwrap();

        assert_eq!(stats.games_played, 0);
        assert_eq!(restart.asked, 0);
        assert!(presenter.games_over.is_empty());
    }
}
