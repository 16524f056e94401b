//! Scripted collaborators for driving the loop in tests

use super::{
    GameError, InputCollector, Presenter, RestartSignal, Statistics, Turn, VocabularyProvider,
};
use crate::core::Word;
use std::collections::VecDeque;

/// Hands out secrets in order, cycling when exhausted
pub struct FixedVocabulary {
    secrets: Vec<Word>,
    next: usize,
    pub draws: usize,
}

impl FixedVocabulary {
    pub fn new(secrets: &[&str]) -> Self {
        Self {
            secrets: secrets.iter().map(|s| Word::new(s).unwrap()).collect(),
            next: 0,
            draws: 0,
        }
    }
}

impl VocabularyProvider for FixedVocabulary {
    fn pick_secret(&mut self) -> Word {
        let word = self.secrets[self.next % self.secrets.len()].clone();
        self.next += 1;
        self.draws += 1;
        word
    }
}

/// Replays raw lines, re-reading on invalid input like a prompt would
pub struct ScriptedInput {
    lines: VecDeque<String>,
    pub rejected: usize,
    pub prompts: Vec<(usize, usize)>,
}

impl ScriptedInput {
    pub fn new(lines: &[&str]) -> Self {
        Self {
            lines: lines.iter().map(|s| (*s).to_string()).collect(),
            rejected: 0,
            prompts: Vec::new(),
        }
    }
}

impl InputCollector for ScriptedInput {
    fn next_guess(
        &mut self,
        attempt: usize,
        attempts_max: usize,
    ) -> Result<Option<Word>, GameError> {
        self.prompts.push((attempt, attempts_max));
        while let Some(line) = self.lines.pop_front() {
            match Word::new(&line) {
                Ok(word) => return Ok(Some(word)),
                Err(_) => self.rejected += 1,
            }
        }
        Ok(None)
    }
}

/// Keeps every turn it is shown
#[derive(Default)]
pub struct RecordingPresenter {
    pub turns: Vec<Turn>,
    pub games_over: Vec<Statistics>,
    pub welcomed: usize,
}

impl Presenter for RecordingPresenter {
    fn welcome(&mut self, _attempts_max: usize) -> Result<(), GameError> {
        self.welcomed += 1;
        Ok(())
    }

    fn present(&mut self, turn: &Turn) -> Result<(), GameError> {
        self.turns.push(turn.clone());
        Ok(())
    }

    fn game_over(&mut self, stats: &Statistics) -> Result<(), GameError> {
        self.games_over.push(stats.clone());
        Ok(())
    }
}

/// Answers restart prompts from a fixed list, then declines
pub struct ScriptedRestart {
    answers: VecDeque<bool>,
    pub asked: usize,
}

impl ScriptedRestart {
    pub fn new(answers: &[bool]) -> Self {
        Self {
            answers: answers.iter().copied().collect(),
            asked: 0,
        }
    }
}

impl RestartSignal for ScriptedRestart {
    fn play_again(&mut self) -> Result<bool, GameError> {
        self.asked += 1;
        Ok(self.answers.pop_front().unwrap_or(false))
    }
}
