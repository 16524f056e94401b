//! Random secret selection over a fixed word list

use super::{SECRETS, loader::words_from_slice};
use crate::core::Word;
use crate::game::{GameError, VocabularyProvider};
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A non-empty word list with its own random source
pub struct Vocabulary {
    words: Vec<Word>,
    rng: StdRng,
}

impl Vocabulary {
    /// Build a vocabulary from `words`
    ///
    /// A `seed` makes the sequence of secrets reproducible.
    ///
    /// # Errors
    /// Returns `GameError::EmptyVocabulary` if `words` is empty.
    pub fn new(words: Vec<Word>, seed: Option<u64>) -> Result<Self, GameError> {
        if words.is_empty() {
            return Err(GameError::EmptyVocabulary);
        }

        let rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        debug!("vocabulary ready: {} words (seeded: {})", words.len(), seed.is_some());
        Ok(Self { words, rng })
    }

    /// The list compiled into the binary
    ///
    /// # Errors
    /// Returns `GameError::EmptyVocabulary` if the embedded list is empty.
    pub fn embedded(seed: Option<u64>) -> Result<Self, GameError> {
        Self::new(words_from_slice(SECRETS), seed)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always `false`; construction rejects empty lists
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[cfg(test)]
    fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }
}

impl VocabularyProvider for Vocabulary {
    fn pick_secret(&mut self) -> Word {
        let index = self.rng.random_range(0..self.words.len());
        self.words[index].clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        words_from_slice(list)
    }

    #[test]
    fn empty_vocabulary_is_rejected() {
        assert!(matches!(
            Vocabulary::new(Vec::new(), None),
            Err(GameError::EmptyVocabulary)
        ));
    }

    #[test]
    fn secrets_come_from_the_list() {
        let mut vocabulary = Vocabulary::new(words(&["crane", "slate", "pious"]), None).unwrap();
        for _ in 0..50 {
            let secret = vocabulary.pick_secret();
            assert!(vocabulary.contains(&secret));
        }
    }

    #[test]
    fn seeded_vocabularies_agree() {
        let list = ["crane", "slate", "pious", "robot", "floor", "speed"];
        let mut a = Vocabulary::new(words(&list), Some(7)).unwrap();
        let mut b = Vocabulary::new(words(&list), Some(7)).unwrap();

        let first: Vec<Word> = (0..20).map(|_| a.pick_secret()).collect();
        let second: Vec<Word> = (0..20).map(|_| b.pick_secret()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn single_word_vocabulary_always_returns_it() {
        let mut vocabulary = Vocabulary::new(words(&["llama"]), Some(1)).unwrap();
        assert_eq!(vocabulary.pick_secret().text(), "LLAMA");
        assert_eq!(vocabulary.pick_secret().text(), "LLAMA");
    }

    #[test]
    fn embedded_vocabulary_loads() {
        let vocabulary = Vocabulary::embedded(Some(0)).unwrap();
        assert_eq!(vocabulary.len(), SECRETS.len());
        assert!(!vocabulary.is_empty());
    }
}
