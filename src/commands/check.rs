//! Single-guess check command
//!
//! Evaluates one guess against a given secret without starting a game.

use crate::core::{Verdict, Word, WordError};

/// Result of checking a guess
pub struct CheckResult {
    pub secret: Word,
    pub guess: Word,
    pub verdict: Verdict,
}

/// Validate both words and compute the verdict
///
/// # Errors
///
/// Returns an error if either word is not a valid 5-letter word.
pub fn check_guess(secret: &str, guess: &str) -> Result<CheckResult, WordError> {
    let secret = Word::new(secret)?;
    let guess = Word::new(guess)?;
    let verdict = Verdict::evaluate(&secret, &guess);

    Ok(CheckResult {
        secret,
        guess,
        verdict,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_valid_pair() {
        let result = check_guess("speed", "ERASE").unwrap();
        assert_eq!(result.secret.text(), "SPEED");
        assert_eq!(result.verdict.to_string(), "Y--YY");
    }

    #[test]
    fn check_rejects_invalid_words() {
        assert_eq!(
            check_guess("spee", "erase").err(),
            Some(WordError::InvalidLength(4))
        );
        assert_eq!(
            check_guess("speed", "er4se").err(),
            Some(WordError::InvalidAlphabet)
        );
    }
}
