//! Scoring for Mastermind-style code-breaking games: how many symbols of a
//! guess match a secret code by value and position, and how many more match
//! by value alone.

use std::{collections::HashMap, fmt, hash::Hash};

use thiserror::Error;

/// A code as parsed from a command-line argument: one symbol per character.
pub type Code = Vec<char>;

/// How one guess fared against the secret.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Score {
    /// Positions where guess and secret hold the same symbol.
    pub exact: usize,
    /// Symbols shared by value only, capped by leftover multiplicity per side.
    pub partial: usize,
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.exact, self.partial)
    }
}

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ScoreError {
    /// The two codes cannot be compared position by position.
    #[error("guess has {guess} symbols but the secret has {secret}")]
    LengthMismatch { secret: usize, guess: usize },
}

/// Scores `guess` against `secret`.
///
/// Two passes: exact matches first, then a multiset intersection over the
/// mismatched remainders, so a symbol already credited as exact is never
/// counted again as partial and duplicate credit is capped by the leftover
/// count on each side.
///
/// ```
/// use mastermind::{code_from_str, score, Score};
///
/// let result = score(&code_from_str("1234"), &code_from_str("1532"))?;
/// assert_eq!(result, Score { exact: 2, partial: 1 });
/// # Ok::<(), mastermind::ScoreError>(())
/// ```
///
/// # Errors
///
/// [`ScoreError::LengthMismatch`] if the codes differ in length.
pub fn score<T: Eq + Hash>(secret: &[T], guess: &[T]) -> Result<Score, ScoreError> {
    if secret.len() != guess.len() {
        return Err(ScoreError::LengthMismatch {
            secret: secret.len(),
            guess: guess.len(),
        });
    }

    let mut exact = 0;
    let mut secret_rest: HashMap<&T, usize> = HashMap::new();
    let mut guess_rest: HashMap<&T, usize> = HashMap::new();

    for (s, g) in secret.iter().zip(guess) {
        if s == g {
            exact += 1;
        } else {
            *secret_rest.entry(s).or_default() += 1;
            *guess_rest.entry(g).or_default() += 1;
        }
    }

    let partial = guess_rest
        .into_iter()
        .map(|(sym, n)| n.min(secret_rest.get(sym).copied().unwrap_or(0)))
        .sum();

    Ok(Score { exact, partial })
}

/// Scores every guess against `secret`, in input order: `output[i]` is the
/// score of `guesses[i]`. Each guess is scored independently; the first
/// length mismatch aborts the batch.
pub fn score_all<T, C>(secret: &[T], guesses: &[C]) -> Result<Vec<Score>, ScoreError>
where
    T: Eq + Hash,
    C: AsRef<[T]>,
{
    guesses.iter().map(|g| score(secret, g.as_ref())).collect()
}

/// Splits a raw code string into symbols. No alphabet is assumed.
pub fn code_from_str(s: &str) -> Code {
    s.chars().collect()
}
