use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use super::stopwords::StopWords;

/// Maximum accepted message length, counted in characters on the raw input.
pub const MAX_MESSAGE_CHARS: usize = 10_000;

// Underscore is a word character to the regex engine but must be stripped too.
static NON_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\W_]+").expect("valid non-word regex"));

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Input cannot be empty")]
    Empty,
    #[error("Input text is too long")]
    TooLong,
}

/// Normalizes a raw message into the token string the classifier was trained on:
/// lower-cased, punctuation collapsed to single spaces, stop words removed.
/// The input is never mutated; the result is a fresh string.
pub fn normalize(text: &str, stopwords: &StopWords) -> Result<String, ValidationError> {
    if text.trim().is_empty() {
        return Err(ValidationError::Empty);
    }
    if text.chars().count() > MAX_MESSAGE_CHARS {
        return Err(ValidationError::TooLong);
    }

    let lowered = text.to_lowercase();
    let collapsed = NON_WORD.replace_all(&lowered, " ");

    let tokens: Vec<&str> = collapsed
        .split_whitespace()
        .filter(|token| !stopwords.contains(token))
        .collect();

    Ok(tokens.join(" "))
}
