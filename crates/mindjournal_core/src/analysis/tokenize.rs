//! Word tokenizer for frequency aggregation.
//!
//! # Responsibility
//! - Split raw text into lowercase alphabetic word tokens.
//! - Filter out tokens too short to carry word-cloud signal.
//!
//! # Invariants
//! - Tokens are maximal runs of Unicode letters; digits and underscores
//!   never appear in a token.
//! - Tokens shorter than `MIN_TOKEN_CHARS` are discarded.
//! - Tokenization has no side effects and is restartable by calling again.

use once_cell::sync::Lazy;
use regex::Regex;

/// Minimum token length kept by [`words`]. Two-letter function words and
/// shorter fragments carry no word-cloud signal.
pub const MIN_TOKEN_CHARS: usize = 3;

// `\p{Alphabetic}` keeps accented French letters and excludes digits and
// underscore, unlike `\w`.
static WORD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\p{Alphabetic}+").expect("valid word regex"));

/// Returns a lazy iterator over the word tokens of `text`.
///
/// Tokens are lowercased maximal letter runs with length >=
/// [`MIN_TOKEN_CHARS`]. The iterator borrows `text` and can be recreated at
/// any time; no state is retained between calls.
pub fn words(text: &str) -> impl Iterator<Item = String> + '_ {
    raw_words(text).filter(|token| token.chars().count() >= MIN_TOKEN_CHARS)
}

/// Unfiltered variant used by the sentiment and emotion scorers, which must
/// see short function words ("ne", "no") the word-cloud filter drops.
pub(crate) fn raw_words(text: &str) -> impl Iterator<Item = String> + '_ {
    WORD_RE.find_iter(text).map(|m| m.as_str().to_lowercase())
}
