//! Word-frequency aggregation for the word-cloud view.
//!
//! # Responsibility
//! - Count token occurrences across a corpus of entry texts.
//! - Return the top-ranked tokens in a capped, deterministically ordered
//!   report.
//!
//! # Invariants
//! - The report is sorted by count descending; ties keep first-encountered
//!   order (stable).
//! - Report length never exceeds `WORD_CLOUD_LIMIT`.
//! - Empty corpus (or all-empty texts) yields an empty report, not an error.

use crate::analysis::tokenize::words;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Maximum number of words in a report.
pub const WORD_CLOUD_LIMIT: usize = 40;

/// One ranked word with its occurrence count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordFrequency {
    /// Lowercased word token.
    pub text: String,
    /// Number of occurrences across the corpus.
    pub value: u32,
}

/// Counts token occurrences across `texts` and returns the top
/// [`WORD_CLOUD_LIMIT`] words.
///
/// All texts are joined with a separating space and tokenized once, so
/// counting is insensitive to how the corpus is split into entries. The
/// result is deterministic for a given input ordering.
pub fn word_frequencies<S: AsRef<str>>(texts: &[S]) -> Vec<WordFrequency> {
    let corpus = texts
        .iter()
        .map(|text| text.as_ref())
        .collect::<Vec<_>>()
        .join(" ");

    let mut first_seen: HashMap<String, usize> = HashMap::new();
    let mut report: Vec<WordFrequency> = Vec::new();

    for token in words(&corpus) {
        match first_seen.get(token.as_str()) {
            Some(&index) => report[index].value += 1,
            None => {
                first_seen.insert(token.clone(), report.len());
                report.push(WordFrequency {
                    text: token,
                    value: 1,
                });
            }
        }
    }

    // Stable sort keeps first-seen order for equal counts.
    report.sort_by(|a, b| b.value.cmp(&a.value));
    report.truncate(WORD_CLOUD_LIMIT);
    report
}
