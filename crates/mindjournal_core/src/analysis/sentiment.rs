//! Bilingual hybrid sentiment scorer.
//!
//! # Responsibility
//! - Score free text under the English and French polarity models.
//! - Select the stronger-magnitude result and map it to a label.
//!
//! # Invariants
//! - `score_sentiment` is a pure function: identical text yields identical
//!   score and label on every call.
//! - The returned label always equals `SentimentLabel::from_score(score)`.
//! - Empty or whitespace-only text yields score 0.0 and `Neutral`.

use crate::analysis::lexicon::{ENGLISH, FRENCH};
use crate::model::entry::SentimentLabel;
use serde::{Deserialize, Serialize};

/// Policy for exact-magnitude ties between the two language models.
///
/// No language detection is performed; the magnitude comparison is a
/// heuristic and genuinely ambiguous text ties at 0.0 under both models, so
/// the tie rule is an explicit part of the contract rather than an accident
/// of branch ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TieBreak {
    /// Keep the English score on an exact-magnitude tie.
    #[default]
    PreferEnglish,
    /// Keep the French score on an exact-magnitude tie.
    PreferFrench,
}

/// Sentiment score plus its derived label. Pure value, recomputed per call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentResult {
    /// Hybrid polarity in [-1, 1].
    pub score: f64,
    /// Label derived from `score` via the fixed thresholds.
    pub label: SentimentLabel,
}

/// Selects between the two language scores by absolute magnitude.
///
/// The model reporting the stronger opinion is assumed to match the text's
/// actual language; exact ties fall to `tie_break`.
pub fn hybrid_score(score_en: f64, score_fr: f64, tie_break: TieBreak) -> f64 {
    if score_fr.abs() > score_en.abs() {
        return score_fr;
    }
    if score_fr.abs() < score_en.abs() {
        return score_en;
    }
    match tie_break {
        TieBreak::PreferEnglish => score_en,
        TieBreak::PreferFrench => score_fr,
    }
}

/// Scores text under both language models and returns the hybrid result.
///
/// Ties use [`TieBreak::PreferEnglish`]; use [`score_sentiment_with`] to
/// override the tie policy.
pub fn score_sentiment(text: &str) -> SentimentResult {
    score_sentiment_with(text, TieBreak::default())
}

/// [`score_sentiment`] with an explicit tie policy.
pub fn score_sentiment_with(text: &str, tie_break: TieBreak) -> SentimentResult {
    let score_en = ENGLISH.polarity(text);
    let score_fr = FRENCH.polarity(text);
    let score = hybrid_score(score_en, score_fr, tie_break);

    SentimentResult {
        score,
        label: SentimentLabel::from_score(score),
    }
}
