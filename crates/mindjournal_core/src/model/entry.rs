//! Journal entry domain model.
//!
//! # Responsibility
//! - Define the canonical entry record and its sentiment enrichment fields.
//! - Enforce score range and score/label consistency before persistence.
//!
//! # Invariants
//! - `id` is stable and never reused for another entry.
//! - `sentiment_score` and `sentiment_label` are both `None` or both `Some`.
//! - A present label always equals `SentimentLabel::from_score(score)`.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a journal entry.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type EntryId = Uuid;

/// Stable identifier for the owner of an entry.
///
/// The core never authenticates owners; it only scopes queries by this value.
pub type OwnerId = Uuid;

/// Score beyond which text is labelled `Positive`.
pub const POSITIVE_THRESHOLD: f64 = 0.1;
/// Score below which text is labelled `Negative`.
pub const NEGATIVE_THRESHOLD: f64 = -0.1;

/// Categorical sentiment derived from a polarity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    /// Maps a polarity score to its label using the fixed thresholds.
    ///
    /// # Invariants
    /// - `score > 0.1` -> `Positive`
    /// - `score < -0.1` -> `Negative`
    /// - otherwise `Neutral`
    pub fn from_score(score: f64) -> Self {
        if score > POSITIVE_THRESHOLD {
            Self::Positive
        } else if score < NEGATIVE_THRESHOLD {
            Self::Negative
        } else {
            Self::Neutral
        }
    }
}

impl Display for SentimentLabel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Positive => write!(f, "positive"),
            Self::Negative => write!(f, "negative"),
            Self::Neutral => write!(f, "neutral"),
        }
    }
}

/// Validation failure for entry state.
#[derive(Debug, Clone, PartialEq)]
pub enum EntryValidationError {
    /// Score is outside the [-1, 1] polarity range.
    ScoreOutOfRange(f64),
    /// Exactly one of score/label is set.
    PartialSentiment,
    /// Label disagrees with the label derived from the score.
    LabelMismatch {
        score: f64,
        label: SentimentLabel,
    },
}

impl Display for EntryValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ScoreOutOfRange(score) => {
                write!(f, "sentiment score {score} is outside [-1, 1]")
            }
            Self::PartialSentiment => {
                write!(f, "sentiment score and label must be set together")
            }
            Self::LabelMismatch { score, label } => write!(
                f,
                "sentiment label `{label}` does not match score {score}"
            ),
        }
    }
}

impl Error for EntryValidationError {}

/// Canonical journal entry record.
///
/// Sentiment fields are optional so that rows written before enrichment (or
/// by older schema versions) remain representable; when present they must be
/// mutually consistent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// Stable global ID used for lookups and deletion.
    pub id: EntryId,
    /// Owner scoping key supplied by the collaborator layer.
    pub owner_id: OwnerId,
    /// Free-form journal text.
    pub text: String,
    /// Creation time in Unix epoch milliseconds (UTC).
    pub timestamp_ms: i64,
    /// Hybrid polarity score in [-1, 1], set at create/update time.
    pub sentiment_score: Option<f64>,
    /// Label derived from `sentiment_score`.
    pub sentiment_label: Option<SentimentLabel>,
}

impl Entry {
    /// Creates a new entry with a generated stable ID and no sentiment yet.
    pub fn new(owner_id: OwnerId, text: impl Into<String>, timestamp_ms: i64) -> Self {
        Self::with_id(Uuid::new_v4(), owner_id, text, timestamp_ms)
    }

    /// Creates an entry with a caller-provided stable ID.
    ///
    /// Used by import paths where identity already exists externally.
    pub fn with_id(
        id: EntryId,
        owner_id: OwnerId,
        text: impl Into<String>,
        timestamp_ms: i64,
    ) -> Self {
        Self {
            id,
            owner_id,
            text: text.into(),
            timestamp_ms,
            sentiment_score: None,
            sentiment_label: None,
        }
    }

    /// Sets both sentiment fields from a score, keeping them consistent.
    pub fn set_sentiment(&mut self, score: f64) {
        self.sentiment_score = Some(score);
        self.sentiment_label = Some(SentimentLabel::from_score(score));
    }

    /// Checks the entry invariants.
    ///
    /// # Errors
    /// - `ScoreOutOfRange` when the score leaves [-1, 1].
    /// - `PartialSentiment` when only one sentiment field is set.
    /// - `LabelMismatch` when the stored label disagrees with the score.
    pub fn validate(&self) -> Result<(), EntryValidationError> {
        match (self.sentiment_score, self.sentiment_label) {
            (None, None) => Ok(()),
            (Some(score), Some(label)) => {
                if !(-1.0..=1.0).contains(&score) {
                    return Err(EntryValidationError::ScoreOutOfRange(score));
                }
                if SentimentLabel::from_score(score) != label {
                    return Err(EntryValidationError::LabelMismatch { score, label });
                }
                Ok(())
            }
            _ => Err(EntryValidationError::PartialSentiment),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Entry, EntryValidationError, SentimentLabel};
    use uuid::Uuid;

    #[test]
    fn label_thresholds_are_exclusive() {
        assert_eq!(SentimentLabel::from_score(0.1), SentimentLabel::Neutral);
        assert_eq!(SentimentLabel::from_score(-0.1), SentimentLabel::Neutral);
        assert_eq!(SentimentLabel::from_score(0.11), SentimentLabel::Positive);
        assert_eq!(SentimentLabel::from_score(-0.11), SentimentLabel::Negative);
        assert_eq!(SentimentLabel::from_score(0.0), SentimentLabel::Neutral);
    }

    #[test]
    fn set_sentiment_keeps_fields_consistent() {
        let mut entry = Entry::new(Uuid::new_v4(), "grateful for today", 0);
        entry.set_sentiment(0.8);
        assert_eq!(entry.sentiment_score, Some(0.8));
        assert_eq!(entry.sentiment_label, Some(SentimentLabel::Positive));
        entry.validate().expect("consistent sentiment must validate");
    }

    #[test]
    fn validate_rejects_partial_sentiment() {
        let mut entry = Entry::new(Uuid::new_v4(), "text", 0);
        entry.sentiment_score = Some(0.5);
        assert_eq!(
            entry.validate().unwrap_err(),
            EntryValidationError::PartialSentiment
        );
    }

    #[test]
    fn validate_rejects_label_mismatch() {
        let mut entry = Entry::new(Uuid::new_v4(), "text", 0);
        entry.sentiment_score = Some(0.9);
        entry.sentiment_label = Some(SentimentLabel::Negative);
        assert!(matches!(
            entry.validate().unwrap_err(),
            EntryValidationError::LabelMismatch { .. }
        ));
    }

    #[test]
    fn validate_rejects_out_of_range_score() {
        let mut entry = Entry::new(Uuid::new_v4(), "text", 0);
        entry.sentiment_score = Some(1.5);
        entry.sentiment_label = Some(SentimentLabel::Positive);
        assert_eq!(
            entry.validate().unwrap_err(),
            EntryValidationError::ScoreOutOfRange(1.5)
        );
    }
}
