//! Analytics use-case service.
//!
//! # Responsibility
//! - Derive the word-cloud, sentiment-over-time and emotion views from one
//!   owner's stored corpus.
//!
//! # Invariants
//! - Derived views are recomputed from stored entries on every call;
//!   nothing derived is persisted.
//! - The corpus is read oldest-first so frequency tie-breaks are stable
//!   across calls.

use crate::analysis::emotions::{emotion_profile, EmotionScore};
use crate::analysis::frequency::{word_frequencies, WordFrequency};
use crate::analysis::timeseries::{sentiment_time_series, SentimentObservation, SentimentTimePoint};
use crate::model::entry::OwnerId;
use crate::repo::entry_repo::{EntryRepository, RepoResult};

/// Analytics facade over repository implementations.
pub struct InsightService<R: EntryRepository> {
    repo: R,
}

impl<R: EntryRepository> InsightService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Word-frequency report over the owner's full corpus.
    pub fn word_cloud(&self, owner_id: OwnerId) -> RepoResult<Vec<WordFrequency>> {
        let entries = self.repo.list_owner_corpus(owner_id)?;
        let texts: Vec<&str> = entries.iter().map(|entry| entry.text.as_str()).collect();
        Ok(word_frequencies(&texts))
    }

    /// Per-day average sentiment over the owner's full corpus.
    pub fn sentiment_over_time(&self, owner_id: OwnerId) -> RepoResult<Vec<SentimentTimePoint>> {
        let entries = self.repo.list_owner_corpus(owner_id)?;
        let observations: Vec<SentimentObservation> =
            entries.iter().map(SentimentObservation::from).collect();
        Ok(sentiment_time_series(&observations))
    }

    /// Emotion keyword mentions summed over the owner's full corpus.
    ///
    /// Counts are additive across entries, so profiling the joined corpus
    /// equals summing per-entry profiles.
    pub fn emotion_breakdown(&self, owner_id: OwnerId) -> RepoResult<Vec<EmotionScore>> {
        let entries = self.repo.list_owner_corpus(owner_id)?;
        let corpus = entries
            .iter()
            .map(|entry| entry.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        Ok(emotion_profile(&corpus))
    }
}
