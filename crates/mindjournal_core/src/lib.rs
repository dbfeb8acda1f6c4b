//! Core domain logic for MindJournal.
//! This crate is the single source of truth for entry storage and the
//! text-analysis pipeline; transport and session handling live elsewhere.

pub mod analysis;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use analysis::emotions::{emotion_profile, Emotion, EmotionScore, EMOTIONS};
pub use analysis::frequency::{word_frequencies, WordFrequency, WORD_CLOUD_LIMIT};
pub use analysis::sentiment::{
    hybrid_score, score_sentiment, score_sentiment_with, SentimentResult, TieBreak,
};
pub use analysis::timeseries::{sentiment_time_series, SentimentObservation, SentimentTimePoint};
pub use analysis::tokenize::{words, MIN_TOKEN_CHARS};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::entry::{
    Entry, EntryId, EntryValidationError, OwnerId, SentimentLabel, NEGATIVE_THRESHOLD,
    POSITIVE_THRESHOLD,
};
pub use repo::entry_repo::{
    EntryListQuery, EntryRepository, ListOrder, RepoError, RepoResult, SqliteEntryRepository,
};
pub use service::entry_service::{EntryService, EntryServiceError};
pub use service::insight_service::InsightService;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
