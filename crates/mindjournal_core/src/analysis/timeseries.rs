//! Per-day sentiment time series.
//!
//! # Responsibility
//! - Bucket scored entries by calendar day and average their sentiment.
//!
//! # Invariants
//! - Output is sorted strictly ascending by date string, one point per day.
//! - Observations without a timestamp are skipped silently.
//! - Missing scores count as 0.0 in the day mean.
//! - Empty input yields an empty series, not an error.

use crate::model::entry::Entry;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Minimal scored-observation input for the temporal aggregator.
///
/// Decoupled from [`Entry`] so the aggregator stays callable without
/// storage; both fields are optional to mirror what older rows may carry.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SentimentObservation {
    /// Unix epoch milliseconds, interpreted as UTC.
    pub timestamp_ms: Option<i64>,
    /// Hybrid polarity in [-1, 1], if the row was ever scored.
    pub sentiment_score: Option<f64>,
}

impl From<&Entry> for SentimentObservation {
    fn from(entry: &Entry) -> Self {
        Self {
            timestamp_ms: Some(entry.timestamp_ms),
            sentiment_score: entry.sentiment_score,
        }
    }
}

/// Average sentiment for one calendar day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentTimePoint {
    /// Calendar day in `YYYY-MM-DD` form (UTC).
    pub date: String,
    /// Arithmetic mean of the day's scores, missing scores as 0.0.
    pub avg_score: f64,
    /// Number of observations contributing to the mean. Always >= 1.
    pub count: u32,
}

/// Groups observations by UTC calendar day and averages their scores.
///
/// The stored epoch-millisecond representation is used as-is; there is no
/// local-time conversion. Timestamps chrono cannot represent are skipped
/// like missing ones.
pub fn sentiment_time_series(entries: &[SentimentObservation]) -> Vec<SentimentTimePoint> {
    let mut days: BTreeMap<String, (f64, u32)> = BTreeMap::new();

    for observation in entries {
        let Some(timestamp_ms) = observation.timestamp_ms else {
            continue;
        };
        let Some(moment) = DateTime::<Utc>::from_timestamp_millis(timestamp_ms) else {
            continue;
        };

        let day = moment.date_naive().to_string();
        let bucket = days.entry(day).or_insert((0.0, 0));
        bucket.0 += observation.sentiment_score.unwrap_or(0.0);
        bucket.1 += 1;
    }

    days.into_iter()
        .map(|(date, (sum, count))| SentimentTimePoint {
            date,
            avg_score: sum / f64::from(count),
            count,
        })
        .collect()
}
