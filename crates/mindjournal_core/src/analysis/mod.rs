//! Pure text-analysis pipeline.
//!
//! # Responsibility
//! - Derive sentiment, word-frequency, time-series and emotion views from
//!   plain text and plain entry values.
//! - Stay free of I/O, logging and ambient state so every function is
//!   callable from unit tests without storage.
//!
//! # Invariants
//! - Every function is total: degenerate inputs produce empty or neutral
//!   outputs, never errors.
//! - Outputs are deterministic for a given input ordering.

pub mod emotions;
pub mod frequency;
pub mod lexicon;
pub mod sentiment;
pub mod timeseries;
pub mod tokenize;
