//! Domain model for journal entries.
//!
//! # Responsibility
//! - Define the canonical entry record shared by storage and analysis layers.
//! - Enforce the sentiment score/label consistency invariant.
//!
//! # Invariants
//! - Every entry is identified by a stable `EntryId`.
//! - Sentiment fields are either both absent or both present and consistent.

pub mod entry;
