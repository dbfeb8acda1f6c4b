//! Entry use-case service.
//!
//! # Responsibility
//! - Provide create/update/get/list/delete APIs for journal entries.
//! - Score sentiment at create and text-update time before persisting.
//!
//! # Invariants
//! - Every persisted entry carries a score and a label consistent with it.
//! - Text edits always recompute sentiment; stale scores are never kept.
//! - Service APIs never bypass repository validation contracts.

use crate::analysis::sentiment::score_sentiment;
use crate::model::entry::{Entry, EntryId, OwnerId};
use crate::repo::entry_repo::{EntryListQuery, EntryRepository, RepoError, RepoResult};
use chrono::Utc;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for entry use-cases.
#[derive(Debug)]
pub enum EntryServiceError {
    /// Target entry does not exist.
    EntryNotFound(EntryId),
    /// Persistence-layer failure.
    Repo(RepoError),
    /// Internal consistency mismatch between write and read-back.
    InconsistentState(&'static str),
}

impl Display for EntryServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EntryNotFound(id) => write!(f, "entry not found: {id}"),
            Self::Repo(err) => write!(f, "{err}"),
            Self::InconsistentState(details) => write!(f, "inconsistent entry state: {details}"),
        }
    }
}

impl Error for EntryServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for EntryServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound(id) => Self::EntryNotFound(id),
            other => Self::Repo(other),
        }
    }
}

/// Entry service facade over repository implementations.
pub struct EntryService<R: EntryRepository> {
    repo: R,
}

impl<R: EntryRepository> EntryService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates one entry, scoring its sentiment before persistence.
    ///
    /// # Contract
    /// - `timestamp_ms` is set to the current UTC time.
    /// - Returns the persisted entry read back from storage.
    pub fn create_entry(
        &self,
        owner_id: OwnerId,
        text: impl Into<String>,
    ) -> Result<Entry, EntryServiceError> {
        let text = text.into();
        let sentiment = score_sentiment(text.as_str());

        let mut entry = Entry::new(owner_id, text, Utc::now().timestamp_millis());
        entry.set_sentiment(sentiment.score);

        let id = self.repo.create_entry(&entry)?;
        self.repo
            .get_entry(id)?
            .ok_or(EntryServiceError::InconsistentState(
                "created entry not found in read-back",
            ))
    }

    /// Replaces entry text and recomputes its sentiment.
    ///
    /// # Contract
    /// - Uses full content replacement semantics.
    /// - Returns the persisted entry read back from storage.
    pub fn update_entry_text(
        &self,
        id: EntryId,
        text: impl Into<String>,
    ) -> Result<Entry, EntryServiceError> {
        let text = text.into();
        let sentiment = score_sentiment(text.as_str());

        self.repo
            .update_entry_text(id, text.as_str(), sentiment.score, sentiment.label)?;
        self.repo
            .get_entry(id)?
            .ok_or(EntryServiceError::InconsistentState(
                "updated entry not found in read-back",
            ))
    }

    /// Gets one entry by stable ID.
    pub fn get_entry(&self, id: EntryId) -> RepoResult<Option<Entry>> {
        self.repo.get_entry(id)
    }

    /// Lists one owner's entries using order + pagination options.
    pub fn list_entries(&self, query: &EntryListQuery) -> RepoResult<Vec<Entry>> {
        self.repo.list_entries(query)
    }

    /// Hard-deletes one entry by ID.
    pub fn delete_entry(&self, id: EntryId) -> Result<(), EntryServiceError> {
        self.repo.delete_entry(id)?;
        Ok(())
    }
}
