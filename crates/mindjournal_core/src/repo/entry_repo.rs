//! Entry repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over the `entries` table.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Write paths validate sentiment consistency before SQL mutations.
//! - Read paths reject invalid persisted state instead of masking it.
//! - Listing order is deterministic: `timestamp_ms`, then `uuid`.

use crate::db::DbError;
use crate::model::entry::{Entry, EntryId, EntryValidationError, OwnerId, SentimentLabel};
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

const ENTRY_SELECT_SQL: &str = "SELECT
    uuid,
    owner_id,
    content,
    timestamp_ms,
    sentiment_score,
    sentiment_label
FROM entries";

const ENTRIES_DEFAULT_LIMIT: u32 = 20;
const ENTRIES_LIMIT_MAX: u32 = 100;

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for entry persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(EntryValidationError),
    Db(DbError),
    NotFound(EntryId),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "entry not found: {id}"),
            Self::InvalidData(message) => write!(f, "invalid persisted entry data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::NotFound(_) => None,
            Self::InvalidData(_) => None,
        }
    }
}

impl From<EntryValidationError> for RepoError {
    fn from(value: EntryValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Listing direction for owner-scoped queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListOrder {
    /// History view order.
    #[default]
    NewestFirst,
    /// Corpus order for aggregation (stable first-seen tie-breaks).
    OldestFirst,
}

/// Query options for listing one owner's entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryListQuery {
    pub owner_id: OwnerId,
    pub order: ListOrder,
    /// Maximum rows to return. Defaults to 20 and clamps to 100.
    pub limit: Option<u32>,
    pub offset: u32,
}

impl EntryListQuery {
    /// Creates a newest-first query with default pagination.
    pub fn for_owner(owner_id: OwnerId) -> Self {
        Self {
            owner_id,
            order: ListOrder::default(),
            limit: None,
            offset: 0,
        }
    }
}

/// Clamps a caller-provided limit into the supported window.
pub fn normalize_entry_limit(limit: Option<u32>) -> u32 {
    match limit {
        None | Some(0) => ENTRIES_DEFAULT_LIMIT,
        Some(value) => value.min(ENTRIES_LIMIT_MAX),
    }
}

/// Repository interface for entry CRUD operations.
pub trait EntryRepository {
    /// Creates one entry and returns its stable id.
    fn create_entry(&self, entry: &Entry) -> RepoResult<EntryId>;
    /// Replaces entry text together with its recomputed sentiment.
    fn update_entry_text(
        &self,
        id: EntryId,
        text: &str,
        score: f64,
        label: SentimentLabel,
    ) -> RepoResult<()>;
    /// Gets one entry by id.
    fn get_entry(&self, id: EntryId) -> RepoResult<Option<Entry>>;
    /// Lists one owner's entries using order + pagination options.
    fn list_entries(&self, query: &EntryListQuery) -> RepoResult<Vec<Entry>>;
    /// Returns one owner's full corpus oldest-first, for aggregation.
    fn list_owner_corpus(&self, owner_id: OwnerId) -> RepoResult<Vec<Entry>>;
    /// Hard-deletes one entry by id.
    fn delete_entry(&self, id: EntryId) -> RepoResult<()>;
}

/// SQLite-backed entry repository.
#[derive(Debug)]
pub struct SqliteEntryRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteEntryRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_entries_table(conn)?;
        Ok(Self { conn })
    }
}

impl EntryRepository for SqliteEntryRepository<'_> {
    fn create_entry(&self, entry: &Entry) -> RepoResult<EntryId> {
        entry.validate()?;

        self.conn.execute(
            "INSERT INTO entries (
                uuid,
                owner_id,
                content,
                timestamp_ms,
                sentiment_score,
                sentiment_label
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6);",
            params![
                entry.id.to_string(),
                entry.owner_id.to_string(),
                entry.text.as_str(),
                entry.timestamp_ms,
                entry.sentiment_score,
                entry.sentiment_label.map(label_to_db),
            ],
        )?;

        Ok(entry.id)
    }

    fn update_entry_text(
        &self,
        id: EntryId,
        text: &str,
        score: f64,
        label: SentimentLabel,
    ) -> RepoResult<()> {
        validate_sentiment_pair(score, label)?;

        let changed = self.conn.execute(
            "UPDATE entries
             SET
                content = ?2,
                sentiment_score = ?3,
                sentiment_label = ?4,
                updated_at = (strftime('%s', 'now') * 1000)
             WHERE uuid = ?1;",
            params![id.to_string(), text, score, label_to_db(label)],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        Ok(())
    }

    fn get_entry(&self, id: EntryId) -> RepoResult<Option<Entry>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{ENTRY_SELECT_SQL} WHERE uuid = ?1;"))?;

        let mut rows = stmt.query(params![id.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_entry_row(row)?));
        }

        Ok(None)
    }

    fn list_entries(&self, query: &EntryListQuery) -> RepoResult<Vec<Entry>> {
        let direction = match query.order {
            ListOrder::NewestFirst => "DESC",
            ListOrder::OldestFirst => "ASC",
        };
        let mut sql = format!(
            "{ENTRY_SELECT_SQL}
             WHERE owner_id = ?
             ORDER BY timestamp_ms {direction}, uuid ASC"
        );
        let mut bind_values: Vec<Value> = vec![Value::Text(query.owner_id.to_string())];

        sql.push_str(" LIMIT ?");
        bind_values.push(Value::Integer(i64::from(normalize_entry_limit(
            query.limit,
        ))));
        if query.offset > 0 {
            sql.push_str(" OFFSET ?");
            bind_values.push(Value::Integer(i64::from(query.offset)));
        }

        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query(params_from_iter(bind_values))?;
        let mut entries = Vec::new();

        while let Some(row) = rows.next()? {
            entries.push(parse_entry_row(row)?);
        }

        Ok(entries)
    }

    fn list_owner_corpus(&self, owner_id: OwnerId) -> RepoResult<Vec<Entry>> {
        let mut stmt = self.conn.prepare(&format!(
            "{ENTRY_SELECT_SQL}
             WHERE owner_id = ?1
             ORDER BY timestamp_ms ASC, uuid ASC;"
        ))?;

        let mut rows = stmt.query(params![owner_id.to_string()])?;
        let mut entries = Vec::new();

        while let Some(row) = rows.next()? {
            entries.push(parse_entry_row(row)?);
        }

        Ok(entries)
    }

    fn delete_entry(&self, id: EntryId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM entries WHERE uuid = ?1;", [id.to_string()])?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        Ok(())
    }
}

fn ensure_entries_table(conn: &Connection) -> RepoResult<()> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'entries'
        );",
        [],
        |row| row.get(0),
    )?;

    if exists == 0 {
        return Err(RepoError::InvalidData(
            "entries table is missing; open the connection via db::open_db".to_string(),
        ));
    }

    Ok(())
}

fn validate_sentiment_pair(score: f64, label: SentimentLabel) -> RepoResult<()> {
    if !(-1.0..=1.0).contains(&score) {
        return Err(EntryValidationError::ScoreOutOfRange(score).into());
    }
    if SentimentLabel::from_score(score) != label {
        return Err(EntryValidationError::LabelMismatch { score, label }.into());
    }
    Ok(())
}

fn parse_entry_row(row: &Row<'_>) -> RepoResult<Entry> {
    let uuid_text: String = row.get("uuid")?;
    let id = Uuid::parse_str(&uuid_text).map_err(|_| {
        RepoError::InvalidData(format!("invalid uuid value `{uuid_text}` in entries.uuid"))
    })?;

    let owner_text: String = row.get("owner_id")?;
    let owner_id = Uuid::parse_str(&owner_text).map_err(|_| {
        RepoError::InvalidData(format!(
            "invalid uuid value `{owner_text}` in entries.owner_id"
        ))
    })?;

    let sentiment_label = match row.get::<_, Option<String>>("sentiment_label")? {
        Some(value) => Some(parse_label(&value).ok_or_else(|| {
            RepoError::InvalidData(format!(
                "invalid sentiment label `{value}` in entries.sentiment_label"
            ))
        })?),
        None => None,
    };

    let entry = Entry {
        id,
        owner_id,
        text: row.get("content")?,
        timestamp_ms: row.get("timestamp_ms")?,
        sentiment_score: row.get("sentiment_score")?,
        sentiment_label,
    };
    entry.validate()?;
    Ok(entry)
}

fn label_to_db(label: SentimentLabel) -> &'static str {
    match label {
        SentimentLabel::Positive => "positive",
        SentimentLabel::Negative => "negative",
        SentimentLabel::Neutral => "neutral",
    }
}

fn parse_label(value: &str) -> Option<SentimentLabel> {
    match value {
        "positive" => Some(SentimentLabel::Positive),
        "negative" => Some(SentimentLabel::Negative),
        "neutral" => Some(SentimentLabel::Neutral),
        _ => None,
    }
}
