use mindjournal_core::db::open_db_in_memory;
use mindjournal_core::{
    Entry, EntryListQuery, EntryRepository, EntryService, EntryServiceError, ListOrder, RepoError,
    SentimentLabel, SqliteEntryRepository,
};
use rusqlite::{params, Connection};
use uuid::Uuid;

#[test]
fn create_and_get_roundtrip_scores_sentiment() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteEntryRepository::try_new(&conn).unwrap();
    let service = EntryService::new(repo);
    let owner = Uuid::new_v4();

    let created = service
        .create_entry(owner, "what a wonderful and happy day")
        .unwrap();
    assert_eq!(created.owner_id, owner);
    assert_eq!(created.sentiment_label, Some(SentimentLabel::Positive));
    assert!(created.sentiment_score.unwrap() > 0.1);

    let loaded = service.get_entry(created.id).unwrap().unwrap();
    assert_eq!(loaded, created);
}

#[test]
fn persisted_label_is_consistent_with_score() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteEntryRepository::try_new(&conn).unwrap();
    let service = EntryService::new(repo);
    let owner = Uuid::new_v4();

    for text in [
        "a terrible awful night",
        "the bus arrives at eight",
        "je suis très heureuse",
    ] {
        let entry = service.create_entry(owner, text).unwrap();
        let score = entry.sentiment_score.unwrap();
        assert_eq!(entry.sentiment_label, Some(SentimentLabel::from_score(score)));
    }
}

#[test]
fn update_text_recomputes_sentiment() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteEntryRepository::try_new(&conn).unwrap();
    let service = EntryService::new(repo);
    let owner = Uuid::new_v4();

    let created = service.create_entry(owner, "feeling great today").unwrap();
    assert_eq!(created.sentiment_label, Some(SentimentLabel::Positive));

    let updated = service
        .update_entry_text(created.id, "a terrible, horrible day")
        .unwrap();
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.text, "a terrible, horrible day");
    assert_eq!(updated.sentiment_label, Some(SentimentLabel::Negative));
    assert!(updated.sentiment_score.unwrap() < -0.1);
}

#[test]
fn update_missing_entry_returns_not_found() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteEntryRepository::try_new(&conn).unwrap();
    let service = EntryService::new(repo);

    let missing = Uuid::new_v4();
    let err = service.update_entry_text(missing, "anything").unwrap_err();
    assert!(matches!(err, EntryServiceError::EntryNotFound(id) if id == missing));
}

#[test]
fn delete_removes_row_and_second_delete_fails() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteEntryRepository::try_new(&conn).unwrap();
    let service = EntryService::new(repo);
    let owner = Uuid::new_v4();

    let created = service.create_entry(owner, "short lived").unwrap();
    service.delete_entry(created.id).unwrap();
    assert!(service.get_entry(created.id).unwrap().is_none());

    let err = service.delete_entry(created.id).unwrap_err();
    assert!(matches!(err, EntryServiceError::EntryNotFound(id) if id == created.id));
}

#[test]
fn list_is_owner_scoped_and_newest_first() {
    let conn = open_db_in_memory().unwrap();
    let owner = Uuid::new_v4();
    let stranger = Uuid::new_v4();

    let (old_id, new_id) = {
        let repo = SqliteEntryRepository::try_new(&conn).unwrap();
        let service = EntryService::new(repo);
        let old = service.create_entry(owner, "older entry").unwrap();
        let new = service.create_entry(owner, "newer entry").unwrap();
        service.create_entry(stranger, "someone else").unwrap();
        (old.id, new.id)
    };
    set_timestamp(&conn, old_id, 1_000);
    set_timestamp(&conn, new_id, 2_000);

    let repo = SqliteEntryRepository::try_new(&conn).unwrap();
    let listed = repo.list_entries(&EntryListQuery::for_owner(owner)).unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].id, new_id);
    assert_eq!(listed[1].id, old_id);
}

#[test]
fn list_supports_oldest_first_limit_and_offset() {
    let conn = open_db_in_memory().unwrap();
    let owner = Uuid::new_v4();

    let ids: Vec<_> = {
        let repo = SqliteEntryRepository::try_new(&conn).unwrap();
        let service = EntryService::new(repo);
        (0..4)
            .map(|i| service.create_entry(owner, format!("entry {i}")).unwrap().id)
            .collect()
    };
    for (i, id) in ids.iter().enumerate() {
        set_timestamp(&conn, *id, 1_000 + i as i64);
    }

    let repo = SqliteEntryRepository::try_new(&conn).unwrap();
    let page = repo
        .list_entries(&EntryListQuery {
            owner_id: owner,
            order: ListOrder::OldestFirst,
            limit: Some(2),
            offset: 1,
        })
        .unwrap();
    assert_eq!(page.len(), 2);
    assert_eq!(page[0].id, ids[1]);
    assert_eq!(page[1].id, ids[2]);
}

#[test]
fn repo_rejects_inconsistent_sentiment_on_create() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteEntryRepository::try_new(&conn).unwrap();

    let mut entry = Entry::new(Uuid::new_v4(), "mislabeled", 0);
    entry.sentiment_score = Some(0.9);
    entry.sentiment_label = Some(SentimentLabel::Negative);

    let err = repo.create_entry(&entry).unwrap_err();
    assert!(matches!(err, RepoError::Validation(_)));
}

#[test]
fn repo_rejects_unmigrated_connection() {
    let conn = Connection::open_in_memory().unwrap();
    let err = SqliteEntryRepository::try_new(&conn).unwrap_err();
    assert!(matches!(err, RepoError::InvalidData(_)));
}

fn set_timestamp(conn: &Connection, id: Uuid, timestamp_ms: i64) {
    conn.execute(
        "UPDATE entries SET timestamp_ms = ?2 WHERE uuid = ?1;",
        params![id.to_string(), timestamp_ms],
    )
    .unwrap();
}
