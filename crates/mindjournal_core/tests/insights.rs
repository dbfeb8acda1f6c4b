use mindjournal_core::db::open_db_in_memory;
use mindjournal_core::{
    Emotion, EntryService, InsightService, SqliteEntryRepository, EMOTIONS,
};
use rusqlite::{params, Connection};
use uuid::Uuid;

const DAY_MS: i64 = 24 * 60 * 60 * 1000;

#[test]
fn word_cloud_counts_across_the_owner_corpus() {
    let conn = open_db_in_memory().unwrap();
    let owner = Uuid::new_v4();
    {
        let repo = SqliteEntryRepository::try_new(&conn).unwrap();
        let service = EntryService::new(repo);
        service.create_entry(owner, "the cat sat on the mat").unwrap();
        service.create_entry(owner, "the dog sat too").unwrap();
    }

    let insights = InsightService::new(SqliteEntryRepository::try_new(&conn).unwrap());
    let report = insights.word_cloud(owner).unwrap();
    assert_eq!(report[0].text, "the");
    assert_eq!(report[0].value, 3);
    let sat = report.iter().find(|w| w.text == "sat").unwrap();
    assert_eq!(sat.value, 2);
}

#[test]
fn word_cloud_for_unknown_owner_is_empty() {
    let conn = open_db_in_memory().unwrap();
    let insights = InsightService::new(SqliteEntryRepository::try_new(&conn).unwrap());
    assert!(insights.word_cloud(Uuid::new_v4()).unwrap().is_empty());
}

#[test]
fn sentiment_over_time_buckets_by_day_ascending() {
    let conn = open_db_in_memory().unwrap();
    let owner = Uuid::new_v4();

    // "wonderful" scores 1.0, "terrible" -1.0, a flat sentence 0.0.
    let ids: Vec<_> = {
        let repo = SqliteEntryRepository::try_new(&conn).unwrap();
        let service = EntryService::new(repo);
        [
            "an absolutely wonderful morning",
            "a terrible afternoon",
            "wrote three pages before lunch",
        ]
        .iter()
        .map(|text| service.create_entry(owner, *text).unwrap().id)
        .collect()
    };

    // First two entries share day one; the third lands on day three.
    set_timestamp(&conn, ids[0], DAY_MS + 100);
    set_timestamp(&conn, ids[1], DAY_MS + 200);
    set_timestamp(&conn, ids[2], 3 * DAY_MS + 300);

    let insights = InsightService::new(SqliteEntryRepository::try_new(&conn).unwrap());
    let series = insights.sentiment_over_time(owner).unwrap();

    assert_eq!(series.len(), 2);
    assert_eq!(series[0].date, "1970-01-02");
    assert_eq!(series[0].count, 2);
    assert!(series[0].avg_score.abs() < 1e-9); // mean of +1.0 and -1.0
    assert_eq!(series[1].date, "1970-01-04");
    assert_eq!(series[1].count, 1);
    assert!(series[1].avg_score.abs() < 1e-9);
    assert!(series[0].date < series[1].date);
}

#[test]
fn sentiment_over_time_is_owner_scoped() {
    let conn = open_db_in_memory().unwrap();
    let owner = Uuid::new_v4();
    let stranger = Uuid::new_v4();
    {
        let repo = SqliteEntryRepository::try_new(&conn).unwrap();
        let service = EntryService::new(repo);
        service.create_entry(stranger, "not my journal").unwrap();
    }

    let insights = InsightService::new(SqliteEntryRepository::try_new(&conn).unwrap());
    assert!(insights.sentiment_over_time(owner).unwrap().is_empty());
}

#[test]
fn emotion_breakdown_sums_mentions_across_entries() {
    let conn = open_db_in_memory().unwrap();
    let owner = Uuid::new_v4();
    {
        let repo = SqliteEntryRepository::try_new(&conn).unwrap();
        let service = EntryService::new(repo);
        service.create_entry(owner, "happy to be here, happy indeed").unwrap();
        service.create_entry(owner, "but worried about tomorrow").unwrap();
    }

    let insights = InsightService::new(SqliteEntryRepository::try_new(&conn).unwrap());
    let profile = insights.emotion_breakdown(owner).unwrap();

    let order: Vec<Emotion> = profile.iter().map(|score| score.emotion).collect();
    assert_eq!(order, EMOTIONS.to_vec());
    let joy = profile.iter().find(|s| s.emotion == Emotion::Joy).unwrap();
    assert_eq!(joy.mentions, 2);
    let fear = profile.iter().find(|s| s.emotion == Emotion::Fear).unwrap();
    assert_eq!(fear.mentions, 1);
}

fn set_timestamp(conn: &Connection, id: Uuid, timestamp_ms: i64) {
    conn.execute(
        "UPDATE entries SET timestamp_ms = ?2 WHERE uuid = ?1;",
        params![id.to_string(), timestamp_ms],
    )
    .unwrap();
}
