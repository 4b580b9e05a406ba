//! Tests for the persistence bridge: seeding, write-through, blob
//! layout, and recovery from bad data.

use questlog::store::{BlobStore, FileStore, MemoryStore, QUESTS_KEY, USER_KEY};
use questlog::{Priority, Quest, QuestLog};
use tempfile::tempdir;

#[test]
fn test_fresh_store_is_seeded_and_persisted() {
    let log = QuestLog::open(MemoryStore::new());

    // Demo set plus the default progression record.
    assert_eq!(log.quests().len(), 4);
    assert_eq!(log.progression().level, 5);
    assert_eq!(log.progression().current_xp, 350);
    assert_eq!(log.progression().max_xp, 500);
    assert_eq!(log.progression().streak, 3);
}

#[test]
fn test_seed_write_through_round_trips() {
    let dir = tempdir().unwrap();

    {
        let log = QuestLog::open(FileStore::new(dir.path()));
        assert_eq!(log.quests().len(), 4);
    }

    // A second session loads the seeded blobs instead of reseeding.
    let store = FileStore::new(dir.path());
    assert!(store.get(QUESTS_KEY).is_some());
    assert!(store.get(USER_KEY).is_some());

    let log = QuestLog::open(store);
    assert_eq!(log.quests().len(), 4);
    assert_eq!(
        log.quests().iter().filter(|q| q.completed).count(),
        1,
        "completed demo quest survives the round trip"
    );
}

#[test]
fn test_mutations_write_through() {
    let dir = tempdir().unwrap();
    let mut log = QuestLog::open(FileStore::new(dir.path()));

    let quest = log.add("persisted quest", Priority::High, None).unwrap();
    log.toggle(quest.id).unwrap();

    let store = FileStore::new(dir.path());
    let quests: Vec<Quest> = serde_json::from_str(&store.get(QUESTS_KEY).unwrap()).unwrap();
    assert_eq!(quests.len(), 5);
    assert_eq!(quests[0].title, "persisted quest");
    assert!(quests[0].completed);

    let user: serde_json::Value = serde_json::from_str(&store.get(USER_KEY).unwrap()).unwrap();
    assert_eq!(user["currentXP"], 450);
}

#[test]
fn test_confirmed_delete_writes_through() {
    let dir = tempdir().unwrap();
    let mut log = QuestLog::open(FileStore::new(dir.path()));

    let id = log.quests()[0].id;
    log.request_delete(id).unwrap();
    log.confirm_delete().unwrap();

    let store = FileStore::new(dir.path());
    let quests: Vec<Quest> = serde_json::from_str(&store.get(QUESTS_KEY).unwrap()).unwrap();
    assert_eq!(quests.len(), 3);
    assert!(quests.iter().all(|q| q.id != id));
}

#[test]
fn test_malformed_blobs_fall_back_to_seed() {
    let store = MemoryStore::new()
        .with_blob(QUESTS_KEY, "not json at all")
        .with_blob(USER_KEY, "{\"level\": ");

    let log = QuestLog::open(store);
    assert_eq!(log.quests().len(), 4);
    assert_eq!(log.progression().level, 5);
}

#[test]
fn test_quest_blob_field_names() {
    let mut log = QuestLog::open(MemoryStore::new().with_blob(QUESTS_KEY, "[]"));
    log.add(
        "field check",
        Priority::Medium,
        Some(chrono::NaiveDate::from_ymd_opt(2026, 12, 24).unwrap()),
    )
    .unwrap();

    let json = serde_json::to_string(&log.quests()).unwrap();
    assert!(json.contains("\"dueDate\":\"2026-12-24\""));
    assert!(json.contains("\"xpReward\":50"));
    assert!(json.contains("\"createdAt\""));
    assert!(json.contains("\"priority\":\"medium\""));
}

#[test]
fn test_browser_style_blob_loads() {
    // A blob shaped like the original key layout, dateless quest included.
    let tasks = r#"[
        {"id":"7f8b6f64-3c8e-4f05-9b1c-2a6e9d3f4a51","title":"Imported quest",
         "completed":false,"priority":"high","dueDate":"2026-01-15",
         "xpReward":100,"createdAt":"2026-01-01T09:30:00Z"},
        {"id":"0d9e2b11-5a7c-4f7e-8f22-1b3c4d5e6f70","title":"No deadline",
         "completed":true,"priority":"low","xpReward":25,
         "createdAt":"2026-01-02T10:00:00Z"}
    ]"#;
    let store = MemoryStore::new()
        .with_blob(QUESTS_KEY, tasks)
        .with_blob(USER_KEY, r#"{"level":7,"currentXP":10,"maxXP":700,"streak":12}"#);

    let log = QuestLog::open(store);
    assert_eq!(log.quests().len(), 2);
    assert_eq!(log.quests()[0].title, "Imported quest");
    assert_eq!(log.quests()[1].due_date, None);
    assert_eq!(log.progression().level, 7);
    assert_eq!(log.progression().streak, 12);
}

#[test]
fn test_file_store_one_file_per_key() {
    let dir = tempdir().unwrap();
    let mut store = FileStore::new(dir.path());
    store.set(QUESTS_KEY, "[]").unwrap();
    store.set(USER_KEY, "{}").unwrap();

    assert!(dir.path().join("tasks.json").exists());
    assert!(dir.path().join("user.json").exists());
    assert_eq!(store.get(QUESTS_KEY).as_deref(), Some("[]"));
}
