/// SQLite key-value store and dataset persistence
use chrono::Month;
use monthly_habit_tracker::*;
use tempfile::NamedTempFile;

#[test]
fn test_sqlite_store_roundtrip_across_connections() {
    let temp_file = NamedTempFile::new().expect("Failed to create temp file");
    let path = temp_file.path().to_path_buf();

    {
        let mut store = SqliteStore::new(path.clone()).expect("Failed to create store");
        store.set("answer", "42").unwrap();
        store.set("answer", "43").unwrap();
    }

    let store = SqliteStore::new(path).expect("Failed to reopen store");
    assert_eq!(store.get("answer").unwrap().as_deref(), Some("43"));
    assert_eq!(store.get("missing").unwrap(), None);
}

#[test]
fn test_malformed_document_is_recovered_and_overwritten() {
    let temp_file = NamedTempFile::new().expect("Failed to create temp file");
    let path = temp_file.path().to_path_buf();

    {
        let mut store = SqliteStore::new(path.clone()).expect("Failed to create store");
        store.set(DEFAULT_STORAGE_KEY, "not json at all").unwrap();
    }

    let options = SessionOptions { start: (2024, Month::June), resume: true };
    let mut session = Session::open(
        Persistence::new(SqliteStore::new(path.clone()).expect("Failed to reopen store")),
        options,
    );
    assert!(session.load_error().is_some());
    assert_eq!(session.active(), (2024, Month::June));

    session.add_habit("Walk").unwrap();

    let reloaded = Persistence::new(SqliteStore::new(path).expect("Failed to reopen store")).load();
    assert!(reloaded.error.is_none());
    assert_eq!(reloaded.dataset.month(2024, Month::June).unwrap().habits[0].name, "Walk");
}

#[test]
fn test_custom_storage_key_is_isolated() {
    let store = SqliteStore::in_memory().expect("Failed to create store");
    let mut persistence = Persistence::with_key(store, "otherTracker");

    let mut dataset = Dataset::default();
    dataset.insert(MonthRecord::new(2024, Month::July));
    persistence.save(&dataset).unwrap();

    assert!(persistence.store().get(DEFAULT_STORAGE_KEY).unwrap().is_none());
    assert_eq!(persistence.load().dataset, dataset);
}

#[test]
fn test_document_layout() {
    let mut persistence = Persistence::new(MemoryStore::new());
    let mut record = MonthRecord::new(2024, Month::March);
    record.add_habit("Read").unwrap();
    record.toggle_completion(0, 2).unwrap();

    let mut dataset = Dataset::default();
    dataset.insert(record);
    dataset.set_current(2024, Month::March);
    persistence.save(&dataset).unwrap();

    let raw = persistence.store().get(DEFAULT_STORAGE_KEY).unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["currentMonth"], "2024_March");
    assert_eq!(value["2024_March"]["month"], "March");
    assert_eq!(value["2024_March"]["habits"][0]["data"]["2"], true);
    assert_eq!(value["2024_March"]["habits"][0]["longestStreak"], 1);
}
