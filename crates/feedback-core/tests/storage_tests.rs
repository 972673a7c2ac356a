// Rust guideline compliant 2026-02-06

//! Unit tests for the record stores.
//!
//! These tests validate specific examples, edge cases, and error conditions.

use feedback_core::{Error, FeedbackRecord, MemStore, NewFeedback, RecordStore, Storage};
use std::fs;
use tempfile::TempDir;

/// Helper to create a test record.
fn create_test_record(id: &str, rating: u8, created_at: i64) -> FeedbackRecord {
    FeedbackRecord {
        id: id.to_string(),
        name: "Test User".to_string(),
        rating,
        comment: Some("Nice".to_string()),
        created_at,
    }
}

#[test]
fn test_empty_file_handling() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let storage = Storage::new(temp_dir.path().join("feedback.jsonl"))
        .expect("Failed to create storage");

    let records = storage.load_all().expect("Failed to load records");
    assert_eq!(records.len(), 0, "Missing file should return empty vec");
}

#[test]
fn test_empty_path_rejected() {
    assert!(Storage::new(std::path::PathBuf::new()).is_err());
}

#[test]
fn test_malformed_line_is_skipped() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let storage_path = temp_dir.path().join("feedback.jsonl");

    let content = r#"{"id":"fb-00000001","name":"Ana","rating":5,"created_at":1000}
{"id":"fb-00000002","name":
{"id":"fb-00000003","name":"Bruno","rating":2,"comment":"Slow","created_at":2000}

"#;
    fs::write(&storage_path, content).expect("Failed to write test file");

    let storage = Storage::new(storage_path).expect("Failed to create storage");
    let records = storage.load_all().expect("Failed to load records");
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].id, "fb-00000001");
    assert_eq!(records[0].comment, None);
    assert_eq!(records[1].comment.as_deref(), Some("Slow"));
}

#[test]
fn test_invalid_record_is_skipped() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let storage_path = temp_dir.path().join("feedback.jsonl");

    let content = r#"{"id":"fb-00000001","name":"Ana","rating":9,"created_at":1000}
{"id":"fb-00000002","name":"Bo","rating":3,"created_at":1001}
"#;
    fs::write(&storage_path, content).expect("Failed to write test file");

    let storage = Storage::new(storage_path).expect("Failed to create storage");
    let records = storage.load_all().expect("Failed to load records");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, "fb-00000002");
}

#[test]
fn test_save_all_and_load_preserves_order() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let storage = Storage::new(temp_dir.path().join("feedback.jsonl"))
        .expect("Failed to create storage");

    let records = vec![
        create_test_record("fb-00000003", 1, 30),
        create_test_record("fb-00000001", 5, 10),
        create_test_record("fb-00000002", 3, 20),
    ];
    storage.save_all(&records).expect("Failed to save");

    let loaded = storage.load_all().expect("Failed to load");
    assert_eq!(loaded, records);
}

#[test]
fn test_save_all_rejects_invalid_record() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let storage = Storage::new(temp_dir.path().join("feedback.jsonl"))
        .expect("Failed to create storage");

    let bad = create_test_record("not-an-id", 3, 1);
    assert!(storage.save_all(&[bad]).is_err());
}

#[test]
fn test_append_assigns_id_and_persists() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("feedback.jsonl");
    let mut storage = Storage::new(path.clone()).expect("Failed to create storage");

    let record = storage
        .append(NewFeedback::new("  Carla ", 4, Some(" Good ".to_string())))
        .expect("Failed to append");
    assert!(record.id.starts_with("fb-"));
    assert_eq!(record.name, "Carla");
    assert_eq!(record.comment.as_deref(), Some("Good"));

    let reopened = Storage::new(path).expect("Failed to reopen storage");
    let loaded = reopened.read_all().expect("Failed to load");
    assert_eq!(loaded, vec![record.clone()]);
    assert_eq!(reopened.get(&record.id).expect("get failed"), Some(record));
}

#[test]
fn test_append_keeps_insertion_order_and_unique_ids() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let mut storage = Storage::new(temp_dir.path().join("feedback.jsonl"))
        .expect("Failed to create storage");

    let mut ids = Vec::new();
    for _ in 0..5 {
        let record = storage
            .append(NewFeedback::new("Same Name", 3, None))
            .expect("Failed to append");
        ids.push(record.id);
    }

    let loaded: Vec<String> = storage
        .read_all()
        .expect("Failed to load")
        .into_iter()
        .map(|r| r.id)
        .collect();
    assert_eq!(loaded, ids);

    let mut unique = ids.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(unique.len(), ids.len());
}

#[test]
fn test_append_rejects_invalid_input() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("feedback.jsonl");
    let mut storage = Storage::new(path.clone()).expect("Failed to create storage");

    let result = storage.append(NewFeedback::new("X", 4, None));
    assert!(matches!(result, Err(Error::InvalidFeedback(_))));
    assert!(!path.exists(), "Nothing should be written for invalid input");
}

#[test]
fn test_load_by_id_not_found() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let storage = Storage::new(temp_dir.path().join("feedback.jsonl"))
        .expect("Failed to create storage");
    storage
        .save_all(&[create_test_record("fb-00000001", 2, 1)])
        .expect("Failed to save");

    assert!(matches!(
        storage.load_by_id("fb-0000000f"),
        Err(Error::NotFound(_))
    ));
    assert_eq!(storage.get("fb-0000000f").expect("get failed"), None);
}

#[test]
fn test_lock_is_reacquirable() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let storage = Storage::new(temp_dir.path().join("feedback.jsonl"))
        .expect("Failed to create storage");

    let first = storage.with_lock(|| storage.load_all());
    assert!(first.is_ok(), "Lock operation should succeed");

    let second = storage.with_lock(|| storage.load_all());
    assert!(second.is_ok(), "Lock should be released and reacquirable");
}

#[test]
fn test_mem_store_append_and_get() {
    let mut store = MemStore::new();
    assert!(store.is_empty());

    let first = store
        .append(NewFeedback::new("Dora", 5, None))
        .expect("Failed to append");
    let second = store
        .append(NewFeedback::new("Eli", 1, Some("Broken".to_string())))
        .expect("Failed to append");

    assert_eq!(store.len(), 2);
    assert_eq!(store.read_all().unwrap(), vec![first.clone(), second]);
    assert_eq!(store.get(&first.id).unwrap(), Some(first));
    assert_eq!(store.get("fb-ffffffff").unwrap(), None);
}

#[test]
fn test_mem_store_rejects_invalid_input() {
    let mut store = MemStore::new();
    let long = "x".repeat(501);
    assert!(store.append(NewFeedback::new("Dora", 5, Some(long))).is_err());
    assert!(store.is_empty());
}

#[test]
fn test_mem_store_from_records_keeps_order() {
    let records = vec![
        create_test_record("fb-00000002", 4, 2),
        create_test_record("fb-00000001", 4, 1),
    ];
    let store = MemStore::from_records(records.clone());
    assert_eq!(store.read_all().unwrap(), records);
}
