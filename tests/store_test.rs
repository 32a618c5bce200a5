//! Integration tests for the SQLite record store

use alumno_db::student::{NewStudent, StudentStore};
use std::collections::HashSet;
use tempfile::TempDir;

fn entry(name: &str, hours: f64, attendance: f64, score: f64) -> NewStudent {
    NewStudent::new(name, 21, hours, attendance, score).unwrap()
}

#[test]
fn test_insert_then_list_round_trip() {
    let store = StudentStore::open_in_memory().unwrap();
    let id = store.insert(&entry("Ada", 7.5, 92.0, 88.0)).unwrap();

    let records = store.list_all().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id(), id);
    assert_eq!(records[0].name(), "Ada");
    assert_eq!(records[0].age(), 21);
    assert!((records[0].study_hours() - 7.5).abs() < f64::EPSILON);
    assert!((records[0].attendance() - 92.0).abs() < f64::EPSILON);
    assert!((records[0].exam_score() - 88.0).abs() < f64::EPSILON);
}

#[test]
fn test_ids_are_unique_and_increasing() {
    let store = StudentStore::open_in_memory().unwrap();
    let mut seen = HashSet::new();
    let mut previous = 0;
    for i in 0..25 {
        let id = store
            .insert(&entry(&format!("student-{i}"), 2.0, 80.0, 60.0))
            .unwrap();
        assert!(seen.insert(id), "id {id} handed out twice");
        assert!(id > previous, "id {id} not above {previous}");
        previous = id;
    }
    assert_eq!(store.count().unwrap(), 25);
}

#[test]
fn test_list_all_orders_most_recent_first() {
    let store = StudentStore::open_in_memory().unwrap();
    for name in ["first", "second", "third"] {
        store.insert(&entry(name, 3.0, 85.0, 70.0)).unwrap();
    }

    let records = store.list_all().unwrap();
    let names: Vec<&str> = records.iter().map(|r| r.name()).collect();
    assert_eq!(names, ["third", "second", "first"]);
}

#[test]
fn test_records_survive_reopen() {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("students.db");

    {
        let store = StudentStore::open(&db_path).unwrap();
        store.insert(&entry("Ada", 7.5, 92.0, 88.0)).unwrap();
        store.insert(&entry("Grace", 6.0, 85.0, 79.0)).unwrap();
    }

    let reopened = StudentStore::open(&db_path).unwrap();
    let records = reopened.list_all().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].name(), "Grace");
    assert_eq!(records[1].name(), "Ada");
}

#[test]
fn test_ids_stay_fresh_across_reopen() {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("students.db");

    let earlier = {
        let store = StudentStore::open(&db_path).unwrap();
        store.insert(&entry("Ada", 7.5, 92.0, 88.0)).unwrap()
    };

    let reopened = StudentStore::open(&db_path).unwrap();
    let later = reopened.insert(&entry("Grace", 6.0, 85.0, 79.0)).unwrap();
    assert!(later > earlier, "{later} reused or predates {earlier}");
}

#[test]
fn test_empty_store_lists_nothing() {
    let store = StudentStore::open_in_memory().unwrap();
    assert!(store.list_all().unwrap().is_empty());
    assert_eq!(store.count().unwrap(), 0);
}

#[test]
fn test_validation_rejects_before_any_write() {
    let store = StudentStore::open_in_memory().unwrap();

    // Out-of-range input never produces an insertable value.
    assert!(NewStudent::new("Ada", 21, 7.5, 120.0, 88.0).is_err());
    assert!(NewStudent::new("", 21, 7.5, 90.0, 88.0).is_err());

    assert_eq!(store.count().unwrap(), 0);
}
