//! Integration tests for score model training and prediction

use alumno_db::predictor::{ScorePredictor, DEFAULT_MIN_SAMPLES, SCORE_RANGE};
use alumno_db::student::{NewStudent, StudentStore};
use alumno_db::Error;
use std::fs;
use tempfile::TempDir;

/// Five records on a near-linear surface: exam scores track study
/// hours at roughly five points each, with attendance varying enough
/// to keep the two features independent.
fn near_linear_rows() -> [(f64, f64, f64); 5] {
    [
        (1.0, 52.0, 55.0),
        (2.0, 58.0, 60.0),
        (3.0, 70.0, 65.0),
        (4.0, 82.0, 70.0),
        (5.0, 88.0, 75.0),
    ]
}

/// Five records where attendance tracks study hours exactly, so the two
/// features are perfectly correlated. Scores rise five points per study
/// hour.
fn correlated_rows() -> [(f64, f64, f64); 5] {
    [
        (1.0, 50.0, 55.0),
        (2.0, 60.0, 60.0),
        (3.0, 70.0, 65.0),
        (4.0, 80.0, 70.0),
        (5.0, 90.0, 75.0),
    ]
}

fn seeded_store(rows: [(f64, f64, f64); 5]) -> StudentStore {
    let store = StudentStore::open_in_memory().unwrap();
    for (i, (hours, attendance, score)) in rows.into_iter().enumerate() {
        let entry =
            NewStudent::new(format!("student-{i}"), 20, hours, attendance, score).unwrap();
        store.insert(&entry).unwrap();
    }
    store
}

#[test]
fn test_end_to_end_training_and_prediction() {
    let dir = TempDir::new().unwrap();
    let store = seeded_store(correlated_rows());
    let records = store.list_all().unwrap();

    let mut predictor = ScorePredictor::new(dir.path().join("score_model.json"));
    assert!(predictor.train(&records, DEFAULT_MIN_SAMPLES).unwrap());

    // Scores rise five points per study hour, so the middle of the
    // training surface lands on 65 even though the correlated features
    // admit no unique coefficient pair.
    let score = predictor.predict(3.0, 70.0).unwrap();
    assert!((score - 65.0).abs() < 1e-6, "expected 65, got {score}");
}

#[test]
fn test_training_below_gate_returns_false() {
    let dir = TempDir::new().unwrap();
    let store = StudentStore::open_in_memory().unwrap();
    for i in 0..4 {
        let entry = NewStudent::new(
            format!("student-{i}"),
            20,
            1.0 + f64::from(i),
            60.0 + f64::from(i * 7),
            50.0 + f64::from(i * 3),
        )
        .unwrap();
        store.insert(&entry).unwrap();
    }

    let mut predictor = ScorePredictor::new(dir.path().join("score_model.json"));
    let records = store.list_all().unwrap();
    assert!(!predictor.train(&records, DEFAULT_MIN_SAMPLES).unwrap());
    assert!(!predictor.is_trained());
    assert!(matches!(
        predictor.predict(3.0, 70.0),
        Err(Error::ModelNotTrained)
    ));
}

#[test]
fn test_predictions_are_clamped_to_score_range() {
    let dir = TempDir::new().unwrap();
    let records = seeded_store(near_linear_rows()).list_all().unwrap();

    let mut predictor = ScorePredictor::new(dir.path().join("score_model.json"));
    predictor.train(&records, DEFAULT_MIN_SAMPLES).unwrap();

    // Wildly out-of-range input saturates rather than extrapolating.
    let high = predictor.predict(1000.0, 100.0).unwrap();
    assert!((high - SCORE_RANGE.1).abs() < f64::EPSILON, "got {high}");

    let low = predictor.predict(-1000.0, 0.0).unwrap();
    assert!((low - SCORE_RANGE.0).abs() < f64::EPSILON, "got {low}");
}

#[test]
fn test_fresh_process_predicts_from_snapshot() {
    let dir = TempDir::new().unwrap();
    let snapshot_path = dir.path().join("score_model.json");
    let records = seeded_store(near_linear_rows()).list_all().unwrap();

    let warm = {
        let mut predictor = ScorePredictor::new(&snapshot_path);
        predictor.train(&records, DEFAULT_MIN_SAMPLES).unwrap();
        predictor.predict(3.0, 70.0).unwrap()
    };

    // A second instance starts with a cold cache and must fall back
    // to the snapshot on disk.
    let mut restarted = ScorePredictor::new(&snapshot_path);
    assert!(restarted.is_trained());
    let cold = restarted.predict(3.0, 70.0).unwrap();
    assert!((warm - cold).abs() < 1e-9, "warm {warm} vs cold {cold}");
}

#[test]
fn test_unreadable_snapshot_counts_as_untrained() {
    let dir = TempDir::new().unwrap();
    let snapshot_path = dir.path().join("score_model.json");
    fs::write(&snapshot_path, "{ not json").unwrap();

    let mut predictor = ScorePredictor::new(&snapshot_path);
    assert!(matches!(
        predictor.predict(3.0, 70.0),
        Err(Error::ModelNotTrained)
    ));
}

#[test]
fn test_failed_training_keeps_previous_snapshot() {
    let dir = TempDir::new().unwrap();
    let snapshot_path = dir.path().join("score_model.json");
    let records = seeded_store(near_linear_rows()).list_all().unwrap();

    let mut predictor = ScorePredictor::new(&snapshot_path);
    predictor.train(&records, DEFAULT_MIN_SAMPLES).unwrap();

    // Retraining over a shrunken table fails the gate and clears the
    // cache, but the earlier snapshot still answers predictions.
    assert!(!predictor.train(&records[..2], DEFAULT_MIN_SAMPLES).unwrap());
    let score = predictor.predict(3.0, 70.0).unwrap();
    assert!((score - 65.0).abs() < 1.0, "expected ~65, got {score}");
}
