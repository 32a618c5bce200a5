//! Score prediction lifecycle: train, snapshot, restart, predict
//!
//! This example demonstrates:
//! - Training the least-squares model over the student table
//! - The persisted model snapshot (coefficients + metadata)
//! - Predicting after a cold start from the snapshot alone
//!
//! Run with: cargo run --example score_prediction

use alumno_db::predictor::{ModelSnapshot, ScorePredictor, DEFAULT_MIN_SAMPLES};
use alumno_db::student::{NewStudent, StudentStore};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Alumno-DB Score Prediction Example ===\n");

    let store = StudentStore::open_in_memory()?;
    let roster = [
        ("Ada", 9.0, 95.0, 91.0),
        ("Grace", 6.5, 88.0, 83.0),
        ("Edsger", 4.0, 72.0, 64.0),
        ("Barbara", 7.5, 90.0, 86.0),
        ("Alan", 2.0, 55.0, 48.0),
        ("Katherine", 8.0, 97.0, 93.0),
    ];
    for (name, hours, attendance, score) in roster {
        store.insert(&NewStudent::new(name, 22, hours, attendance, score)?)?;
    }

    let snapshot_path = std::env::temp_dir().join("alumno-demo-score_model.json");
    let records = store.list_all()?;

    println!("=== Training over {} records ===", records.len());
    let mut predictor = ScorePredictor::new(&snapshot_path);
    if !predictor.train(&records, DEFAULT_MIN_SAMPLES)? {
        println!("Not enough data to train the model.");
        return Ok(());
    }

    let snapshot = ModelSnapshot::read(&snapshot_path)?;
    println!("  features:  {:?}", snapshot.feature_names());
    println!("  coefficients: {:?}", snapshot.coefficients());
    println!("  intercept: {:.4}", snapshot.intercept());
    println!("  trained at {} over {} samples\n", snapshot.trained_at(), snapshot.n_samples());

    println!("=== Predictions (warm cache) ===");
    for (hours, attendance) in [(3.0, 70.0), (8.0, 95.0), (0.5, 40.0)] {
        let score = predictor.predict(hours, attendance)?;
        println!("  {hours:4.1} h/week, {attendance:5.1}% attendance -> {score:5.2}");
    }

    // A fresh instance has no cache and must reload the snapshot.
    println!("\n=== Predictions (cold start from snapshot) ===");
    let mut restarted = ScorePredictor::new(&snapshot_path);
    let score = restarted.predict(3.0, 70.0)?;
    println!("  3.0 h/week, 70.0% attendance -> {score:5.2}");

    std::fs::remove_file(&snapshot_path)?;
    Ok(())
}
