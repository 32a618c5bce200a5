//! Basic Alumno-DB usage: record store, summary statistics and charts
//!
//! This example demonstrates:
//! - Inserting validated student records
//! - Newest-first listing
//! - SIMD summary statistics over the whole table
//! - Rendering the three PNG chart artifacts
//!
//! Run with: cargo run --example basic_usage

use alumno_db::analytics::{render_all, summarize};
use alumno_db::student::{NewStudent, StudentStore};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Alumno-DB Basic Usage Example ===\n");

    let store = StudentStore::open_in_memory()?;
    let roster = [
        ("Ada", 21, 9.0, 95.0, 91.0),
        ("Grace", 24, 6.5, 88.0, 83.0),
        ("Edsger", 22, 4.0, 72.0, 64.0),
        ("Barbara", 23, 7.5, 90.0, 86.0),
        ("Alan", 21, 2.0, 55.0, 48.0),
    ];
    for (name, age, hours, attendance, score) in roster {
        let entry = NewStudent::new(name, age, hours, attendance, score)?;
        store.insert(&entry)?;
    }
    println!("Inserted {} students\n", store.count()?);

    println!("=== Records (newest first) ===");
    let records = store.list_all()?;
    for record in &records {
        println!(
            "  #{} {:10} age {:2}  {:4.1} h/week  {:5.1}% attendance  score {:5.1}",
            record.id(),
            record.name(),
            record.age(),
            record.study_hours(),
            record.attendance(),
            record.exam_score()
        );
    }

    println!("\n=== Summary Statistics ===");
    for (key, value) in summarize(&records) {
        println!("  {key:20} {value:8.2}");
    }

    println!("\n=== Chart Artifacts ===");
    for path in render_all(&records, "plots")? {
        println!("  wrote {}", path.display());
    }

    Ok(())
}
