//! # Alumno-DB: Embedded Student Metrics Tracker
//!
//! **Version**: 0.1.2
//!
//! Alumno-DB records student academic metrics (name, age, study hours,
//! attendance, exam score) in an embedded SQLite table, summarizes them with
//! SIMD-accelerated statistics, renders chart artifacts, and fits a
//! two-feature least-squares model to predict exam scores.
//!
//! ## Design Principles (Toyota Way Aligned)
//!
//! - **Poka-Yoke safety**: records reach the store only through validated
//!   constructors, so every persisted row is range-safe
//! - **Genchi Genbutsu**: statistics, charts and training always recompute
//!   from the full table instead of trusting derived state
//! - **Jidoka**: predictions are clamped to the score scale before they
//!   leave the predictor
//!
//! ## Example Usage
//!
//! ```rust
//! use alumno_db::analytics::summarize;
//! use alumno_db::student::{NewStudent, StudentStore};
//!
//! # fn main() -> alumno_db::Result<()> {
//! let store = StudentStore::open_in_memory()?;
//! store.insert(&NewStudent::new("Ada", 21, 7.5, 92.0, 88.0)?)?;
//!
//! let records = store.list_all()?;
//! let summary = summarize(&records);
//! assert_eq!(summary.len(), 9);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub mod analytics;
pub mod cli;
pub mod config;
pub mod error;
pub mod predictor;
pub mod student;

pub use error::{Error, Result};
