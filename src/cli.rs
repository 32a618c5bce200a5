//! CLI argument parsing for Alumno-DB

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::predictor::DEFAULT_MIN_SAMPLES;

/// Command-line interface for the student metrics tracker.
#[derive(Parser, Debug)]
#[command(name = "alumno-db")]
#[command(version)]
#[command(
    about = "Track student metrics, summarize them and predict exam scores",
    long_about = None
)]
pub struct Cli {
    /// Directory holding the database, model snapshot and chart output
    #[arg(long = "data-dir", value_name = "DIR", default_value = ".")]
    pub data_dir: PathBuf,

    /// Enable debug logging to stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Operation to run
    #[command(subcommand)]
    pub command: Command,
}

/// The available operations.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Record a new student
    Add {
        /// Student name
        #[arg(long)]
        name: String,

        /// Age in years (positive integer)
        #[arg(long)]
        age: u32,

        /// Weekly study hours (greater than 0)
        #[arg(long = "study-hours")]
        study_hours: f64,

        /// Attendance percentage (0-100)
        #[arg(long)]
        attendance: f64,

        /// Exam score percentage (0-100)
        #[arg(long = "exam-score")]
        exam_score: f64,
    },

    /// List all records, most recent first
    List,

    /// Show min, mean and max for each metric field
    Stats,

    /// Render the bar, line and scatter chart artifacts
    Charts,

    /// Fit the score model over all records
    Train {
        /// Fewest records accepted for a training run
        #[arg(long = "min-samples", default_value_t = DEFAULT_MIN_SAMPLES)]
        min_samples: usize,
    },

    /// Predict an exam score from study hours and attendance
    Predict {
        /// Weekly study hours (greater than 0)
        #[arg(long = "study-hours")]
        study_hours: f64,

        /// Attendance percentage (0-100)
        #[arg(long)]
        attendance: f64,
    },
}
