//! Error types for Alumno-DB
//!
//! Toyota Way: Clear error messages with actionable guidance (Respect for People)

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Alumno-DB error types
#[derive(Error, Debug)]
pub enum Error {
    /// Input field missing, non-numeric or out of range
    #[error("Validation error: {0}")]
    Validation(String),

    /// Record store read or write failed
    #[error("Persistence error: {0}")]
    Persistence(#[from] rusqlite::Error),

    /// Prediction requested before any model was fitted
    #[error("Model is not trained yet\nAdd more student records and run training first")]
    ModelNotTrained,

    /// Least-squares solver rejected the training data
    #[error("Model fit failed: {0}")]
    ModelFit(String),

    /// Chart backend failed to draw or write an artifact
    #[error("Chart render failed: {0}")]
    ChartRender(String),

    /// Model snapshot (de)serialization failed
    #[error("Snapshot error: {0}")]
    Snapshot(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
