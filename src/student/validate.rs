//! Field-range validation for incoming student data
//!
//! Validation runs before any store mutation, so a value that reaches the
//! store is range-safe for every downstream component. Non-finite floats
//! (NaN, infinities) count as non-numeric and are rejected.

use crate::{Error, Result};

/// Inclusive bounds shared by the percentage-scaled fields.
pub const PERCENT_RANGE: (f64, f64) = (0.0, 100.0);

/// The name must be non-empty after trimming.
///
/// # Errors
///
/// Returns [`Error::Validation`] when the name is blank.
pub fn name(value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::Validation("Name is required.".to_string()));
    }
    Ok(())
}

/// Age must be a positive integer.
///
/// # Errors
///
/// Returns [`Error::Validation`] when the age is zero.
pub fn age(value: u32) -> Result<()> {
    if value == 0 {
        return Err(Error::Validation(
            "Age must be a positive integer.".to_string(),
        ));
    }
    Ok(())
}

/// Study hours must be a finite number greater than zero.
///
/// # Errors
///
/// Returns [`Error::Validation`] when the value is non-finite or not
/// positive.
pub fn study_hours(value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(Error::Validation(
            "Study hours must be a number.".to_string(),
        ));
    }
    if value <= 0.0 {
        return Err(Error::Validation(
            "Study hours must be greater than 0.".to_string(),
        ));
    }
    Ok(())
}

/// Attendance must be a finite percentage.
///
/// # Errors
///
/// Returns [`Error::Validation`] when the value is non-finite or outside
/// [`PERCENT_RANGE`].
pub fn attendance(value: f64) -> Result<()> {
    percent("Attendance", value)
}

/// Exam score must be a finite percentage.
///
/// # Errors
///
/// Returns [`Error::Validation`] when the value is non-finite or outside
/// [`PERCENT_RANGE`].
pub fn exam_score(value: f64) -> Result<()> {
    percent("Exam score", value)
}

/// Validate the two prediction-form inputs before any model work runs.
///
/// Prediction itself never range-checks its arguments (extreme inputs must
/// flow through to the clamp), so this is the request-handler's guard.
///
/// # Errors
///
/// Returns [`Error::Validation`] for a non-positive or non-finite study-hours
/// value, or an attendance outside [`PERCENT_RANGE`].
pub fn prediction_input(study_hours_value: f64, attendance_value: f64) -> Result<()> {
    study_hours(study_hours_value)?;
    attendance(attendance_value)
}

fn percent(field: &str, value: f64) -> Result<()> {
    let (low, high) = PERCENT_RANGE;
    if !value.is_finite() || value < low || value > high {
        return Err(Error::Validation(format!(
            "{field} must be between 0 and 100."
        )));
    }
    Ok(())
}
