//! Student record types on both sides of the persistence boundary

use serde::{Deserialize, Serialize};

use super::validate;
use crate::Result;

/// A validated, not-yet-persisted student entry.
///
/// The only constructor is [`NewStudent::new`], which runs the field
/// validators, so any value of this type is safe to insert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewStudent {
    name: String,
    age: u32,
    study_hours: f64,
    attendance: f64,
    exam_score: f64,
}

impl NewStudent {
    /// Validate the raw field values and build an insertable entry.
    ///
    /// The name is stored trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`](crate::Error::Validation) when any field
    /// is missing, non-finite or out of range.
    pub fn new(
        name: impl Into<String>,
        age: u32,
        study_hours: f64,
        attendance: f64,
        exam_score: f64,
    ) -> Result<Self> {
        let name = name.into();
        validate::name(&name)?;
        validate::age(age)?;
        validate::study_hours(study_hours)?;
        validate::attendance(attendance)?;
        validate::exam_score(exam_score)?;

        Ok(Self {
            name: name.trim().to_string(),
            age,
            study_hours,
            attendance,
            exam_score,
        })
    }

    /// Get the student name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the age in years.
    #[must_use]
    pub const fn age(&self) -> u32 {
        self.age
    }

    /// Get the weekly study hours.
    #[must_use]
    pub const fn study_hours(&self) -> f64 {
        self.study_hours
    }

    /// Get the attendance percentage.
    #[must_use]
    pub const fn attendance(&self) -> f64 {
        self.attendance
    }

    /// Get the exam score percentage.
    #[must_use]
    pub const fn exam_score(&self) -> f64 {
        self.exam_score
    }
}

/// A persisted student row.
///
/// The id is assigned by the store on insertion and never changes; records
/// are append-only (no update or delete operations exist).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StudentRecord {
    id: i64,
    name: String,
    age: u32,
    study_hours: f64,
    attendance: f64,
    exam_score: f64,
}

impl StudentRecord {
    /// Assemble a record from already-validated parts.
    ///
    /// The store builds these when reading rows back; tests build them
    /// directly to exercise the pure components. No validation runs here.
    #[must_use]
    pub fn new(
        id: i64,
        name: impl Into<String>,
        age: u32,
        study_hours: f64,
        attendance: f64,
        exam_score: f64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            age,
            study_hours,
            attendance,
            exam_score,
        }
    }

    /// Get the store-assigned id.
    #[must_use]
    pub const fn id(&self) -> i64 {
        self.id
    }

    /// Get the student name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the age in years.
    #[must_use]
    pub const fn age(&self) -> u32 {
        self.age
    }

    /// Get the weekly study hours.
    #[must_use]
    pub const fn study_hours(&self) -> f64 {
        self.study_hours
    }

    /// Get the attendance percentage.
    #[must_use]
    pub const fn attendance(&self) -> f64 {
        self.attendance
    }

    /// Get the exam score percentage.
    #[must_use]
    pub const fn exam_score(&self) -> f64 {
        self.exam_score
    }
}
