//! Persisted form of a fitted score model
//!
//! A small JSON document holding the model parameters plus training
//! metadata, fully rewritten on every successful training run. Only the
//! coefficients and intercept take part in reconstruction; the metadata
//! rides along for inspection.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{FittedModel, FEATURE_NAMES};
use crate::Result;

/// On-disk snapshot of a [`FittedModel`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ModelSnapshot {
    coefficients: [f64; 2],
    intercept: f64,
    feature_names: [String; 2],
    trained_at: DateTime<Utc>,
    n_samples: usize,
}

impl ModelSnapshot {
    /// Capture a fitted model together with its training metadata.
    #[must_use]
    pub fn from_model(model: &FittedModel, n_samples: usize) -> Self {
        Self {
            coefficients: model.coefficients(),
            intercept: model.intercept(),
            feature_names: [FEATURE_NAMES[0].to_string(), FEATURE_NAMES[1].to_string()],
            trained_at: Utc::now(),
            n_samples,
        }
    }

    /// Reconstruct the model from the stored parameters. No fitting runs.
    #[must_use]
    pub fn into_model(self) -> FittedModel {
        FittedModel::from_parameters(self.coefficients, self.intercept)
    }

    /// Coefficients in [`FEATURE_NAMES`] order.
    #[must_use]
    pub const fn coefficients(&self) -> [f64; 2] {
        self.coefficients
    }

    /// Intercept term.
    #[must_use]
    pub const fn intercept(&self) -> f64 {
        self.intercept
    }

    /// Labels naming the model inputs, in coefficient order.
    #[must_use]
    pub const fn feature_names(&self) -> &[String; 2] {
        &self.feature_names
    }

    /// When the snapshot was written.
    #[must_use]
    pub const fn trained_at(&self) -> DateTime<Utc> {
        self.trained_at
    }

    /// How many records the fit saw.
    #[must_use]
    pub const fn n_samples(&self) -> usize {
        self.n_samples
    }

    /// Write the snapshot to `path`, creating the parent directory and
    /// overwriting any previous snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`](crate::Error::Io) when the directory or file
    /// cannot be written, [`Error::Snapshot`](crate::Error::Snapshot) when
    /// serialization fails.
    pub fn write(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Read a snapshot back from `path`.
    ///
    /// The content is trusted as-is; no sample-count re-verification
    /// happens here.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`](crate::Error::Io) when the file cannot be
    /// read, [`Error::Snapshot`](crate::Error::Snapshot) when it does not
    /// parse.
    pub fn read(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        let snapshot = serde_json::from_str(&json)?;
        Ok(snapshot)
    }
}
