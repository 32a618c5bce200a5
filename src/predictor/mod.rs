//! Exam score prediction via two-feature least squares
//!
//! ## Model Lifecycle
//!
//! ```text
//! records ──train (>= min samples)──> FittedModel ──┬──> in-memory cache
//!                                                   └──> JSON snapshot
//!                        predict <── cache, else snapshot, else error
//! ```
//!
//! Training is always a full refit over the records it is handed; nothing
//! is incremental. The in-memory cache lives inside an owned
//! [`ScorePredictor`] value rather than process-global state, so callers
//! and tests can run isolated predictors against separate snapshot paths.
//!
//! ## Usage
//!
//! ```rust
//! use alumno_db::predictor::{ScorePredictor, DEFAULT_MIN_SAMPLES};
//! use alumno_db::student::StudentRecord;
//!
//! # fn main() -> alumno_db::Result<()> {
//! # let dir = std::env::temp_dir().join("alumno-doc-predictor");
//! let mut predictor = ScorePredictor::new(dir.join("score_model.json"));
//!
//! let hours = [2.0, 3.5, 1.0, 4.5, 2.5];
//! let attendance = [70.0, 88.0, 55.0, 92.0, 75.0];
//! let records: Vec<StudentRecord> = hours
//!     .iter()
//!     .zip(attendance)
//!     .enumerate()
//!     .map(|(i, (&h, a))| {
//!         let score = 20.0 + 8.0 * h + 0.4 * a;
//!         StudentRecord::new(i as i64 + 1, format!("s{i}"), 20, h, a, score)
//!     })
//!     .collect();
//!
//! assert!(predictor.train(&records, DEFAULT_MIN_SAMPLES)?);
//! let score = predictor.predict(3.0, 80.0)?;
//! assert!((0.0..=100.0).contains(&score));
//! # std::fs::remove_dir_all(&dir).ok();
//! # Ok(())
//! # }
//! ```

mod snapshot;

pub use snapshot::ModelSnapshot;

use std::path::{Path, PathBuf};

use aprender::linear_model::LinearRegression;
use aprender::primitives::{Matrix, Vector};
use aprender::traits::Estimator;
use tracing::{debug, info, warn};

use crate::student::StudentRecord;
use crate::{Error, Result};

/// Fewest records accepted for a training run.
pub const DEFAULT_MIN_SAMPLES: usize = 5;

/// Names of the model inputs, in coefficient order.
pub const FEATURE_NAMES: [&str; 2] = ["study_hours", "attendance"];

/// Inclusive bounds applied to every prediction before it leaves the
/// predictor. The underlying fit stays unconstrained.
pub const SCORE_RANGE: (f64, f64) = (0.0, 100.0);

// Relative determinant threshold below which the centered Gram matrix is
// treated as rank deficient.
const RANK_TOLERANCE: f64 = 1e-12;

/// A fitted least-squares model:
/// `exam_score ~ coef[0] * study_hours + coef[1] * attendance + intercept`.
#[derive(Debug, Clone, PartialEq)]
pub struct FittedModel {
    coefficients: [f64; 2],
    intercept: f64,
}

impl FittedModel {
    /// Fit from records. Always a full refit.
    ///
    /// Degenerate designs still fit: when the solver rejects the feature
    /// matrix (attendance moving in lockstep with study hours, or a
    /// constant column), the minimum-norm least-squares solution is
    /// computed directly from the centered Gram matrix instead.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ModelFit`] when the feature matrix cannot be
    /// assembled or the parameters come out non-finite.
    #[allow(clippy::cast_possible_truncation)]
    pub fn fit(records: &[StudentRecord]) -> Result<Self> {
        let rows = records.len();
        let mut features = Vec::with_capacity(rows * FEATURE_NAMES.len());
        let mut targets = Vec::with_capacity(rows);
        for record in records {
            features.push(record.study_hours() as f32);
            features.push(record.attendance() as f32);
            targets.push(record.exam_score() as f32);
        }

        let x = Matrix::from_vec(rows, FEATURE_NAMES.len(), features)
            .map_err(|e| Error::ModelFit(e.to_string()))?;
        let y = Vector::from_vec(targets);

        let mut model = LinearRegression::new();
        if model.fit(&x, &y).is_err() {
            return Self::fit_minimum_norm(records);
        }
        debug!(
            r_squared = f64::from(model.score(&x, &y)),
            rows, "least-squares refit complete"
        );

        let coefficients = model.coefficients();
        let &[hours_coef, attendance_coef] = coefficients.as_slice() else {
            return Err(Error::ModelFit(format!(
                "expected {} coefficients, solver returned {}",
                FEATURE_NAMES.len(),
                coefficients.as_slice().len()
            )));
        };

        Ok(Self {
            coefficients: [f64::from(hours_coef), f64::from(attendance_coef)],
            intercept: f64::from(model.intercept()),
        })
    }

    /// Minimum-norm least squares over the centered two-feature system.
    ///
    /// Full-rank designs get the exact normal-equation solve. Rank-one
    /// designs use the Gram pseudo-inverse (a rank-one symmetric matrix
    /// divided by its squared trace), which is the same solution an
    /// SVD-based solver returns. All-constant features leave both
    /// coefficients at zero and the intercept at the score mean.
    #[allow(clippy::cast_precision_loss)]
    fn fit_minimum_norm(records: &[StudentRecord]) -> Result<Self> {
        let n = records.len() as f64;
        let mean_of =
            |field: fn(&StudentRecord) -> f64| records.iter().map(field).sum::<f64>() / n;
        let hours_mean = mean_of(StudentRecord::study_hours);
        let attendance_mean = mean_of(StudentRecord::attendance);
        let score_mean = mean_of(StudentRecord::exam_score);

        let (mut s_hh, mut s_ha, mut s_aa) = (0.0_f64, 0.0_f64, 0.0_f64);
        let (mut s_hy, mut s_ay) = (0.0_f64, 0.0_f64);
        for record in records {
            let h = record.study_hours() - hours_mean;
            let a = record.attendance() - attendance_mean;
            let y = record.exam_score() - score_mean;
            s_hh += h * h;
            s_ha += h * a;
            s_aa += a * a;
            s_hy += h * y;
            s_ay += a * y;
        }

        let det = s_hh * s_aa - s_ha * s_ha;
        let scale = (s_hh * s_aa).max(s_ha * s_ha);
        let trace = s_hh + s_aa;
        let (hours_coef, attendance_coef) = if det.abs() > scale * RANK_TOLERANCE {
            (
                (s_aa * s_hy - s_ha * s_ay) / det,
                (s_hh * s_ay - s_ha * s_hy) / det,
            )
        } else if trace > 0.0 {
            (
                (s_hh * s_hy + s_ha * s_ay) / (trace * trace),
                (s_ha * s_hy + s_aa * s_ay) / (trace * trace),
            )
        } else {
            (0.0, 0.0)
        };
        let intercept = score_mean - hours_coef * hours_mean - attendance_coef * attendance_mean;

        if !hours_coef.is_finite() || !attendance_coef.is_finite() || !intercept.is_finite() {
            return Err(Error::ModelFit(
                "degenerate design produced non-finite parameters".to_string(),
            ));
        }

        let model = Self {
            coefficients: [hours_coef, attendance_coef],
            intercept,
        };
        let (mut ss_res, mut ss_tot) = (0.0_f64, 0.0_f64);
        for record in records {
            let fitted = model.raw_score(record.study_hours(), record.attendance());
            ss_res += (record.exam_score() - fitted).powi(2);
            ss_tot += (record.exam_score() - score_mean).powi(2);
        }
        let r_squared = if ss_tot > 0.0 { 1.0 - ss_res / ss_tot } else { 1.0 };
        debug!(
            r_squared,
            rows = records.len(),
            "minimum-norm refit complete"
        );
        Ok(model)
    }

    /// Reconstruct a model from stored parameters without refitting.
    #[must_use]
    pub const fn from_parameters(coefficients: [f64; 2], intercept: f64) -> Self {
        Self {
            coefficients,
            intercept,
        }
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

    /// The linear combination, before any clamping.
    #[must_use]
    pub fn raw_score(&self, study_hours: f64, attendance: f64) -> f64 {
        self.coefficients[0] * study_hours + self.coefficients[1] * attendance + self.intercept
    }
}

/// Exam score predictor owning an in-memory model cache and a snapshot
/// location.
///
/// Untrained and trained are the two states: untrained predictors fail
/// with [`Error::ModelNotTrained`]; trained ones serve from the cache or
/// fall back to the persisted snapshot.
#[derive(Debug)]
pub struct ScorePredictor {
    snapshot_path: PathBuf,
    cache: Option<FittedModel>,
}

impl ScorePredictor {
    /// Create a predictor persisting to `snapshot_path`. No I/O happens
    /// here; a snapshot already on disk is picked up lazily by the first
    /// prediction.
    #[must_use]
    pub fn new(snapshot_path: impl Into<PathBuf>) -> Self {
        Self {
            snapshot_path: snapshot_path.into(),
            cache: None,
        }
    }

    /// The snapshot location this predictor reads and writes.
    #[must_use]
    pub fn snapshot_path(&self) -> &Path {
        &self.snapshot_path
    }

    /// Refit over `records` when at least `min_samples` are present.
    ///
    /// Too few records clear the in-memory cache and return `Ok(false)`;
    /// any previously persisted snapshot stays on disk untouched, so a
    /// later prediction may still serve the older persisted model. On
    /// success the new model is cached first, then the snapshot is fully
    /// rewritten, and `Ok(true)` comes back.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ModelFit`] when the solver fails and
    /// [`Error::Io`]/[`Error::Snapshot`] when the snapshot cannot be
    /// written.
    pub fn train(&mut self, records: &[StudentRecord], min_samples: usize) -> Result<bool> {
        if records.len() < min_samples {
            info!(
                available = records.len(),
                required = min_samples,
                "not enough records to train, clearing cached model"
            );
            self.cache = None;
            return Ok(false);
        }

        let model = FittedModel::fit(records)?;
        self.cache = Some(model.clone());
        ModelSnapshot::from_model(&model, records.len()).write(&self.snapshot_path)?;
        info!(
            n_samples = records.len(),
            path = %self.snapshot_path.display(),
            "model trained and snapshot written"
        );
        Ok(true)
    }

    /// Predict the exam score for the given inputs, clamped to
    /// [`SCORE_RANGE`].
    ///
    /// Serves from the in-memory cache, falling back to the persisted
    /// snapshot (trusted as-is, with no sample-count re-verification) and
    /// caching the reloaded model. Inputs are not range-validated here;
    /// extreme values flow through the linear combination and come back
    /// clamped. The request layer validates user input before calling.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ModelNotTrained`] when neither the cache nor a
    /// readable snapshot yields a model.
    pub fn predict(&mut self, study_hours: f64, attendance: f64) -> Result<f64> {
        if self.cache.is_none() {
            self.cache = Some(self.load_snapshot()?);
        }
        let model = self.cache.as_ref().ok_or(Error::ModelNotTrained)?;
        let raw = model.raw_score(study_hours, attendance);
        Ok(raw.clamp(SCORE_RANGE.0, SCORE_RANGE.1))
    }

    /// Whether a model is available in memory or on disk.
    #[must_use]
    pub fn is_trained(&self) -> bool {
        self.cache.is_some() || self.snapshot_path.exists()
    }

    /// Drop the in-memory model, leaving any snapshot on disk. The next
    /// prediction reloads from the snapshot.
    pub fn clear_cache(&mut self) {
        self.cache = None;
    }

    fn load_snapshot(&self) -> Result<FittedModel> {
        if !self.snapshot_path.exists() {
            return Err(Error::ModelNotTrained);
        }
        match ModelSnapshot::read(&self.snapshot_path) {
            Ok(snapshot) => {
                debug!(
                    path = %self.snapshot_path.display(),
                    n_samples = snapshot.n_samples(),
                    "model reloaded from snapshot"
                );
                Ok(snapshot.into_model())
            }
            Err(err) => {
                warn!(
                    path = %self.snapshot_path.display(),
                    %err,
                    "snapshot unreadable, treating predictor as untrained"
                );
                Err(Error::ModelNotTrained)
            }
        }
    }
}
