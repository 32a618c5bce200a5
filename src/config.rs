//! Data directory layout
//!
//! Everything the tracker persists (database, model snapshot, chart
//! artifacts) lives under a single root directory, so tests and deployments
//! relocate the whole instance by pointing at a different root.

use std::fs;
use std::path::{Path, PathBuf};

use crate::Result;

/// Filename of the SQLite database, relative to the data root.
pub const DATABASE_FILE: &str = "students.db";

/// Model snapshot location, relative to the data root.
pub const MODEL_SNAPSHOT_FILE: &str = "data/score_model.json";

/// Chart artifact directory, relative to the data root.
pub const PLOTS_DIR: &str = "plots";

/// Resolved locations for persisted state.
#[derive(Debug, Clone)]
pub struct DataPaths {
    root: PathBuf,
}

impl DataPaths {
    /// Create a layout rooted at `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The root directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Location of the SQLite database file.
    #[must_use]
    pub fn database_path(&self) -> PathBuf {
        self.root.join(DATABASE_FILE)
    }

    /// Location of the persisted model snapshot.
    #[must_use]
    pub fn snapshot_path(&self) -> PathBuf {
        self.root.join(MODEL_SNAPSHOT_FILE)
    }

    /// Directory where chart artifacts are written.
    #[must_use]
    pub fn plots_dir(&self) -> PathBuf {
        self.root.join(PLOTS_DIR)
    }

    /// Create the data and plot directories. Idempotent.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`](crate::Error::Io) when a directory cannot be
    /// created.
    pub fn ensure(&self) -> Result<()> {
        if let Some(parent) = self.snapshot_path().parent() {
            fs::create_dir_all(parent)?;
        }
        fs::create_dir_all(self.plots_dir())?;
        Ok(())
    }
}
