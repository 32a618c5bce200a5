//! Record store backed by an embedded SQLite table
//!
//! ## Design
//!
//! Single mapped table, append-only. Ids come from SQLite's rowid
//! allocation, so they are unique and monotonically increasing for the
//! lifetime of the database file. Inserts are single statements, so a
//! failed insert leaves no partial row behind.

use std::path::Path;

use rusqlite::{params, Connection};
use tracing::debug;

use super::{NewStudent, StudentRecord};
use crate::Result;

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS students (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    name        TEXT    NOT NULL,
    age         INTEGER NOT NULL,
    study_hours REAL    NOT NULL,
    attendance  REAL    NOT NULL,
    exam_score  REAL    NOT NULL
);";

/// SQLite-backed store for student records.
///
/// The contract is single-threaded, request-per-call; every read recomputes
/// from the current full table.
#[derive(Debug)]
pub struct StudentStore {
    conn: Connection,
}

impl StudentStore {
    /// Open (creating if needed) the database at `path`.
    ///
    /// Schema creation is idempotent, so reopening an existing database is
    /// safe.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Persistence`](crate::Error::Persistence) when the
    /// file cannot be opened or the schema cannot be created.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::with_connection(Connection::open(path)?)
    }

    /// Open a private in-memory database.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Persistence`](crate::Error::Persistence) when the
    /// schema cannot be created.
    pub fn open_in_memory() -> Result<Self> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self> {
        conn.execute_batch(SCHEMA)?;
        Ok(Self { conn })
    }

    /// Insert a validated entry and return the id the database assigned.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Persistence`](crate::Error::Persistence) when the
    /// write fails; no partial row survives a failed insert.
    pub fn insert(&self, student: &NewStudent) -> Result<i64> {
        self.conn.execute(
            "INSERT INTO students (name, age, study_hours, attendance, exam_score)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                student.name(),
                student.age(),
                student.study_hours(),
                student.attendance(),
                student.exam_score()
            ],
        )?;
        let id = self.conn.last_insert_rowid();
        debug!(id, name = student.name(), "student record inserted");
        Ok(id)
    }

    /// All records, most recently inserted first.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Persistence`](crate::Error::Persistence) when the
    /// query fails.
    pub fn list_all(&self) -> Result<Vec<StudentRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, age, study_hours, attendance, exam_score
             FROM students
             ORDER BY id DESC",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(StudentRecord::new(
                row.get(0)?,
                row.get::<_, String>(1)?,
                row.get(2)?,
                row.get(3)?,
                row.get(4)?,
                row.get(5)?,
            ))
        })?;
        let records = rows.collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(records)
    }

    /// Number of stored records.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Persistence`](crate::Error::Persistence) when the
    /// query fails.
    pub fn count(&self) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM students", [], |row| row.get(0))?;
        Ok(usize::try_from(count).unwrap_or(0))
    }
}
