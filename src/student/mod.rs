//! Student records and their SQLite-backed store
//!
//! ## Schema Overview
//!
//! ```text
//! raw input ──validate──> NewStudent ──insert──> students table
//!                                                     │
//!                                        list_all ────┘──> Vec<StudentRecord>
//! ```
//!
//! Range validation happens once, at the [`NewStudent`] boundary. Rows read
//! back from the table are trusted as already validated.
//!
//! ## Usage
//!
//! ```rust
//! use alumno_db::student::{NewStudent, StudentStore};
//!
//! # fn main() -> alumno_db::Result<()> {
//! let store = StudentStore::open_in_memory()?;
//! let id = store.insert(&NewStudent::new("Grace", 22, 6.0, 85.0, 79.0)?)?;
//!
//! let records = store.list_all()?;
//! assert_eq!(records[0].id(), id);
//! assert_eq!(records[0].name(), "Grace");
//! # Ok(())
//! # }
//! ```

mod record;
mod store;
pub mod validate;

pub use record::{NewStudent, StudentRecord};
pub use store::StudentStore;
