//! Analytics over student records
//!
//! Pure summary statistics plus chart artifact rendering. Both recompute
//! from the record slice they are handed; neither holds state between
//! calls, so a fresh `list_all` snapshot is all they ever see.

pub mod charts;
mod summary;

pub use charts::render_all;
pub use summary::{summarize, SUMMARY_FIELDS};
