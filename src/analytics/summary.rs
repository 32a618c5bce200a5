//! Summary statistics over the metric fields
//!
//! Mean, min and max per metric column, computed with trueno's SIMD
//! reduction kernels.

use std::collections::BTreeMap;

use trueno::Vector;

use crate::student::StudentRecord;

/// Metric fields summarized, in presentation order.
pub const SUMMARY_FIELDS: [&str; 3] = ["study_hours", "attendance", "exam_score"];

/// Compute `<field>_<stat>` entries over all records.
///
/// Produces mean, min and max for study hours, attendance and exam score
/// (nine entries total); each mean lies within its reported [min, max].
/// Zero records yield an empty map rather than an error. Pure function:
/// callers re-read the store and recompute on every request.
#[must_use]
pub fn summarize(records: &[StudentRecord]) -> BTreeMap<String, f64> {
    let mut summary = BTreeMap::new();
    if records.is_empty() {
        return summary;
    }

    for (field, values) in columns(records) {
        let vector = Vector::from_slice(&values);
        // The reductions only fail on empty input, which is guarded above.
        let min = f64::from(vector.min().unwrap_or(0.0));
        let max = f64::from(vector.max().unwrap_or(0.0));
        // f32 lane rounding can push the mean a hair past an extreme;
        // pin it inside the observed range.
        let mean = f64::from(vector.mean().unwrap_or(0.0)).max(min).min(max);
        summary.insert(format!("{field}_mean"), mean);
        summary.insert(format!("{field}_min"), min);
        summary.insert(format!("{field}_max"), max);
    }
    summary
}

#[allow(clippy::cast_possible_truncation)]
fn columns(records: &[StudentRecord]) -> [(&'static str, Vec<f32>); 3] {
    let collect = |field: fn(&StudentRecord) -> f64| -> Vec<f32> {
        records.iter().map(|record| field(record) as f32).collect()
    };
    [
        ("study_hours", collect(StudentRecord::study_hours)),
        ("attendance", collect(StudentRecord::attendance)),
        ("exam_score", collect(StudentRecord::exam_score)),
    ]
}
