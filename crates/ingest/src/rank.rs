//! Region ranking for the summary table.
//!
//! Labels are passed through unpadded. Column alignment is left to the
//! table widget.

use types::{RankedRow, SnapshotRecord};

/// Column headers matching [`RankedRow`] field order.
pub const TABLE_HEADERS: [&str; 4] = ["Region", "Confirmed", "Cured", "Dead"];

/// Rank regions by confirmed cases, highest first.
///
/// The sort is stable: regions with equal counts keep their input order.
pub fn rank(records: &[SnapshotRecord]) -> Vec<RankedRow> {
    let mut rows: Vec<RankedRow> = records.iter().map(RankedRow::from).collect();
    rows.sort_by(|a, b| b.confirmed.cmp(&a.confirmed));
    rows
}
