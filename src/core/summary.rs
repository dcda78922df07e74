//! Billable / non-billable aggregation.

use crate::models::hour_entry::HourEntry;
use crate::models::summary::HoursSummary;

/// Round to 2 decimals, half away from zero.
fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Compute the billable / non-billable / total summary of a set of entries.
///
/// The total rounds the *unrounded* grand sum: rounding the two partitions
/// first and adding them could drift the total by a cent.
pub fn summarize(entries: &[HourEntry]) -> HoursSummary {
    let mut billable = 0.0;
    let mut non_billable = 0.0;

    for entry in entries {
        if entry.status.is_billable() {
            billable += entry.hours;
        } else {
            non_billable += entry.hours;
        }
    }

    HoursSummary {
        billable: round2(billable),
        non_billable: round2(non_billable),
        total: round2(billable + non_billable),
    }
}
