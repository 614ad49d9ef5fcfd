//! Detect overlapping slots between different schedules.
//!
//! All slots are flattened into one list tagged with their schedule, then
//! compared pairwise. Slots of the same schedule are never compared against
//! each other, and adjacent slots (one ends exactly when another starts) are
//! NOT conflicts.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::model::Schedule;
use crate::options::AnalyzerOptions;
use crate::time::{flatten_slots, format_range, ParsedSlot};

/// A detected overlap between slots of two different schedules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConflictRecord {
    pub day: u8,
    /// `"HH:MM-HH:MM"` of the slot from `schedule1`.
    pub time1: String,
    /// `"HH:MM-HH:MM"` of the slot from `schedule2`.
    pub time2: String,
    pub schedule1: String,
    pub schedule2: String,
    pub overlap_minutes: u32,
}

/// Find every pairwise overlap between slots of different schedules.
///
/// Accepts any number of schedules; fewer than two yields no conflicts.
/// Output order follows the flattened slot list: outer slot `i`, inner slot
/// `j > i`, so `schedule1` always precedes `schedule2` in the input.
///
/// Only `options.max_total_slots` applies here; the work window does not
/// restrict which slots are compared.
///
/// # Errors
/// Returns `AnalyzerError::MalformedSlot` if any slot fails validation, and
/// `AnalyzerError::InvalidInput` if the total slot count exceeds `options.max_total_slots`.
pub fn find_time_conflicts(
    schedules: &[Schedule],
    options: &AnalyzerOptions,
) -> Result<Vec<ConflictRecord>> {
    let slots = flatten_slots(schedules, options.max_total_slots)?;
    Ok(conflicts_between(schedules, &slots))
}

/// Pairwise scan over already-validated slots. O(S²) in the slot count.
pub(crate) fn conflicts_between(schedules: &[Schedule], slots: &[ParsedSlot]) -> Vec<ConflictRecord> {
    let mut conflicts = Vec::new();

    for (i, a) in slots.iter().enumerate() {
        for b in &slots[i + 1..] {
            if a.schedule_index == b.schedule_index || !a.overlaps(b) {
                continue;
            }

            let overlap_minutes = a.end.min(b.end) - a.start.max(b.start);
            conflicts.push(ConflictRecord {
                day: a.day,
                time1: format_range(a.start, a.end),
                time2: format_range(b.start, b.end),
                schedule1: schedules[a.schedule_index].name.clone(),
                schedule2: schedules[b.schedule_index].name.clone(),
                overlap_minutes,
            });
        }
    }

    debug!(
        slots = slots.len(),
        conflicts = conflicts.len(),
        "scanned slots for cross-schedule conflicts"
    );
    conflicts
}
