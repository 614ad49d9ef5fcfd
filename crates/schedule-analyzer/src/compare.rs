//! Full comparison of two or more schedules.
//!
//! Runs every analysis over one validated slot list so the report is either
//! complete or not produced at all.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::conflict::{conflicts_between, ConflictRecord};
use crate::courses::find_common_courses;
use crate::error::{AnalyzerError, Result};
use crate::freebusy::{common_free_time, FreeTimeSlot};
use crate::model::Schedule;
use crate::options::AnalyzerOptions;
use crate::stats::{summarize_schedule, ScheduleSummary};
use crate::time::flatten_slots;

/// Roll-up counts for a comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub total_schedules: usize,
    pub common_course_count: usize,
    pub conflict_count: usize,
    pub common_free_slot_count: usize,
    /// One entry per input schedule, in input order.
    pub schedules: Vec<ScheduleSummary>,
}

/// The result of [`compare_schedules`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonReport {
    pub common_courses: Vec<String>,
    pub time_conflicts: Vec<ConflictRecord>,
    pub common_free_time: Vec<FreeTimeSlot>,
    pub statistics: Statistics,
}

/// Compare two or more schedules: common courses, cross-schedule conflicts,
/// common free time within the work window, and per-schedule statistics.
///
/// # Errors
/// Returns `AnalyzerError::InvalidInput` if fewer than two schedules are given,
/// the options are invalid, or the slot limit is exceeded. Returns
/// `AnalyzerError::MalformedSlot` for the first slot that fails validation.
pub fn compare_schedules(
    schedules: &[Schedule],
    options: &AnalyzerOptions,
) -> Result<ComparisonReport> {
    if schedules.len() < 2 {
        return Err(AnalyzerError::InvalidInput(
            "at least two schedules required".to_string(),
        ));
    }

    let window = options.validate()?;
    let slots = flatten_slots(schedules, options.max_total_slots)?;
    debug!(
        schedules = schedules.len(),
        slots = slots.len(),
        "comparing schedules"
    );

    let common_courses = find_common_courses(schedules)?;
    let time_conflicts = conflicts_between(schedules, &slots);
    let common_free_time = common_free_time(&slots, &window);
    let summaries = schedules
        .iter()
        .map(summarize_schedule)
        .collect::<Result<Vec<_>>>()?;

    let statistics = Statistics {
        total_schedules: schedules.len(),
        common_course_count: common_courses.len(),
        conflict_count: time_conflicts.len(),
        common_free_slot_count: common_free_time.len(),
        schedules: summaries,
    };

    Ok(ComparisonReport {
        common_courses,
        time_conflicts,
        common_free_time,
        statistics,
    })
}
