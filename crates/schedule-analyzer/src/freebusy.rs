//! Compute common free time and merged busy blocks across schedules.
//!
//! For each work day, slots from every schedule are clipped to the work
//! window, sorted by start time, and merged into busy periods. The gaps
//! between merged periods within the window are the free slots.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::Result;
use crate::model::Schedule;
use crate::options::{AnalyzerOptions, WorkWindow};
use crate::time::{flatten_slots, format_hhmm, ParsedSlot};

/// A window on a work day during which no compared schedule has a slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FreeTimeSlot {
    pub day: u8,
    pub start_time: String,
    pub end_time: String,
    pub duration_minutes: u32,
}

/// A merged busy period on a work day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusyBlock {
    pub day: u8,
    pub start_time: String,
    pub end_time: String,
    pub duration_minutes: u32,
    /// Number of distinct schedules with at least one slot in this block.
    pub schedule_count: usize,
}

/// Clip the day's slots to the window and merge overlapping or adjacent ones.
///
/// Returns a sorted, non-overlapping list of (start, end) intervals.
fn merge_busy_periods(slots: &[&ParsedSlot], window_start: u32, window_end: u32) -> Vec<(u32, u32)> {
    // Discard slots entirely outside the window.
    let mut intervals: Vec<(u32, u32)> = slots
        .iter()
        .filter(|s| s.start < window_end && s.end > window_start)
        .map(|s| (s.start.max(window_start), s.end.min(window_end)))
        .collect();

    intervals.sort_unstable();

    let mut merged: Vec<(u32, u32)> = Vec::new();
    for (start, end) in intervals {
        if let Some(last) = merged.last_mut() {
            if start <= last.1 {
                last.1 = last.1.max(end);
                continue;
            }
        }
        merged.push((start, end));
    }

    merged
}

/// Every gap between merged busy periods inside `[window_start, window_end]`.
fn free_gaps(merged: &[(u32, u32)], window_start: u32, window_end: u32) -> Vec<(u32, u32)> {
    let mut gaps = Vec::new();
    let mut cursor = window_start;

    for &(busy_start, busy_end) in merged {
        if cursor < busy_start {
            gaps.push((cursor, busy_start));
        }
        cursor = cursor.max(busy_end);
    }

    // Trailing gap after the last busy period.
    if cursor < window_end {
        gaps.push((cursor, window_end));
    }

    gaps
}

fn slots_on(slots: &[ParsedSlot], day: u8) -> Vec<&ParsedSlot> {
    slots.iter().filter(|s| s.day == day).collect()
}

pub(crate) fn common_free_time(slots: &[ParsedSlot], window: &WorkWindow) -> Vec<FreeTimeSlot> {
    let mut free = Vec::new();

    for &day in &window.days {
        let day_slots = slots_on(slots, day);
        let merged = merge_busy_periods(&day_slots, window.start, window.end);
        let before = free.len();

        free.extend(
            free_gaps(&merged, window.start, window.end)
                .into_iter()
                .filter(|(start, end)| end - start >= window.min_free_minutes)
                .map(|(start, end)| FreeTimeSlot {
                    day,
                    start_time: format_hhmm(start),
                    end_time: format_hhmm(end),
                    duration_minutes: end - start,
                }),
        );

        trace!(
            day,
            busy = merged.len(),
            free = free.len() - before,
            "computed free time for day"
        );
    }

    free
}

pub(crate) fn busy_blocks(slots: &[ParsedSlot], window: &WorkWindow) -> Vec<BusyBlock> {
    let mut blocks = Vec::new();

    for &day in &window.days {
        let day_slots = slots_on(slots, day);
        for (start, end) in merge_busy_periods(&day_slots, window.start, window.end) {
            let mut contributors: Vec<usize> = day_slots
                .iter()
                .filter(|s| s.start < end && s.end > start)
                .map(|s| s.schedule_index)
                .collect();
            contributors.sort_unstable();
            contributors.dedup();

            blocks.push(BusyBlock {
                day,
                start_time: format_hhmm(start),
                end_time: format_hhmm(end),
                duration_minutes: end - start,
                schedule_count: contributors.len(),
            });
        }
    }

    blocks
}

/// Find the windows of the work week where none of the schedules has a slot.
///
/// Days are visited in ascending order; within a day slots are sorted by
/// start time. Gaps shorter than `options.min_free_minutes` are dropped. A day
/// with no slots yields the whole work window as one candidate.
///
/// # Errors
/// Returns `AnalyzerError::InvalidInput` for invalid options or too many slots,
/// and `AnalyzerError::MalformedSlot` if any slot fails validation.
pub fn find_common_free_time(
    schedules: &[Schedule],
    options: &AnalyzerOptions,
) -> Result<Vec<FreeTimeSlot>> {
    let window = options.validate()?;
    let slots = flatten_slots(schedules, options.max_total_slots)?;
    Ok(common_free_time(&slots, &window))
}

/// Find the earliest common free slot of at least `min_duration_minutes`.
///
/// `min_duration_minutes` replaces `options.min_free_minutes` for this call.
pub fn find_first_common_free_slot(
    schedules: &[Schedule],
    options: &AnalyzerOptions,
    min_duration_minutes: u32,
) -> Result<Option<FreeTimeSlot>> {
    let mut window = options.validate()?;
    window.min_free_minutes = min_duration_minutes;
    let slots = flatten_slots(schedules, options.max_total_slots)?;
    Ok(common_free_time(&slots, &window).into_iter().next())
}

/// Merge all schedules' slots into busy blocks per work day, clipped to the
/// work window, each carrying how many schedules contributed to it.
pub fn find_busy_blocks(schedules: &[Schedule], options: &AnalyzerOptions) -> Result<Vec<BusyBlock>> {
    let window = options.validate()?;
    let slots = flatten_slots(schedules, options.max_total_slots)?;
    Ok(busy_blocks(&slots, &window))
}
