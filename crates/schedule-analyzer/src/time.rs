//! `"HH:MM"` handling and the integer-minute projection of slots.
//!
//! Times are parsed exactly once, here. Everything downstream works on plain
//! minutes since midnight.

use chrono::{NaiveTime, Timelike};
use tracing::warn;

use crate::error::{AnalyzerError, Result};
use crate::model::Schedule;

/// Minutes in a day. Slots never span midnight, so every value is below this.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// Parse a 24-hour `"HH:MM"` string into minutes since midnight.
///
/// Both fields must be exactly two digits: `"9:05"`, `"09:5"` and padded
/// strings are rejected, as is anything `chrono` rejects under `%H:%M`
/// (including `"24:00"` and seconds).
pub fn parse_hhmm(s: &str) -> Option<u32> {
    let bytes = s.as_bytes();
    let well_formed = bytes.len() == 5
        && bytes[2] == b':'
        && [0, 1, 3, 4].iter().all(|&i| bytes[i].is_ascii_digit());
    if !well_formed {
        return None;
    }

    NaiveTime::parse_from_str(s, "%H:%M")
        .ok()
        .map(|t| t.hour() * 60 + t.minute())
}

/// Format minutes since midnight as zero-padded `"HH:MM"`.
pub fn format_hhmm(minutes: u32) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// Format a `[start, end)` pair as `"HH:MM-HH:MM"`.
pub fn format_range(start: u32, end: u32) -> String {
    format!("{}-{}", format_hhmm(start), format_hhmm(end))
}

/// A validated slot in minutes, tagged with where it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedSlot {
    pub schedule_index: usize,
    pub slot_index: usize,
    pub day: u8,
    pub start: u32,
    pub end: u32,
}

impl ParsedSlot {
    pub fn duration_minutes(&self) -> u32 {
        self.end - self.start
    }

    /// Open-interval overlap on the same day. Touching slots do not overlap.
    pub fn overlaps(&self, other: &ParsedSlot) -> bool {
        self.day == other.day && self.start < other.end && other.start < self.end
    }
}

/// Validate and project every slot of one schedule.
pub fn parse_schedule_slots(schedule: &Schedule, schedule_index: usize) -> Result<Vec<ParsedSlot>> {
    schedule
        .slots
        .iter()
        .enumerate()
        .map(|(slot_index, slot)| {
            let malformed = |reason: String| AnalyzerError::MalformedSlot {
                schedule: schedule.name.clone(),
                schedule_id: schedule.id.clone(),
                slot_index,
                reason,
            };

            if slot.day_of_week > 6 {
                return Err(malformed(format!(
                    "dayOfWeek {} is outside 0-6",
                    slot.day_of_week
                )));
            }
            let start = parse_hhmm(&slot.start_time)
                .ok_or_else(|| malformed(format!("invalid startTime '{}'", slot.start_time)))?;
            let end = parse_hhmm(&slot.end_time)
                .ok_or_else(|| malformed(format!("invalid endTime '{}'", slot.end_time)))?;
            if end <= start {
                return Err(malformed(format!(
                    "endTime {} is not after startTime {}",
                    slot.end_time, slot.start_time
                )));
            }

            Ok(ParsedSlot {
                schedule_index,
                slot_index,
                day: slot.day_of_week,
                start,
                end,
            })
        })
        .collect()
}

/// Flatten the slots of all schedules, in input order, into one validated list.
///
/// Fails before parsing anything if the total slot count exceeds `max_total_slots`,
/// and fails on the first malformed slot without returning a partial list.
pub fn flatten_slots(schedules: &[Schedule], max_total_slots: usize) -> Result<Vec<ParsedSlot>> {
    let total: usize = schedules.iter().map(|s| s.slots.len()).sum();
    if total > max_total_slots {
        warn!(total, max_total_slots, "rejecting schedules over the slot limit");
        return Err(AnalyzerError::InvalidInput(format!(
            "{} slots exceed the limit of {}",
            total, max_total_slots
        )));
    }

    let mut flat = Vec::with_capacity(total);
    for (schedule_index, schedule) in schedules.iter().enumerate() {
        flat.extend(parse_schedule_slots(schedule, schedule_index)?);
    }
    Ok(flat)
}
