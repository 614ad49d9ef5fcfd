//! Work-window configuration for free-time analysis.
//!
//! Defaults are Monday-Friday, 08:00-22:00, with a 60-minute minimum free
//! window. Every field may be overridden per call; absent JSON fields fall
//! back to the defaults.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::{AnalyzerError, Result};
use crate::time::parse_hhmm;

pub const DEFAULT_WORK_HOUR_START: &str = "08:00";
pub const DEFAULT_WORK_HOUR_END: &str = "22:00";
pub const DEFAULT_MIN_FREE_MINUTES: u32 = 60;
/// Upper bound on the flattened slot count, keeping the pairwise conflict
/// scan bounded.
pub const DEFAULT_MAX_TOTAL_SLOTS: usize = 10_000;

fn default_work_days() -> BTreeSet<u8> {
    (1..=5).collect()
}

fn default_work_hour_start() -> String {
    DEFAULT_WORK_HOUR_START.to_string()
}

fn default_work_hour_end() -> String {
    DEFAULT_WORK_HOUR_END.to_string()
}

fn default_min_free_minutes() -> u32 {
    DEFAULT_MIN_FREE_MINUTES
}

fn default_max_total_slots() -> usize {
    DEFAULT_MAX_TOTAL_SLOTS
}

/// Caller-facing analysis options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AnalyzerOptions {
    /// Days searched for free time (0 = Sunday .. 6 = Saturday).
    #[serde(default = "default_work_days")]
    pub work_days: BTreeSet<u8>,
    #[serde(default = "default_work_hour_start")]
    pub work_hour_start: String,
    #[serde(default = "default_work_hour_end")]
    pub work_hour_end: String,
    /// Free windows shorter than this are not reported. 0 reports every gap.
    #[serde(default = "default_min_free_minutes")]
    pub min_free_minutes: u32,
    #[serde(default = "default_max_total_slots")]
    pub max_total_slots: usize,
}

impl Default for AnalyzerOptions {
    fn default() -> Self {
        Self {
            work_days: default_work_days(),
            work_hour_start: default_work_hour_start(),
            work_hour_end: default_work_hour_end(),
            min_free_minutes: default_min_free_minutes(),
            max_total_slots: default_max_total_slots(),
        }
    }
}

/// The validated, integer-minute form of [`AnalyzerOptions`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkWindow {
    /// Ascending, deduplicated.
    pub days: Vec<u8>,
    pub start: u32,
    pub end: u32,
    pub min_free_minutes: u32,
}

impl AnalyzerOptions {
    /// Resolve the options into a [`WorkWindow`].
    ///
    /// # Errors
    /// Returns `AnalyzerError::InvalidInput` if a work day is outside 0-6, an
    /// hour bound does not parse as `"HH:MM"`, or the start is not before the end.
    pub fn validate(&self) -> Result<WorkWindow> {
        if let Some(bad) = self.work_days.iter().find(|d| **d > 6) {
            return Err(AnalyzerError::InvalidInput(format!(
                "work day {} is outside 0-6",
                bad
            )));
        }

        let start = parse_hhmm(&self.work_hour_start).ok_or_else(|| {
            AnalyzerError::InvalidInput(format!(
                "invalid workHourStart '{}'",
                self.work_hour_start
            ))
        })?;
        let end = parse_hhmm(&self.work_hour_end).ok_or_else(|| {
            AnalyzerError::InvalidInput(format!("invalid workHourEnd '{}'", self.work_hour_end))
        })?;
        if start >= end {
            return Err(AnalyzerError::InvalidInput(format!(
                "workHourStart {} must be before workHourEnd {}",
                self.work_hour_start, self.work_hour_end
            )));
        }

        Ok(WorkWindow {
            days: self.work_days.iter().copied().collect(),
            start,
            end,
            min_free_minutes: self.min_free_minutes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_resolve_to_weekday_daytime_window() {
        let window = AnalyzerOptions::default().validate().unwrap();
        assert_eq!(window.days, vec![1, 2, 3, 4, 5]);
        assert_eq!(window.start, 8 * 60);
        assert_eq!(window.end, 22 * 60);
        assert_eq!(window.min_free_minutes, 60);
    }

    #[test]
    fn missing_json_fields_take_defaults() {
        let opts: AnalyzerOptions = serde_json::from_str(r#"{"minFreeMinutes": 30}"#).unwrap();
        assert_eq!(opts.min_free_minutes, 30);
        assert_eq!(opts.work_hour_start, "08:00");
        assert_eq!(opts.max_total_slots, DEFAULT_MAX_TOTAL_SLOTS);
    }

    #[test]
    fn unknown_json_fields_are_rejected() {
        let parsed: std::result::Result<AnalyzerOptions, _> =
            serde_json::from_str(r#"{"workHours": "08:00"}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn inverted_window_is_invalid() {
        let opts = AnalyzerOptions {
            work_hour_start: "18:00".into(),
            work_hour_end: "09:00".into(),
            ..AnalyzerOptions::default()
        };
        assert!(matches!(opts.validate(), Err(AnalyzerError::InvalidInput(_))));
    }

    #[test]
    fn weekend_day_out_of_range_is_invalid() {
        let opts = AnalyzerOptions {
            work_days: [1, 7].into_iter().collect(),
            ..AnalyzerOptions::default()
        };
        assert!(matches!(opts.validate(), Err(AnalyzerError::InvalidInput(_))));
    }
}
