//! # schedule-analyzer
//!
//! Compare weekly course schedules: shared courses, cross-schedule time
//! conflicts, and the windows of the work week where every schedule is free.
//!
//! All operations are pure and synchronous. Slot times are parsed once from
//! `"HH:MM"` strings into minutes since midnight, every computation runs on
//! integers, and results are formatted back to `"HH:MM"` on the way out.
//!
//! ## Modules
//!
//! - [`model`] — `Schedule`, `Course`, `TimeSlot` input records
//! - [`time`] — `"HH:MM"` parsing/formatting and slot validation
//! - [`options`] — work-window configuration (`AnalyzerOptions`)
//! - [`courses`] — course names common to every schedule
//! - [`conflict`] — pairwise slot overlaps between different schedules
//! - [`freebusy`] — merged busy blocks and common free time per work day
//! - [`stats`] — per-schedule summary statistics
//! - [`compare`] — the full `ComparisonReport`
//! - [`error`] — Error types

pub mod compare;
pub mod conflict;
pub mod courses;
pub mod error;
pub mod freebusy;
pub mod model;
pub mod options;
pub mod stats;
pub mod time;

pub use compare::{compare_schedules, ComparisonReport, Statistics};
pub use conflict::{find_time_conflicts, ConflictRecord};
pub use courses::find_common_courses;
pub use error::AnalyzerError;
pub use freebusy::{
    find_busy_blocks, find_common_free_time, find_first_common_free_slot, BusyBlock,
    FreeTimeSlot,
};
pub use model::{Course, Schedule, TimeSlot};
pub use options::{AnalyzerOptions, WorkWindow};
pub use stats::{summarize_schedule, ScheduleSummary};
