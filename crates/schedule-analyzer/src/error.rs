//! Error types for schedule-analyzer operations.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalyzerError {
    /// Too few schedules, a bad work window, or a size limit exceeded.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A slot whose times do not parse, whose day is out of range, or whose
    /// end is not after its start. `slot_index` is 0-based within the schedule.
    /// Schedule names need not be unique, so the id is carried as well.
    #[error("Malformed slot #{slot_index} in schedule '{schedule}' (id '{schedule_id}'): {reason}")]
    MalformedSlot {
        schedule: String,
        schedule_id: String,
        slot_index: usize,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, AnalyzerError>;
