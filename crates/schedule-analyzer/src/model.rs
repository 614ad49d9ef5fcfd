//! Input records: schedules, their courses, and weekly time slots.
//!
//! These mirror the JSON documents handed over by the persistence layer, so
//! wire names are camelCase. The analyzer only ever borrows them.

use serde::{Deserialize, Serialize};

/// A single recurring weekly time block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlot {
    /// 0 = Sunday .. 6 = Saturday.
    pub day_of_week: u8,
    /// `"HH:MM"`, 24-hour clock.
    pub start_time: String,
    /// `"HH:MM"`, strictly later than `start_time` on the same day.
    pub end_time: String,
    /// Name of the course this slot belongs to, if the source recorded it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl TimeSlot {
    pub fn new(day_of_week: u8, start_time: &str, end_time: &str) -> Self {
        Self {
            day_of_week,
            start_time: start_time.to_string(),
            end_time: end_time.to_string(),
            course: None,
            location: None,
        }
    }
}

/// A course enrolled in a schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub name: String,
    #[serde(default)]
    pub credits: f64,
    /// Student rating of the course, when one was given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
}

impl Course {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            credits: 0.0,
            rating: None,
        }
    }
}

/// One person's (or one variant's) weekly course schedule for a semester.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub owner: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub semester: Option<String>,
    #[serde(default)]
    pub courses: Vec<Course>,
    #[serde(default)]
    pub slots: Vec<TimeSlot>,
}

impl Schedule {
    /// Course names in declaration order. May contain duplicates.
    pub fn course_names(&self) -> impl Iterator<Item = &str> {
        self.courses.iter().map(|c| c.name.as_str())
    }
}
