//! Per-schedule summary statistics.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::Schedule;
use crate::time::parse_schedule_slots;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleSummary {
    pub id: String,
    pub name: String,
    pub owner: String,
    pub course_count: usize,
    pub total_credits: f64,
    /// Mean over rated courses; `None` when no course has a rating.
    pub average_rating: Option<f64>,
    pub slot_count: usize,
    /// Sum of slot durations in hours. Overlapping slots are counted twice.
    pub weekly_hours: f64,
}

/// Summarize one schedule from its own courses and slots.
///
/// # Errors
/// Returns `AnalyzerError::MalformedSlot` if a slot fails validation.
pub fn summarize_schedule(schedule: &Schedule) -> Result<ScheduleSummary> {
    let slots = parse_schedule_slots(schedule, 0)?;
    let busy_minutes: u32 = slots.iter().map(|s| s.duration_minutes()).sum();

    let ratings: Vec<f64> = schedule.courses.iter().filter_map(|c| c.rating).collect();
    let average_rating = if ratings.is_empty() {
        None
    } else {
        Some(ratings.iter().sum::<f64>() / ratings.len() as f64)
    };

    Ok(ScheduleSummary {
        id: schedule.id.clone(),
        name: schedule.name.clone(),
        owner: schedule.owner.clone(),
        course_count: schedule.courses.len(),
        total_credits: schedule.courses.iter().map(|c| c.credits).sum(),
        average_rating,
        slot_count: slots.len(),
        weekly_hours: f64::from(busy_minutes) / 60.0,
    })
}
