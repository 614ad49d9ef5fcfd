//! Course names shared by every compared schedule.

use std::collections::HashSet;

use crate::error::{AnalyzerError, Result};
use crate::model::Schedule;

/// Find the course names present in every schedule.
///
/// Starts from the first schedule's names and intersects with each following
/// schedule in input order, by exact string equality. The result keeps the
/// first schedule's order and lists each name once.
///
/// # Errors
/// Returns `AnalyzerError::InvalidInput` if fewer than two schedules are given.
pub fn find_common_courses(schedules: &[Schedule]) -> Result<Vec<String>> {
    let (first, rest) = match schedules {
        [first, rest @ ..] if !rest.is_empty() => (first, rest),
        _ => {
            return Err(AnalyzerError::InvalidInput(
                "at least two schedules required".to_string(),
            ))
        }
    };

    let mut seen = HashSet::new();
    let mut common: Vec<&str> = first.course_names().filter(|n| seen.insert(*n)).collect();

    for schedule in rest {
        let names: HashSet<&str> = schedule.course_names().collect();
        common.retain(|n| names.contains(n));
        if common.is_empty() {
            break;
        }
    }

    Ok(common.into_iter().map(str::to_string).collect())
}
