//! Tests for cross-schedule conflict detection.

use schedule_analyzer::{find_time_conflicts, AnalyzerError, AnalyzerOptions, Schedule, TimeSlot};

/// Helper to build a schedule from `(day, start, end)` triples.
fn schedule(name: &str, slots: &[(u8, &str, &str)]) -> Schedule {
    Schedule {
        id: name.to_lowercase(),
        name: name.to_string(),
        owner: "tester".to_string(),
        semester: None,
        courses: vec![],
        slots: slots
            .iter()
            .map(|(day, start, end)| TimeSlot::new(*day, start, end))
            .collect(),
    }
}

#[test]
fn overlapping_monday_slots_detected() {
    // A: Mon 09:00-10:30, B: Mon 10:00-11:00 → one 30-min conflict
    let a = schedule("A", &[(1, "09:00", "10:30")]);
    let b = schedule("B", &[(1, "10:00", "11:00")]);

    let conflicts = find_time_conflicts(&[a, b], &AnalyzerOptions::default()).unwrap();

    assert_eq!(conflicts.len(), 1, "should detect exactly one conflict");
    assert_eq!(conflicts[0].day, 1);
    assert_eq!(conflicts[0].time1, "09:00-10:30");
    assert_eq!(conflicts[0].time2, "10:00-11:00");
    assert_eq!(conflicts[0].schedule1, "A");
    assert_eq!(conflicts[0].schedule2, "B");
    assert_eq!(conflicts[0].overlap_minutes, 30);
}

#[test]
fn same_times_on_different_days_no_conflict() {
    let a = schedule("A", &[(1, "09:00", "10:00")]);
    let b = schedule("B", &[(2, "09:00", "10:00")]);

    let conflicts = find_time_conflicts(&[a, b], &AnalyzerOptions::default()).unwrap();

    assert!(conflicts.is_empty(), "different days never conflict");
}

#[test]
fn adjacent_slots_not_a_conflict() {
    // A ends at 10:00 exactly when B starts
    let a = schedule("A", &[(3, "09:00", "10:00")]);
    let b = schedule("B", &[(3, "10:00", "11:00")]);

    let conflicts = find_time_conflicts(&[a, b], &AnalyzerOptions::default()).unwrap();

    assert!(
        conflicts.is_empty(),
        "adjacent slots (end == start) should not be conflicts"
    );
}

#[test]
fn times_compared_numerically_across_the_hour() {
    // 09:45-10:15 straddles the hour boundary of B's 10:00 start.
    let a = schedule("A", &[(1, "09:45", "10:15")]);
    let b = schedule("B", &[(1, "10:00", "11:00")]);

    let conflicts = find_time_conflicts(&[a, b], &AnalyzerOptions::default()).unwrap();

    assert_eq!(conflicts.len(), 1);
    assert_eq!(conflicts[0].time1, "09:45-10:15");
    assert_eq!(conflicts[0].overlap_minutes, 15);
}

#[test]
fn unpadded_time_is_malformed() {
    // "09:5" is not "09:50"; it must be rejected, not read as 09:05.
    let a = schedule("A", &[(1, "09:00", "10:00")]);
    let b = schedule("B", &[(1, "09:5", "11:00")]);

    let err = find_time_conflicts(&[a, b], &AnalyzerOptions::default()).unwrap_err();

    assert!(matches!(
        err,
        AnalyzerError::MalformedSlot { ref schedule, slot_index: 0, .. } if schedule == "B"
    ));
}

#[test]
fn overlapping_slots_within_one_schedule_ignored() {
    let a = schedule("A", &[(1, "09:00", "11:00"), (1, "10:00", "12:00")]);

    let conflicts = find_time_conflicts(&[a], &AnalyzerOptions::default()).unwrap();

    assert!(conflicts.is_empty(), "a schedule never conflicts with itself");
}

#[test]
fn three_schedules_report_every_cross_pair_once() {
    // All three overlap on Tuesday 10:00-10:30.
    let a = schedule("A", &[(2, "09:00", "10:30")]);
    let b = schedule("B", &[(2, "10:00", "11:00")]);
    let c = schedule("C", &[(2, "10:15", "12:00"), (4, "08:00", "09:00")]);

    let conflicts = find_time_conflicts(&[a, b, c], &AnalyzerOptions::default()).unwrap();

    let pairs: Vec<(&str, &str)> = conflicts
        .iter()
        .map(|c| (c.schedule1.as_str(), c.schedule2.as_str()))
        .collect();
    assert_eq!(pairs, vec![("A", "B"), ("A", "C"), ("B", "C")]);
    assert_eq!(conflicts[1].overlap_minutes, 15); // 10:15-10:30
    assert_eq!(conflicts[2].overlap_minutes, 45); // 10:15-11:00
}

#[test]
fn fully_contained_slot_overlap_is_shorter_slot() {
    let a = schedule("A", &[(5, "09:00", "12:00")]);
    let b = schedule("B", &[(5, "10:00", "11:00")]);

    let conflicts = find_time_conflicts(&[a, b], &AnalyzerOptions::default()).unwrap();

    assert_eq!(conflicts.len(), 1);
    assert_eq!(conflicts[0].overlap_minutes, 60);
}

#[test]
fn empty_schedules_no_conflicts() {
    assert!(find_time_conflicts(&[], &AnalyzerOptions::default()).unwrap().is_empty());
    let a = schedule("A", &[]);
    let b = schedule("B", &[(1, "09:00", "10:00")]);
    assert!(find_time_conflicts(&[a, b], &AnalyzerOptions::default()).unwrap().is_empty());
}

#[test]
fn unparsable_time_fails_whole_call() {
    let a = schedule("A", &[(1, "09:00", "10:30")]);
    let b = schedule("B", &[(1, "10:00", "11:00"), (2, "25:00", "26:00")]);

    let err = find_time_conflicts(&[a, b], &AnalyzerOptions::default()).unwrap_err();

    match err {
        AnalyzerError::MalformedSlot {
            schedule,
            schedule_id,
            slot_index,
            ..
        } => {
            assert_eq!(schedule, "B");
            assert_eq!(schedule_id, "b");
            assert_eq!(slot_index, 1);
        }
        other => panic!("expected MalformedSlot, got {:?}", other),
    }
}

#[test]
fn slot_limit_rejects_pathological_input() {
    let slots: Vec<(u8, &str, &str)> = vec![(1, "09:00", "10:00"); 5_001];
    let a = schedule("A", &slots);
    let b = schedule("B", &slots);

    assert!(matches!(
        find_time_conflicts(&[a, b], &AnalyzerOptions::default()),
        Err(AnalyzerError::InvalidInput(_))
    ));
}

#[test]
fn malformed_slot_identifies_schedule_by_id() {
    // Two schedules share a name; only the id tells them apart.
    let mut first = schedule("Alice", &[(1, "09:00", "10:00")]);
    first.id = "64f1a2b3c4d5e6f7a8b9c0d1".to_string();
    let mut second = schedule("Alice", &[(1, "10:00", "09:00")]);
    second.id = "64f1a2b3c4d5e6f7a8b9c0d2".to_string();

    let err = find_time_conflicts(&[first, second], &AnalyzerOptions::default()).unwrap_err();

    assert!(matches!(
        err,
        AnalyzerError::MalformedSlot { ref schedule_id, .. } if schedule_id == "64f1a2b3c4d5e6f7a8b9c0d2"
    ));
    assert!(err.to_string().contains("(id '64f1a2b3c4d5e6f7a8b9c0d2')"));
}

#[test]
fn raised_slot_limit_accepts_large_input() {
    let slots: Vec<(u8, &str, &str)> = vec![(1, "09:00", "10:00"); 5_001];
    let a = schedule("A", &slots);
    let b = schedule("B", &[(2, "09:00", "10:00")]);
    let options = AnalyzerOptions {
        max_total_slots: 20_000,
        ..AnalyzerOptions::default()
    };

    let conflicts = find_time_conflicts(&[a.clone(), b.clone()], &options).unwrap();
    assert!(conflicts.is_empty());

    let tight = AnalyzerOptions {
        max_total_slots: 100,
        ..AnalyzerOptions::default()
    };
    assert!(matches!(
        find_time_conflicts(&[a, b], &tight),
        Err(AnalyzerError::InvalidInput(_))
    ));
}
