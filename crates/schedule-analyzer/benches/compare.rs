use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use schedule_analyzer::{compare_schedules, AnalyzerOptions, Course, Schedule, TimeSlot};

/// A busy semester: 40 slots spread over the week, offset per schedule.
fn schedule(index: usize) -> Schedule {
    let slots = (0..40)
        .map(|i| {
            let day = (i % 5 + 1) as u8;
            let start = 8 * 60 + ((i / 5) * 90 + index * 15) % (12 * 60);
            let end = start + 75;
            TimeSlot::new(
                day,
                &format!("{:02}:{:02}", start / 60, start % 60),
                &format!("{:02}:{:02}", end / 60, end % 60),
            )
        })
        .collect();

    Schedule {
        id: format!("s{}", index),
        name: format!("Schedule {}", index),
        owner: "bench".to_string(),
        semester: None,
        courses: (0..8).map(|c| Course::new(&format!("Course {}", c + index % 3))).collect(),
        slots,
    }
}

fn bench_compare(c: &mut Criterion) {
    let options = AnalyzerOptions::default();
    for count in [2usize, 8, 32] {
        let schedules: Vec<Schedule> = (0..count).map(schedule).collect();
        c.bench_function(&format!("compare_schedules/{}", count), |b| {
            b.iter(|| compare_schedules(black_box(&schedules), black_box(&options)))
        });
    }
}

criterion_group!(benches, bench_compare);
criterion_main!(benches);
