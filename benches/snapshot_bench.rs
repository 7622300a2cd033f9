use chrono::{Duration, NaiveDate, NaiveDateTime};
use criterion::{criterion_group, criterion_main, Criterion};
use paceboard::models::Activity;
use paceboard::stats::buckets::chart_buckets;
use paceboard::stats::heatmap::build_heatmap;
use paceboard::stats::{build_snapshot, Granularity, Sport};
use std::hint::black_box;

/// Two years of mixed-sport history, a busy athlete's worth.
fn synthetic_activities(count: usize) -> Vec<Activity> {
    let anchor = NaiveDate::from_ymd_opt(2024, 12, 6).unwrap();
    (0..count)
        .map(|i| {
            let sport_type = match i % 3 {
                0 => "Run",
                1 => "Ride",
                _ => "Walk",
            };
            let start = (anchor - Duration::days((i as i64 * 7) % 730))
                .and_hms_opt(7, (i % 50) as u32, 0)
                .unwrap();
            Activity {
                id: i as u64 + 1,
                sport_type: sport_type.to_string(),
                start_date_local: start,
                distance_meters: 3_000.0 + (i % 25) as f64 * 900.0,
                moving_time_seconds: 1_200 + (i as u64 % 25) * 260,
                elevation_gain_meters: (i % 12) as f64 * 30.0,
            }
        })
        .collect()
}

fn bench_now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 12, 6)
        .unwrap()
        .and_hms_opt(18, 0, 0)
        .unwrap()
}

fn benchmark_engine(c: &mut Criterion) {
    let activities = synthetic_activities(600);
    let now = bench_now();

    let mut group = c.benchmark_group("dashboard_engine");

    group.bench_function("build_snapshot_600", |b| {
        b.iter(|| build_snapshot(black_box(&activities), Sport::Running, now, true))
    });

    group.bench_function("chart_buckets_600", |b| {
        b.iter(|| {
            let refs = Sport::Running.filter(black_box(&activities));
            chart_buckets(&refs, Granularity::Month, now)
        })
    });

    group.bench_function("heatmap_600", |b| {
        b.iter(|| {
            let refs = Sport::Cycling.filter(black_box(&activities));
            build_heatmap(&refs, Sport::Cycling, now.date())
        })
    });

    group.finish();
}

criterion_group!(benches, benchmark_engine);
criterion_main!(benches);
