//! Criterion benchmarks for WeekdayLab hot paths.
//!
//! Benchmarks:
//! 1. Role-alternation filter for a single pair
//! 2. Filter + simulate for a single pair
//! 3. Full sweep over all candidate pairs

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use weekdaylab_core::domain::{DayOfWeek, RawObservation, TimeSeries, WeekdayPair};
use weekdaylab_core::engine::{clean_subsequence, evaluate_all, simulate, tag_series};

// ── Helpers ──────────────────────────────────────────────────────────

/// Trading days only (Mon–Fri), with a sine-wave price.
fn make_series(n: usize) -> TimeSeries {
    let base_date = chrono::NaiveDate::from_ymd_opt(2000, 1, 3).unwrap();
    let raw = (0..)
        .map(|i| base_date + chrono::Duration::days(i))
        .filter(|d| DayOfWeek::from_date(*d).index() < 5)
        .take(n)
        .enumerate()
        .map(|(i, date)| RawObservation::new(date, 100.0 + (i as f64 * 0.1).sin() * 10.0))
        .collect();
    tag_series(raw).unwrap()
}

// ── 1. Filter ────────────────────────────────────────────────────────

fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("role_alternation_filter");
    let pair = WeekdayPair::new(DayOfWeek::MONDAY, DayOfWeek::FRIDAY).unwrap();

    for &days in &[252, 2520, 6300] {
        let series = make_series(days);
        group.bench_with_input(BenchmarkId::new("mon_fri", days), &days, |b, _| {
            b.iter(|| clean_subsequence(black_box(series.observations()), black_box(pair)));
        });
    }

    group.finish();
}

// ── 2. Filter + simulate ─────────────────────────────────────────────

fn bench_pair(c: &mut Criterion) {
    let series = make_series(2520);
    let pair = WeekdayPair::new(DayOfWeek::TUESDAY, DayOfWeek::THURSDAY).unwrap();

    c.bench_function("filter_and_simulate_2520", |b| {
        b.iter(|| {
            let clean = clean_subsequence(black_box(series.observations()), pair);
            simulate(&clean)
        });
    });
}

// ── 3. Full sweep ────────────────────────────────────────────────────

fn bench_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("all_pairs");

    for &days in &[2520, 6300] {
        let series = make_series(days);
        group.bench_with_input(BenchmarkId::new("sequential", days), &days, |b, _| {
            b.iter(|| evaluate_all(black_box(&series)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_filter, bench_pair, bench_sweep);
criterion_main!(benches);
