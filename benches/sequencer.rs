// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the timeline sequencer.
//!
//! Measures the performance of:
//! - Fast-forwarding a full mount script in one coarse tick
//! - Advancing the script at the UI tick cadence (50ms)
//! - The manual recovery path including cancellation

use criterion::{criterion_group, criterion_main, Criterion};
use review_flow::sequencer::{PlaybackSpeed, Sequencer};
use std::hint::black_box;
use std::time::Duration;

/// Benchmark a full scripted run collapsed into a single tick.
fn bench_fast_forward(c: &mut Criterion) {
    let mut group = c.benchmark_group("sequencer");

    group.bench_function("fast_forward_full_script", |b| {
        b.iter(|| {
            let mut sequencer = Sequencer::new(PlaybackSpeed::default());
            sequencer.advance(Duration::from_secs(60));
            black_box(sequencer.is_idle());
        });
    });

    group.finish();
}

/// Benchmark a full scripted run at the real tick cadence.
fn bench_tick_cadence(c: &mut Criterion) {
    let mut group = c.benchmark_group("sequencer");

    group.bench_function("advance_at_50ms_ticks", |b| {
        b.iter(|| {
            let mut sequencer = Sequencer::new(PlaybackSpeed::default());
            for _ in 0..400 {
                sequencer.advance(Duration::from_millis(50));
            }
            black_box(sequencer.state().platform_publish_visible);
        });
    });

    group.finish();
}

/// Benchmark the manual recovery path with script replacement.
fn bench_recovery_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("sequencer");

    group.bench_function("gift_click_recovery", |b| {
        b.iter(|| {
            let mut sequencer = Sequencer::new(PlaybackSpeed::default());
            sequencer.advance(Duration::from_millis(3_500));
            sequencer.gift_click();
            sequencer.advance(Duration::from_millis(4_500));
            black_box(sequencer.state().recovered_visible);
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_fast_forward,
    bench_tick_cadence,
    bench_recovery_path
);
criterion_main!(benches);
