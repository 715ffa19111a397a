//! Benchmarks for the feedback reverb.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use tonebox::dsp::oscillator::generate_tone;
use tonebox::dsp::reverb::{reverb, ReverbParams};

use crate::{DURATIONS, SAMPLE_RATE};

pub fn bench_reverb(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/reverb");

    let settings: &[(&str, ReverbParams)] = &[
        ("short", ReverbParams::new(10.0, 0.35, 0.5)),
        ("default", ReverbParams::default()),
        ("long_tail", ReverbParams::new(250.0, 0.6, 0.8)),
    ];

    for &duration in DURATIONS {
        let Ok(input) = generate_tone(440.0, duration, SAMPLE_RATE) else {
            continue;
        };
        for (name, params) in settings {
            group.bench_with_input(
                BenchmarkId::new(*name, format!("{duration}s")),
                &input,
                |b, input| b.iter(|| reverb(black_box(input), params, SAMPLE_RATE)),
            );
        }
    }

    group.finish();
}
