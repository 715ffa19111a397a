//! Benchmarks for the ADSR envelope.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use tonebox::dsp::envelope::{apply_envelope, EnvelopeShape};
use tonebox::dsp::oscillator::generate_tone;

use crate::{DURATIONS, SAMPLE_RATE};

pub fn bench_envelope(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/envelope");
    let shape = EnvelopeShape::adsr(0.01, 0.1, 0.7, 0.2);

    for &duration in DURATIONS {
        if shape.segments(duration, SAMPLE_RATE).is_err() {
            continue;
        }
        let label = format!("{duration}s");

        group.bench_with_input(BenchmarkId::new("render", &label), &duration, |b, &d| {
            b.iter(|| shape.render(black_box(d), SAMPLE_RATE))
        });

        let Ok(tone) = generate_tone(440.0, duration, SAMPLE_RATE) else {
            continue;
        };
        group.bench_with_input(BenchmarkId::new("apply", &label), &duration, |b, &d| {
            b.iter(|| apply_envelope(black_box(tone.clone()), &shape, d, SAMPLE_RATE))
        });
    }

    group.finish();
}
