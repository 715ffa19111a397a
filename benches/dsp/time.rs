//! Benchmarks for the length-changing effects: echo and pitch shift.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use tonebox::dsp::echo::{echo, EchoParams};
use tonebox::dsp::oscillator::generate_tone;
use tonebox::dsp::pitch::pitch_shift;

use crate::{DURATIONS, SAMPLE_RATE};

pub fn bench_echo_pitch(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/time");
    let params = EchoParams::default();

    for &duration in DURATIONS {
        let Ok(input) = generate_tone(440.0, duration, SAMPLE_RATE) else {
            continue;
        };
        let label = format!("{duration}s");

        group.bench_with_input(BenchmarkId::new("echo", &label), &input, |b, input| {
            b.iter(|| echo(black_box(input), &params))
        });

        for factor in [0.5f32, 2.0] {
            group.bench_with_input(
                BenchmarkId::new(format!("pitch_x{factor}"), &label),
                &input,
                |b, input| b.iter(|| pitch_shift(black_box(input), factor)),
            );
        }
    }

    group.finish();
}
