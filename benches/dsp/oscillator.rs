//! Benchmarks for note sources: sine, harmonic, piano, and plucked string.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tonebox::dsp::envelope::EnvelopeShape;
use tonebox::dsp::karplus::karplus_strong_with_rng;
use tonebox::dsp::oscillator;

use crate::{DURATIONS, SAMPLE_RATE};

pub fn bench_oscillator(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/oscillator");
    let piano = EnvelopeShape::adsr(0.01, 0.1, 0.35, 0.2).with_peak(0.5);

    for &duration in DURATIONS {
        let label = format!("{duration}s");

        group.bench_with_input(BenchmarkId::new("sine", &label), &duration, |b, &d| {
            b.iter(|| oscillator::generate_tone(black_box(440.0), d, SAMPLE_RATE))
        });

        group.bench_with_input(BenchmarkId::new("harmonic", &label), &duration, |b, &d| {
            b.iter(|| oscillator::generate_harmonic_tone(black_box(440.0), d, SAMPLE_RATE))
        });

        group.bench_with_input(BenchmarkId::new("piano", &label), &duration, |b, &d| {
            b.iter(|| oscillator::generate_piano_note(black_box(440.0), d, SAMPLE_RATE, &piano))
        });

        group.bench_with_input(BenchmarkId::new("pcm16", &label), &duration, |b, &d| {
            b.iter(|| oscillator::generate_sine_pcm16(black_box(440.0), d, SAMPLE_RATE))
        });

        let mut rng = StdRng::seed_from_u64(7);
        group.bench_with_input(BenchmarkId::new("karplus", &label), &duration, |b, &d| {
            b.iter(|| karplus_strong_with_rng(black_box(440.0), d, SAMPLE_RATE, &mut rng))
        });
    }

    group.finish();
}
