//! Benchmarks for precomputing the default note table under each effect.
//!
//! This is the startup cost of a session: every mapped key rendered once.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use tonebox::synth::{EffectMode, NotePrecomputeTable, NoteTable};
use tonebox::SynthConfig;

pub fn bench_voices(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/voices");
    group.sample_size(10);

    let notes = NoteTable::default();
    let config = SynthConfig::default().noise_seed(1);

    for mode in EffectMode::ALL {
        group.bench_with_input(
            BenchmarkId::new("precompute", mode.to_string()),
            &mode,
            |b, &mode| b.iter(|| NotePrecomputeTable::build(black_box(mode), &notes, &config)),
        );
    }

    group.finish();
}
