//! Benchmarks for mixing primitives.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use tonebox::dsp::mix::{blend_dry_wet, sum_in_place};

use crate::BLOCK_SIZES;

pub fn bench_mix(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/mix");

    for &size in BLOCK_SIZES {
        let a: Vec<f32> = (0..size).map(|i| (i as f32 * 0.01).sin()).collect();
        let b_sig: Vec<f32> = (0..size).map(|i| (i as f32 * 0.013).sin()).collect();

        let mut acc = a.clone();
        group.bench_with_input(BenchmarkId::new("sum_in_place", size), &size, |b, _| {
            b.iter(|| {
                acc.copy_from_slice(&a);
                sum_in_place(black_box(&mut acc), black_box(&b_sig))
            })
        });

        let mut out = vec![0.0f32; size];
        group.bench_with_input(BenchmarkId::new("blend_dry_wet", size), &size, |b, _| {
            b.iter(|| {
                for ((o, &dry), &wet) in out.iter_mut().zip(&a).zip(&b_sig) {
                    *o = blend_dry_wet(dry, wet, black_box(0.35));
                }
            })
        });
    }

    group.finish();
}
