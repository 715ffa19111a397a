//! Benchmarks for delay line operations.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use tonebox::dsp::delay::DelayLine;

use crate::BLOCK_SIZES;

pub fn bench_delay(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/delay");

    let delay_times: &[usize] = &[
        441,    // 10ms at 44.1kHz
        4_410,  // 100ms at 44.1kHz
        44_100, // 1 second at 44.1kHz
    ];

    for &size in BLOCK_SIZES {
        let input: Vec<f32> = (0..size).map(|i| (i as f32 * 0.1).sin()).collect();

        for &delay_samples in delay_times {
            let delay_ms = delay_samples as f32 / 44.1;

            // Read, write back with feedback, step both cursors
            let mut delay = DelayLine::new(delay_samples);
            group.bench_with_input(
                BenchmarkId::new(format!("feedback_{}ms", delay_ms as u32), size),
                &size,
                |b, _| {
                    b.iter(|| {
                        let mut sum = 0.0f32;
                        for &sample in &input {
                            let delayed = delay.read();
                            delay.write(black_box(sample) + delayed * 0.5);
                            delay.advance();
                            sum += delayed;
                        }
                        sum
                    })
                },
            );
        }
    }

    group.finish();
}
