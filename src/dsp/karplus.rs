/*
Karplus-Strong Plucked String
=============================

A physical model of a plucked string built from nothing but a noise burst and
a delay line that feeds on itself.

Vocabulary
----------

  delay line    L cells holding one period of the string. L = floor(sr / f)
                sets the pitch; nothing else in the algorithm does.

  excitation    The initial contents of the line: uniform noise in [-1, 1].
                This is the "pluck" - every harmonic at once.

  previous      The last emitted sample. Averaging with it is a one-pole
                low-pass filter inside the loop.


The Loop
--------

    ┌──────────────────────────────────────────┐
    │                                          │
    │   line[c] ──→ (line[c] + previous) / 2 ──┼──→ output
    │      ↑                  │                │
    │      └──── overwrite ───┘                │
    │                                          │
    └──────────────── c = (c + 1) mod L ───────┘

Each step overwrites the cell under the cursor BEFORE the value is emitted, so
on the next pass round the line that cell already carries one round of
filtering. High harmonics are averaged away faster than low ones, which is
exactly how a real string loses its brightness after the pluck.

Reading the old value, emitting it and only then writing back would give an
unfiltered first period and a different decay; the write-then-emit order is
part of the sound.

Because every value is an average of values in [-1, 1], the output can never
leave that range.
*/

use rand::Rng;
use snafu::ensure;

use crate::dsp::oscillator::{check_frequency, sample_count};
use crate::error::{FrequencyAboveSampleRateSnafu, Result};

/// Delay line length for `frequency`: `floor(sample_rate / frequency)`.
pub fn delay_length(frequency: f32, sample_rate: u32) -> Result<usize> {
    check_frequency(frequency)?;
    let len = (f64::from(sample_rate) / f64::from(frequency)).floor();
    ensure!(
        len >= 1.0,
        FrequencyAboveSampleRateSnafu {
            frequency,
            sample_rate,
        }
    );
    Ok(len as usize)
}

/// Pluck a string with a fresh thread-local noise burst.
pub fn karplus_strong(frequency: f32, duration: f64, sample_rate: u32) -> Result<Vec<f32>> {
    karplus_strong_with_rng(frequency, duration, sample_rate, &mut rand::rng())
}

/// Pluck a string with noise drawn from `rng`.
pub fn karplus_strong_with_rng<R: Rng + ?Sized>(
    frequency: f32,
    duration: f64,
    sample_rate: u32,
    rng: &mut R,
) -> Result<Vec<f32>> {
    let total = sample_count(duration, sample_rate)?;
    // A line longer than the note is never read past `total` cells.
    let len = delay_length(frequency, sample_rate)?.min(total);

    let mut line: Vec<f32> = (0..len).map(|_| rng.random_range(-1.0..=1.0)).collect();
    let mut cursor = 0;
    let mut previous = 0.0f32;

    let mut out = Vec::with_capacity(total);
    for _ in 0..total {
        let cell = (line[cursor] + previous) * 0.5;
        line[cursor] = cell;
        out.push(cell);
        previous = cell;
        cursor = (cursor + 1) % len;
    }

    Ok(out)
}
