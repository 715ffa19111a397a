//! Waveform generation over a fixed-duration sample grid.
//!
//! Every generator here samples `t = i / sample_rate` for `i` in
//! `0..sample_count(duration, sample_rate)`, so the grid never includes the
//! `t = duration` endpoint.

use std::f64::consts::TAU;

use snafu::ensure;

use crate::dsp::envelope::{apply_envelope, EnvelopeShape};
use crate::error::{InvalidDurationSnafu, InvalidFrequencySnafu, InvalidSampleRateSnafu, Result};

/// Partials summed by [`generate_harmonic_tone`], as multiples of the fundamental.
pub const PIANO_PARTIALS: [f64; 3] = [1.0, 1.5, 0.5];

/// Full scale of the quantized pure tone.
pub const PCM16_SCALE: f64 = 32767.0;

/// Largest buffer any generator will allocate, in samples.
const MAX_SAMPLES: f64 = (isize::MAX / 4) as f64;

/// Number of samples in a buffer of `duration` seconds.
///
/// Rounds `sample_rate * duration` to the nearest integer so that durations like
/// `0.9` don't lose a sample to floating point noise.
pub fn sample_count(duration: f64, sample_rate: u32) -> Result<usize> {
    ensure!(sample_rate > 0, InvalidSampleRateSnafu { sample_rate });
    ensure!(
        duration.is_finite() && duration > 0.0,
        InvalidDurationSnafu { duration }
    );
    let samples = (f64::from(sample_rate) * duration).round();
    ensure!(samples <= MAX_SAMPLES, InvalidDurationSnafu { duration });
    Ok(samples as usize)
}

pub(crate) fn check_frequency(frequency: f32) -> Result<()> {
    ensure!(
        frequency.is_finite() && frequency > 0.0,
        InvalidFrequencySnafu { frequency }
    );
    Ok(())
}

fn sine_grid(frequency: f64, len: usize, sample_rate: u32) -> impl Iterator<Item = f64> {
    let step = TAU * frequency / f64::from(sample_rate);
    (0..len).map(move |i| (step * i as f64).sin())
}

/// A pure sine at `frequency`, amplitude 1.0.
pub fn generate_tone(frequency: f32, duration: f64, sample_rate: u32) -> Result<Vec<f32>> {
    check_frequency(frequency)?;
    let len = sample_count(duration, sample_rate)?;
    Ok(sine_grid(f64::from(frequency), len, sample_rate)
        .map(|s| s as f32)
        .collect())
}

/// The fundamental plus the `1.5×` and `0.5×` partials, summed without normalization.
///
/// Peaks can reach roughly ±3.0; the envelope applied afterwards is what brings
/// the level back down.
pub fn generate_harmonic_tone(frequency: f32, duration: f64, sample_rate: u32) -> Result<Vec<f32>> {
    check_frequency(frequency)?;
    let len = sample_count(duration, sample_rate)?;
    let mut out = vec![0.0f64; len];
    for ratio in PIANO_PARTIALS {
        for (acc, s) in out
            .iter_mut()
            .zip(sine_grid(f64::from(frequency) * ratio, len, sample_rate))
        {
            *acc += s;
        }
    }
    Ok(out.into_iter().map(|s| s as f32).collect())
}

/// Harmonic tone shaped by `envelope` - the "piano" timbre every effect starts from.
pub fn generate_piano_note(
    frequency: f32,
    duration: f64,
    sample_rate: u32,
    envelope: &EnvelopeShape,
) -> Result<Vec<f32>> {
    let raw = generate_harmonic_tone(frequency, duration, sample_rate)?;
    apply_envelope(raw, envelope, duration, sample_rate)
}

/// Pure sine quantized to 16-bit PCM with `floor(amplitude * 32767)`.
///
/// The only integer-valued buffer in the crate.
pub fn generate_sine_pcm16(frequency: f32, duration: f64, sample_rate: u32) -> Result<Vec<i16>> {
    check_frequency(frequency)?;
    let len = sample_count(duration, sample_rate)?;
    Ok(sine_grid(f64::from(frequency), len, sample_rate)
        .map(|s| (s * PCM16_SCALE).floor() as i16)
        .collect())
}
