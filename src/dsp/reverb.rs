//! Reverb - single-tap feedback delay line
//!
//! A cheap room impression: one delay line whose output is both blended into
//! the signal (wet) and fed back into the line (feedback), producing a train of
//! decaying reflections spaced `delay_ms` apart.
//!
//! ```text
//!            ┌──────────── wet ─────────────┐
//!            │                              ↓
//! Input ──┬──┼──→ (1-fb)·x + fb·d ─→ [Delay D] ─→ d
//!         │  └───────────────────────────────┘
//!         └─────────── (1-wet) ───────────→ (+) ──→ Output
//! ```
//!
//! Per sample:
//!
//! ```text
//! delayed  = line[read]
//! out[i]   = (1 - wet) · x[i] + wet · delayed
//! line[w]  = (1 - fb)  · x[i] + fb  · delayed
//! ```
//!
//! The output has the same length as the input; the tail past the last input
//! sample is cut off rather than appended.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use snafu::ensure;

use crate::dsp::delay::DelayLine;
use crate::dsp::mix::blend_dry_wet;
use crate::error::{DelayTooShortSnafu, Result};

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReverbParams {
    /// Spacing between reflections in milliseconds
    pub delay_ms: f32,
    /// Share of the delayed signal in the output (0.0 = dry)
    pub wet: f32,
    /// Share of the delayed signal fed back into the line
    pub feedback: f32,
}

impl ReverbParams {
    pub fn new(delay_ms: f32, wet: f32, feedback: f32) -> Self {
        Self {
            delay_ms,
            wet,
            feedback,
        }
    }

    /// Delay line length: `floor(delay_ms · 0.001 · sample_rate)`.
    pub fn delay_samples(&self, sample_rate: u32) -> Result<usize> {
        let samples = (f64::from(self.delay_ms) * f64::from(sample_rate) / 1000.0).floor();
        ensure!(
            samples >= 1.0,
            DelayTooShortSnafu {
                delay_ms: self.delay_ms,
                sample_rate,
            }
        );
        Ok(samples as usize)
    }
}

impl Default for ReverbParams {
    fn default() -> Self {
        Self::new(100.0, 0.35, 0.5)
    }
}

pub fn reverb(input: &[f32], params: &ReverbParams, sample_rate: u32) -> Result<Vec<f32>> {
    let mut line = DelayLine::new(params.delay_samples(sample_rate)?);

    Ok(input
        .iter()
        .map(|&x| {
            let delayed = line.read();
            line.write(blend_dry_wet(x, delayed, params.feedback));
            line.advance();
            blend_dry_wet(x, delayed, params.wet)
        })
        .collect())
}
