/*
Fixed-Length ADSR Envelope
==========================

Unlike a gated envelope that reacts to note on/off while it runs, every note in
this crate has a known length up front. So the envelope is rendered once as a
whole gain curve and multiplied into the waveform.

Vocabulary
----------

  segment     One of the four contiguous ramps: attack, decay, sustain, release.

  peak        The level reached at the end of the attack. 1.0 for a pure tone,
              0.5 for the harmonic tone whose partials already add up to ~3×.

  sustain     The level held between decay and release (0.0 - 1.0 of full scale,
              independent of peak).


The Shape
---------

  Level
   peak ┐    ╱╲
        │   ╱  ╲___________
      S │  ╱               ╲
        │ ╱                 ╲
    0.0 └╱───────────────────╲──→ Time
         A    D       S        R
         |<------ total ------>|


Segment Lengths
---------------

Each timed segment takes floor(seconds × sample_rate) samples. The sustain
segment gets whatever is left of the buffer:

    sustain_samples = total_samples - attack - decay - release

Rounding shortfalls are never spread across the ramps; they only shorten (or
lengthen) the flat sustain run. If the timed segments alone exceed the buffer
the envelope cannot be built and rendering fails.

Each ramp includes both endpoints (like a linspace), so the attack's first
sample is exactly 0.0 and the release's last sample is exactly 0.0.
*/

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use snafu::ensure;

use crate::dsp::amplify::multiply_in_place;
use crate::dsp::oscillator::sample_count;
use crate::error::{
    EnvelopeLengthSnafu, EnvelopeLevelSnafu, EnvelopeTooLongSnafu, InvalidDurationSnafu, Result,
};

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnvelopeShape {
    /// Seconds to ramp 0 → peak
    pub attack: f64,
    /// Seconds to ramp peak → sustain
    pub decay: f64,
    /// Level held after the decay
    pub sustain: f32,
    /// Seconds to ramp sustain → 0
    pub release: f64,
    /// Level at the top of the attack
    pub peak: f32,
}

/// Sample counts of the four segments for one buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnvelopeSegments {
    pub attack: usize,
    pub decay: usize,
    pub sustain: usize,
    pub release: usize,
}

impl EnvelopeSegments {
    pub fn total(&self) -> usize {
        self.attack + self.decay + self.sustain + self.release
    }
}

impl EnvelopeShape {
    pub fn adsr(attack: f64, decay: f64, sustain: f32, release: f64) -> Self {
        Self {
            attack,
            decay,
            sustain,
            release,
            peak: 1.0,
        }
    }

    pub fn with_peak(mut self, peak: f32) -> Self {
        self.peak = peak;
        self
    }

    /// Lay the segments out over a `total` second buffer.
    pub fn segments(&self, total: f64, sample_rate: u32) -> Result<EnvelopeSegments> {
        let total_samples = sample_count(total, sample_rate)?;
        for duration in [self.attack, self.decay, self.release] {
            ensure!(
                duration.is_finite() && duration >= 0.0,
                InvalidDurationSnafu { duration }
            );
        }
        for (stage, level) in [("peak", self.peak), ("sustain", self.sustain)] {
            ensure!(
                (0.0..=1.0).contains(&level),
                EnvelopeLevelSnafu { stage, level }
            );
        }

        let seconds_to_samples = |seconds: f64| (seconds * f64::from(sample_rate)).floor() as usize;
        let attack = seconds_to_samples(self.attack);
        let decay = seconds_to_samples(self.decay);
        let release = seconds_to_samples(self.release);

        let timed = attack + decay + release;
        ensure!(
            timed <= total_samples,
            EnvelopeTooLongSnafu {
                attack: self.attack,
                decay: self.decay,
                release: self.release,
                total,
            }
        );

        Ok(EnvelopeSegments {
            attack,
            decay,
            sustain: total_samples - timed,
            release,
        })
    }

    /// Render the gain curve for a `total` second buffer.
    pub fn render(&self, total: f64, sample_rate: u32) -> Result<Vec<f32>> {
        let segments = self.segments(total, sample_rate)?;
        let mut curve = Vec::with_capacity(segments.total());

        ramp(&mut curve, 0.0, self.peak, segments.attack);
        ramp(&mut curve, self.peak, self.sustain, segments.decay);
        curve.extend(std::iter::repeat_n(self.sustain, segments.sustain));
        ramp(&mut curve, self.sustain, 0.0, segments.release);

        debug_assert_eq!(curve.len(), segments.total());
        Ok(curve)
    }
}

impl Default for EnvelopeShape {
    fn default() -> Self {
        Self::adsr(0.01, 0.1, 0.7, 0.2)
    }
}

/// Append `len` evenly spaced values from `start` to `end`, both inclusive.
fn ramp(out: &mut Vec<f32>, start: f32, end: f32, len: usize) {
    match len {
        0 => {}
        1 => out.push(start),
        _ => {
            let last = (len - 1) as f32;
            out.extend((0..len).map(|i| start + (end - start) * (i as f32 / last)));
        }
    }
}

/// Shape `raw` with `shape` over a `total` second buffer.
///
/// `raw` must already be exactly as long as the envelope.
pub fn apply_envelope(
    mut raw: Vec<f32>,
    shape: &EnvelopeShape,
    total: f64,
    sample_rate: u32,
) -> Result<Vec<f32>> {
    let curve = shape.render(total, sample_rate)?;
    ensure!(
        raw.len() == curve.len(),
        EnvelopeLengthSnafu {
            expected: curve.len(),
            actual: raw.len(),
        }
    );
    multiply_in_place(&mut raw, &curve);
    Ok(raw)
}
