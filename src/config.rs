//! Session configuration.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::dsp::oscillator::sample_count;
use crate::dsp::{EchoParams, EnvelopeShape, ReverbParams};
use crate::error::Result;
use crate::{DURATION, SAMPLE_RATE};

/// Everything a session needs to render its notes.
///
/// Built once before the note table is precomputed; nothing here changes while
/// a session is running.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, PartialEq)]
pub struct SynthConfig {
    /// Samples per second
    pub sample_rate: u32,
    /// Note length in seconds, before any echo extension
    pub duration: f64,
    /// Envelope for the pure tone (peak 1.0)
    pub plain_envelope: EnvelopeShape,
    /// Envelope for the harmonic tone (peak 0.5)
    pub piano_envelope: EnvelopeShape,
    pub reverb: ReverbParams,
    pub echo: EchoParams,
    /// Resampling factor for the lowered pitch mode
    pub pitch_low: f32,
    /// Resampling factor for the raised pitch mode
    pub pitch_high: f32,
    /// Fixes the karplus-strong noise burst when set
    pub noise_seed: Option<u64>,
}

impl SynthConfig {
    pub fn new() -> Self {
        Self {
            sample_rate: SAMPLE_RATE,
            duration: DURATION,
            plain_envelope: EnvelopeShape::default(),
            piano_envelope: EnvelopeShape::adsr(0.01, 0.1, 0.35, 0.2).with_peak(0.5),
            reverb: ReverbParams::default(),
            echo: EchoParams::default(),
            pitch_low: 0.5,
            pitch_high: 2.0,
            noise_seed: None,
        }
    }

    pub fn sample_rate(mut self, sample_rate: u32) -> Self {
        self.sample_rate = sample_rate;
        self
    }

    pub fn duration(mut self, duration: f64) -> Self {
        self.duration = duration;
        self
    }

    pub fn plain_envelope(mut self, envelope: EnvelopeShape) -> Self {
        self.plain_envelope = envelope;
        self
    }

    pub fn piano_envelope(mut self, envelope: EnvelopeShape) -> Self {
        self.piano_envelope = envelope;
        self
    }

    pub fn reverb(mut self, reverb: ReverbParams) -> Self {
        self.reverb = reverb;
        self
    }

    pub fn echo(mut self, echo: EchoParams) -> Self {
        self.echo = echo;
        self
    }

    pub fn pitch_factors(mut self, low: f32, high: f32) -> Self {
        self.pitch_low = low;
        self.pitch_high = high;
        self
    }

    pub fn noise_seed(mut self, seed: u64) -> Self {
        self.noise_seed = Some(seed);
        self
    }

    /// Samples in one standard (un-echoed) note.
    pub fn standard_len(&self) -> Result<usize> {
        sample_count(self.duration, self.sample_rate)
    }

    /// Check the parameters every effect mode depends on.
    ///
    /// Frequencies are checked per note when the table is built, effect
    /// parameters only for the mode that uses them.
    pub fn validate(&self) -> Result<()> {
        self.standard_len()?;
        self.plain_envelope.segments(self.duration, self.sample_rate)?;
        self.piano_envelope.segments(self.duration, self.sample_rate)?;
        Ok(())
    }
}

impl Default for SynthConfig {
    fn default() -> Self {
        Self::new()
    }
}
