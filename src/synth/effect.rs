//! Effect modes and their render functions.
//!
//! A session picks one [`EffectMode`] up front. The mode decides two things:
//! how each note of the table is rendered, and how long the resulting buffers
//! (and therefore every mixed tick) are.

use std::fmt;
use std::str::FromStr;

use rand::RngCore;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::config::SynthConfig;
use crate::dsp::echo::echo;
use crate::dsp::envelope::apply_envelope;
use crate::dsp::karplus::karplus_strong_with_rng;
use crate::dsp::oscillator::{generate_piano_note, generate_tone};
use crate::dsp::pitch::pitch_shift;
use crate::dsp::reverb::reverb;
use crate::error::{Error, Result};

/// Renders one note at `frequency` under `config`.
pub type RenderFn = fn(f32, &SynthConfig, &mut dyn RngCore) -> Result<Vec<f32>>;

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EffectMode {
    /// Enveloped pure sine
    Plain,
    /// Enveloped harmonic tone, no effect
    Piano,
    /// Plucked string
    Karplus,
    /// Harmonic tone through the feedback delay
    Reverb,
    /// Harmonic tone with decayed repeats appended
    Echo,
    /// Harmonic tone resampled down
    PitchLow,
    /// Harmonic tone resampled up
    PitchHigh,
}

/// Buffer length of a mode, relative to one standard note.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthClass {
    /// `sample_rate × duration`
    Standard,
    /// `factor × sample_rate × duration`
    Extended { factor: usize },
}

impl LengthClass {
    pub fn samples(&self, standard: usize) -> usize {
        match self {
            LengthClass::Standard => standard,
            LengthClass::Extended { factor } => standard * factor,
        }
    }
}

impl EffectMode {
    pub const ALL: [EffectMode; 7] = [
        EffectMode::Plain,
        EffectMode::Piano,
        EffectMode::Karplus,
        EffectMode::Reverb,
        EffectMode::Echo,
        EffectMode::PitchLow,
        EffectMode::PitchHigh,
    ];

    /// Human-readable name, as shown in the effect menu.
    pub fn label(&self) -> &'static str {
        match self {
            EffectMode::Plain => "Regular",
            EffectMode::Piano => "Piano",
            EffectMode::Karplus => "Karplus Strong",
            EffectMode::Reverb => "Reverb",
            EffectMode::Echo => "Echo",
            EffectMode::PitchLow => "Pitch Down",
            EffectMode::PitchHigh => "Pitch Up",
        }
    }

    /// The function every note of the session is rendered with.
    pub fn renderer(&self) -> RenderFn {
        match self {
            EffectMode::Plain => render_plain,
            EffectMode::Piano => render_piano,
            EffectMode::Karplus => render_karplus,
            EffectMode::Reverb => render_reverb,
            EffectMode::Echo => render_echo,
            EffectMode::PitchLow => render_pitch_low,
            EffectMode::PitchHigh => render_pitch_high,
        }
    }

    pub fn length_class(&self, config: &SynthConfig) -> LengthClass {
        match self {
            EffectMode::Echo => LengthClass::Extended {
                factor: config.echo.length_factor(),
            },
            _ => LengthClass::Standard,
        }
    }
}

fn render_plain(frequency: f32, config: &SynthConfig, _rng: &mut dyn RngCore) -> Result<Vec<f32>> {
    let tone = generate_tone(frequency, config.duration, config.sample_rate)?;
    apply_envelope(
        tone,
        &config.plain_envelope,
        config.duration,
        config.sample_rate,
    )
}

fn piano(frequency: f32, config: &SynthConfig) -> Result<Vec<f32>> {
    generate_piano_note(
        frequency,
        config.duration,
        config.sample_rate,
        &config.piano_envelope,
    )
}

fn render_piano(frequency: f32, config: &SynthConfig, _rng: &mut dyn RngCore) -> Result<Vec<f32>> {
    piano(frequency, config)
}

fn render_karplus(frequency: f32, config: &SynthConfig, rng: &mut dyn RngCore) -> Result<Vec<f32>> {
    karplus_strong_with_rng(frequency, config.duration, config.sample_rate, rng)
}

fn render_reverb(frequency: f32, config: &SynthConfig, _rng: &mut dyn RngCore) -> Result<Vec<f32>> {
    reverb(&piano(frequency, config)?, &config.reverb, config.sample_rate)
}

fn render_echo(frequency: f32, config: &SynthConfig, _rng: &mut dyn RngCore) -> Result<Vec<f32>> {
    Ok(echo(&piano(frequency, config)?, &config.echo))
}

fn render_pitch_low(
    frequency: f32,
    config: &SynthConfig,
    _rng: &mut dyn RngCore,
) -> Result<Vec<f32>> {
    Ok(pitch_shift(&piano(frequency, config)?, config.pitch_low))
}

fn render_pitch_high(
    frequency: f32,
    config: &SynthConfig,
    _rng: &mut dyn RngCore,
) -> Result<Vec<f32>> {
    Ok(pitch_shift(&piano(frequency, config)?, config.pitch_high))
}

impl fmt::Display for EffectMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for EffectMode {
    type Err = Error;

    /// Accepts kebab-case names (`pitch-low`) as well as the menu labels
    /// (`"Karplus Strong"`), case-insensitively.
    fn from_str(name: &str) -> Result<Self> {
        let key: String = name
            .trim()
            .chars()
            .map(|c| match c {
                ' ' | '_' => '-',
                c => c.to_ascii_lowercase(),
            })
            .collect();

        match key.as_str() {
            "plain" | "regular" | "tone" => Ok(EffectMode::Plain),
            "piano" => Ok(EffectMode::Piano),
            "karplus" | "karplus-strong" | "pluck" => Ok(EffectMode::Karplus),
            "reverb" => Ok(EffectMode::Reverb),
            "echo" => Ok(EffectMode::Echo),
            "pitch-low" | "pitch-down" | "low" => Ok(EffectMode::PitchLow),
            "pitch-high" | "pitch-up" | "high" => Ok(EffectMode::PitchHigh),
            _ => Err(Error::UnknownEffect {
                name: name.to_owned(),
            }),
        }
    }
}
