//! Error type shared by the synthesis primitives and the play session.

use snafu::Snafu;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("frequency must be a positive number of Hz, got {frequency}"))]
    InvalidFrequency { frequency: f32 },

    #[snafu(display("duration must be a positive number of seconds, got {duration}"))]
    InvalidDuration { duration: f64 },

    #[snafu(display("sample rate must be non-zero"))]
    InvalidSampleRate { sample_rate: u32 },

    #[snafu(display(
        "envelope segments (attack {attack}s + decay {decay}s + release {release}s) do not fit in {total}s"
    ))]
    EnvelopeTooLong {
        attack: f64,
        decay: f64,
        release: f64,
        total: f64,
    },

    #[snafu(display("envelope {stage} level must lie in [0, 1], got {level}"))]
    EnvelopeLevel { stage: &'static str, level: f32 },

    #[snafu(display("waveform has {actual} samples but the envelope spans {expected}"))]
    EnvelopeLength { expected: usize, actual: usize },

    #[snafu(display(
        "{frequency} Hz is too high for a karplus-strong delay line at {sample_rate} Hz"
    ))]
    FrequencyAboveSampleRate { frequency: f32, sample_rate: u32 },

    #[snafu(display("reverb delay of {delay_ms}ms is shorter than one sample at {sample_rate} Hz"))]
    DelayTooShort { delay_ms: f32, sample_rate: u32 },

    #[snafu(display("note {note} rendered {actual} samples, expected {expected}"))]
    LengthClassMismatch {
        note: char,
        expected: usize,
        actual: usize,
    },

    #[snafu(display("unknown effect {name:?}"))]
    UnknownEffect { name: String },

    #[snafu(display("audio output failed"))]
    Playback {
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

impl Error {
    /// Wrap a failure reported by an output device.
    pub fn playback(source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Error::Playback {
            source: source.into(),
        }
    }
}
