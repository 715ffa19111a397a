pub mod config;
pub mod dsp; // Note rendering and effect primitives
pub mod error;
pub mod io;
pub mod synth; // Effect modes, voice mixing and the play loop

pub use config::SynthConfig;
pub use error::{Error, Result};

/// Output sample rate every session renders at by default.
pub const SAMPLE_RATE: u32 = 44_100;
/// Length of one note in seconds, before any echo extension.
pub const DURATION: f64 = 1.0;
