//! Note rendering and effect primitives.
//!
//! Everything here is a pure function over whole, fixed-length buffers: a
//! frequency goes in, a finished note comes out, and effects turn one finished
//! buffer into another. The synth layer decides which of them a session uses.

/// Buffer gain primitives.
pub mod amplify;
/// Ring buffer with independent read/write cursors.
pub mod delay;
/// Decayed repetitions appended after a note.
pub mod echo;
/// Fixed-length attack/decay/sustain/release gain curves.
pub mod envelope;
/// Plucked string physical model.
pub mod karplus;
/// Summing and dry/wet blending.
pub mod mix;
/// Sine and harmonic tone generators.
pub mod oscillator;
/// Nearest-index resampling pitch shift.
pub mod pitch;
/// Single-tap feedback delay reverb.
pub mod reverb;
/// FFT pitch and level measurement.
pub mod spectrum;

pub use echo::EchoParams;
pub use envelope::EnvelopeShape;
pub use reverb::ReverbParams;
