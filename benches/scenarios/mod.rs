//! Real-world scenario benchmarks.
//!
//! These model what a session actually does: render the whole note table for
//! one effect at startup, then mix chords tick after tick.

mod mix;
mod voices;

pub use mix::bench_mix;
pub use voices::bench_voices;
