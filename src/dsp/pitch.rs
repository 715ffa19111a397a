//! Pitch shift by nearest-index resampling.
//!
//! Output sample `i` is input sample `floor(i · factor)`, or silence when that
//! index falls outside the input. No interpolation, no length change:
//!
//! - `factor < 1.0` stretches the note: lower pitch, the end of the note is cut.
//! - `factor > 1.0` compresses it: higher pitch, silence after the note ends.

pub fn pitch_shift(input: &[f32], factor: f32) -> Vec<f32> {
    let factor = f64::from(factor);
    (0..input.len())
        .map(|i| {
            let source = (i as f64 * factor).floor();
            if source >= 0.0 && source < input.len() as f64 {
                input[source as usize]
            } else {
                0.0
            }
        })
        .collect()
}
