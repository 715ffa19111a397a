//! Dominant frequency estimation.
//!
//! Hann-windowed FFT magnitude peak. Bins below [`MIN_FREQUENCY`] are skipped
//! so a DC offset (which karplus-strong settles into) never wins.

use rustfft::{num_complex::Complex, FftPlanner};

/// Lowest frequency considered a pitch, in Hz.
pub const MIN_FREQUENCY: f32 = 20.0;

/// Frequency of the strongest bin in `buffer`, or `None` for silence.
///
/// Resolution is `sample_rate / buffer.len()`, so a one second buffer gives
/// 1 Hz bins.
pub fn dominant_frequency(buffer: &[f32], sample_rate: u32) -> Option<f32> {
    let len = buffer.len();
    if len < 2 {
        return None;
    }

    let mut planner = FftPlanner::<f32>::new();
    let fft = planner.plan_fft_forward(len);

    let denom = (len - 1) as f32;
    let mut spectrum: Vec<Complex<f32>> = buffer
        .iter()
        .enumerate()
        .map(|(i, &s)| {
            let window = 0.5 * (1.0 - (std::f32::consts::TAU * i as f32 / denom).cos());
            Complex::new(s * window, 0.0)
        })
        .collect();
    fft.process(&mut spectrum);

    let bin_hz = sample_rate as f32 / len as f32;
    let first = (MIN_FREQUENCY / bin_hz).ceil() as usize;

    let (bin, magnitude) = spectrum[..len / 2]
        .iter()
        .enumerate()
        .skip(first)
        .map(|(i, c)| (i, c.norm_sqr()))
        .max_by(|a, b| a.1.total_cmp(&b.1))?;

    (magnitude > f32::EPSILON).then_some(bin as f32 * bin_hz)
}

/// Largest absolute sample value.
pub fn peak_level(buffer: &[f32]) -> f32 {
    buffer.iter().fold(0.0f32, |peak, s| peak.max(s.abs()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dsp::karplus::karplus_strong_with_rng;
    use crate::dsp::oscillator::generate_tone;
    use crate::dsp::pitch::pitch_shift;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn finds_pure_tone() {
        let tone = generate_tone(440.0, 1.0, 44_100).unwrap();
        assert_eq!(dominant_frequency(&tone, 44_100), Some(440.0));
    }

    #[test]
    fn silence_has_no_pitch() {
        assert_eq!(dominant_frequency(&[0.0; 1024], 44_100), None);
        assert_eq!(dominant_frequency(&[], 44_100), None);
    }

    #[test]
    fn pitch_shift_doubles_frequency() {
        let tone = generate_tone(300.0, 1.0, 44_100).unwrap();
        let shifted = pitch_shift(&tone, 2.0);
        let freq = dominant_frequency(&shifted, 44_100).unwrap();
        assert!((freq - 600.0).abs() <= 2.0, "got {freq}");
    }

    #[test]
    fn karplus_pitch_follows_delay_length() {
        let mut rng = StdRng::seed_from_u64(5);
        let pluck = karplus_strong_with_rng(440.0, 1.0, 44_100, &mut rng).unwrap();
        let freq = dominant_frequency(&pluck, 44_100).unwrap();
        // L = 100 samples plus the averaging delay puts the fundamental just under 441 Hz.
        assert!((420.0..=450.0).contains(&freq), "got {freq}");
    }

    #[test]
    fn peak_level_is_absolute() {
        assert_eq!(peak_level(&[0.2, -0.9, 0.5]), 0.9);
    }
}
