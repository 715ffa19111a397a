//! Signal multiplication primitives.

/*
Signal Multiplication
=====================

Two operations cover every gain change in this crate:

  envelope      A gain curve (0.0 to peak) multiplied sample-by-sample into a
                rendered waveform. See `envelope::apply_envelope`.

  decay         A constant gain < 1.0 applied to a whole buffer. Echo repeats
                are built by applying the same decay to the previous repeat.

For each sample index i:

    output[i] = signal[i] × curve[i]          (envelope)
    output[i] = signal[i] × gain              (decay)

Every halving of amplitude is roughly -6 dB, so an echo with decay 0.5 drops
6 dB per repeat.
*/

/// Scale `signal` by a same-length gain curve.
#[inline]
pub fn multiply_in_place(signal: &mut [f32], curve: &[f32]) {
    debug_assert_eq!(signal.len(), curve.len());

    signal.iter_mut().zip(curve).for_each(|(s, &g)| *s *= g);
}

/// Scale the whole of `signal` by one gain.
#[inline]
pub fn apply_gain(signal: &mut [f32], gain: f32) {
    signal.iter_mut().for_each(|s| *s *= gain);
}
