//! Signal summing and dry/wet blending primitives.

/*
Signal Mixing
=============

  summing       Adding signals at equal levels (no weighting). This is how
                held notes are combined into one tick buffer. Two notes that
                each peak at 1.0 can sum to 2.0 - the mixer never normalizes or
                clips, the output device clamps if it has to.

                    Note A:  [ 1.0,  0.5, -0.5, -1.0]
                    Note B:  [ 1.0,  0.8,  0.2, -0.5]
                    Sum:     [ 2.0,  1.3, -0.3, -1.5]

  dry/wet       Weighted blend of the unprocessed (dry) and delayed (wet)
                signal. The weights always sum to 1.0:

                    output = dry × (1 - mix) + wet × mix

                mix = 0.0 passes the dry signal through untouched.
*/

/// Add `voice` into `mix`, sample by sample.
///
/// No headroom is reserved: eight full-scale notes sum to roughly 8.0.
#[inline]
pub fn sum_in_place(mix: &mut [f32], voice: &[f32]) {
    debug_assert_eq!(mix.len(), voice.len(), "voices must share a length class");

    mix.iter_mut().zip(voice).for_each(|(out, &v)| *out += v);
}

/// `dry · (1 - amount) + wet · amount`
///
/// Used twice per reverb sample: once for the output (amount = wet) and once
/// for what goes back into the delay line (amount = feedback).
#[inline]
pub fn blend_dry_wet(dry: f32, wet: f32, amount: f32) -> f32 {
    dry * (1.0 - amount) + wet * amount
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chord_sum_is_not_normalized() {
        let mut mix = vec![0.0; 2];
        for voice in [[1.0, 0.5], [1.0, 0.25], [0.5, -0.75]] {
            sum_in_place(&mut mix, &voice);
        }
        assert_eq!(mix, vec![2.5, 0.0]);
    }

    #[test]
    fn blend_endpoints_select_one_side() {
        assert_eq!(blend_dry_wet(0.8, -0.2, 0.0), 0.8);
        assert_eq!(blend_dry_wet(0.8, -0.2, 1.0), -0.2);
        assert_eq!(blend_dry_wet(1.0, 0.0, 0.5), 0.5);
    }
}
