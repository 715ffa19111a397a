//! Echo - decayed repetitions appended after the note.
//!
//! The output is the note followed by `repeats` copies, each one the previous
//! copy scaled by `decay`, so repeat `k` sits at `decay^k`. With the defaults
//! (two repeats, decay 0.5) a one second note becomes three seconds long, and
//! every buffer mixed alongside it has to be that long too.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::dsp::amplify::apply_gain;

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EchoParams {
    /// Gain applied to each repeat relative to the one before it
    pub decay: f32,
    /// Number of repeats appended after the original
    pub repeats: usize,
}

impl EchoParams {
    pub fn new(decay: f32, repeats: usize) -> Self {
        Self { decay, repeats }
    }

    /// How many times longer than the input the echoed buffer is.
    pub fn length_factor(&self) -> usize {
        self.repeats + 1
    }
}

impl Default for EchoParams {
    fn default() -> Self {
        Self::new(0.5, 2)
    }
}

pub fn echo(input: &[f32], params: &EchoParams) -> Vec<f32> {
    let len = input.len();
    let mut out = Vec::with_capacity(len * params.length_factor());
    out.extend_from_slice(input);

    for k in 0..params.repeats {
        let start = k * len;
        out.extend_from_within(start..start + len);
        apply_gain(&mut out[start + len..], params.decay);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_echo_triples_length() {
        let input = vec![0.25; 100];
        let out = echo(&input, &EchoParams::default());
        assert_eq!(out.len(), 300);
    }

    #[test]
    fn repeats_decay_geometrically() {
        let input = [1.0, -0.5, 0.25];
        let out = echo(&input, &EchoParams::new(0.5, 3));

        assert_eq!(
            out,
            vec![1.0, -0.5, 0.25, 0.5, -0.25, 0.125, 0.25, -0.125, 0.0625, 0.125, -0.0625, 0.03125]
        );
    }

    #[test]
    fn first_repeat_is_input_times_decay() {
        let input: Vec<f32> = (0..64).map(|i| (i as f32 * 0.3).sin()).collect();
        let params = EchoParams::new(0.3, 2);
        let out = echo(&input, &params);

        for (i, &x) in input.iter().enumerate() {
            assert_eq!(out[input.len() + i], x * 0.3);
        }
    }

    #[test]
    fn zero_repeats_is_identity() {
        let input = [0.1, 0.2, 0.3];
        assert_eq!(echo(&input, &EchoParams::new(0.5, 0)), input.to_vec());
    }

    #[test]
    fn empty_input_stays_empty() {
        assert!(echo(&[], &EchoParams::default()).is_empty());
    }
}
