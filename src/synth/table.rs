//! Key → frequency mapping and the per-session table of rendered notes.

use std::collections::BTreeMap;

use log::{debug, info};
use rand::{rngs::StdRng, SeedableRng};
use snafu::ensure;

use crate::config::SynthConfig;
use crate::error::{LengthClassMismatchSnafu, Result};
use crate::synth::effect::EffectMode;
use crate::synth::voice::NoteId;

/// A4 to A5 on the home row.
pub const DEFAULT_NOTES: [(NoteId, &str, f32); 8] = [
    ('a', "A4", 440.00),
    ('s', "B4", 493.88),
    ('d', "C5", 523.25),
    ('f', "D5", 587.33),
    ('g', "E5", 659.25),
    ('h', "F5", 698.46),
    ('j', "G5", 783.99),
    ('k', "A5", 880.00),
];

#[derive(Debug, Clone, PartialEq)]
pub struct NoteEntry {
    pub key: NoteId,
    pub name: String,
    pub frequency: f32,
}

/// Immutable mapping from keys to note frequencies, in playing order.
#[derive(Debug, Clone, PartialEq)]
pub struct NoteTable {
    notes: Vec<NoteEntry>,
}

impl NoteTable {
    /// Later entries for the same key replace earlier ones.
    pub fn new<N: Into<String>>(notes: impl IntoIterator<Item = (NoteId, N, f32)>) -> Self {
        let mut table = Self { notes: Vec::new() };
        for (key, name, frequency) in notes {
            let entry = NoteEntry {
                key,
                name: name.into(),
                frequency,
            };
            match table.notes.iter_mut().find(|n| n.key == key) {
                Some(existing) => *existing = entry,
                None => table.notes.push(entry),
            }
        }
        table
    }

    /// Frequency for `key`, `None` for keys that play nothing.
    pub fn frequency(&self, key: NoteId) -> Option<f32> {
        self.get(key).map(|n| n.frequency)
    }

    pub fn get(&self, key: NoteId) -> Option<&NoteEntry> {
        self.notes.iter().find(|n| n.key == key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &NoteEntry> {
        self.notes.iter()
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}

impl Default for NoteTable {
    fn default() -> Self {
        Self::new(DEFAULT_NOTES)
    }
}

/// Every note of a [`NoteTable`] rendered under one effect mode.
///
/// Built once before the session starts taking input and never modified
/// afterwards. All buffers share the mode's length class.
#[derive(Debug, Clone)]
pub struct NotePrecomputeTable {
    mode: EffectMode,
    buffer_len: usize,
    sample_rate: u32,
    buffers: BTreeMap<NoteId, Vec<f32>>,
}

impl NotePrecomputeTable {
    /// Render every note. Fails on the first invalid parameter or frequency.
    pub fn build(mode: EffectMode, notes: &NoteTable, config: &SynthConfig) -> Result<Self> {
        config.validate()?;
        if mode == EffectMode::Reverb {
            config.reverb.delay_samples(config.sample_rate)?;
        }
        let buffer_len = mode
            .length_class(config)
            .samples(config.standard_len()?);

        let mut rng = match config.noise_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };
        let render = mode.renderer();

        let mut buffers = BTreeMap::new();
        for note in notes.iter() {
            let buffer = render(note.frequency, config, &mut rng)?;
            ensure!(
                buffer.len() == buffer_len,
                LengthClassMismatchSnafu {
                    note: note.key,
                    expected: buffer_len,
                    actual: buffer.len(),
                }
            );
            debug!(
                "rendered {} ({} Hz) on '{}': {} samples",
                note.name,
                note.frequency,
                note.key,
                buffer.len()
            );
            buffers.insert(note.key, buffer);
        }

        info!(
            "precomputed {} notes for {} ({} samples each)",
            buffers.len(),
            mode,
            buffer_len
        );

        Ok(Self {
            mode,
            buffer_len,
            sample_rate: config.sample_rate,
            buffers,
        })
    }

    pub fn get(&self, note: NoteId) -> Option<&[f32]> {
        self.buffers.get(&note).map(Vec::as_slice)
    }

    pub fn contains(&self, note: NoteId) -> bool {
        self.buffers.contains_key(&note)
    }

    pub fn mode(&self) -> EffectMode {
        self.mode
    }

    /// Length every buffer in the table (and every mixed tick) has.
    pub fn buffer_len(&self) -> usize {
        self.buffer_len
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn len(&self) -> usize {
        self.buffers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffers.is_empty()
    }
}
