use crate::dsp::mix::sum_in_place;
use crate::synth::table::NotePrecomputeTable;
use crate::synth::voice::VoiceSet;

/// Sums the precomputed buffers of all held notes into one tick buffer.
pub struct VoiceMixer {
    table: NotePrecomputeTable,
}

impl VoiceMixer {
    pub fn new(table: NotePrecomputeTable) -> Self {
        Self { table }
    }

    /// Render one tick.
    ///
    /// The buffer is as long as the table's length class (extended for echo)
    /// and is plain sample-wise addition: no normalization, no clipping.
    /// Notes missing from the table contribute nothing.
    pub fn mix(&self, voices: &VoiceSet) -> Vec<f32> {
        let mut out = vec![0.0; self.table.buffer_len()];
        for note in voices.iter() {
            if let Some(buffer) = self.table.get(note) {
                sum_in_place(&mut out, buffer);
            }
        }
        out
    }

    pub fn table(&self) -> &NotePrecomputeTable {
        &self.table
    }
}
