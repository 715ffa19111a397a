use std::collections::BTreeSet;

/// Identifier of a playable note: the key that triggers it.
pub type NoteId = char;

/// Notes sounding in the current tick.
///
/// Liveness is edge-triggered and tick-scoped: a key-down adds the note, and
/// the whole set is cleared when the tick ends whether or not the key was
/// released. A held key therefore sounds once per key-down event, never
/// continuously. Key-ups are accepted but change nothing.
///
/// Iteration is in key order so the mixer always sums voices the same way.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct VoiceSet {
    held: BTreeSet<NoteId>,
}

impl VoiceSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the note was not already sounding this tick.
    pub fn key_down(&mut self, note: NoteId) -> bool {
        self.held.insert(note)
    }

    pub fn key_up(&mut self, _note: NoteId) {
        // Voices only live until the end of the tick.
    }

    /// Drop every voice; called once each tick has been played.
    pub fn end_tick(&mut self) {
        self.held.clear();
    }

    pub fn contains(&self, note: NoteId) -> bool {
        self.held.contains(&note)
    }

    pub fn iter(&self) -> impl Iterator<Item = NoteId> + '_ {
        self.held.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.held.len()
    }

    pub fn is_empty(&self) -> bool {
        self.held.is_empty()
    }
}
