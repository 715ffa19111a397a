//! The play loop.
//!
//! One session = one effect mode. The note table is rendered up front, then the
//! loop alternates between draining input and playing one tick:
//!
//! ```text
//!   ┌─→ drain events (non-blocking) ──→ Quit? ──→ done
//!   │         │
//!   │         ↓
//!   │   any voices? ── no ──→ wait for input ──┐
//!   │         │ yes                            │
//!   │         ↓                                │
//!   │   mix ──→ play (blocks until finished)   │
//!   │         │                                │
//!   │         ↓                                │
//!   └── clear voices ←─────────────────────────┘
//! ```
//!
//! Rendering and playback never overlap, so a key pressed while a tick is
//! playing is only heard in the next tick.

use std::ops::ControlFlow;
use std::time::Duration;

use log::{info, trace, warn};

use crate::config::SynthConfig;
use crate::dsp::oscillator::generate_sine_pcm16;
use crate::dsp::spectrum::peak_level;
use crate::error::Result;
use crate::io::AudioSink;
use crate::synth::effect::EffectMode;
use crate::synth::message::{MessageReceiver, SynthMessage};
use crate::synth::poly::VoiceMixer;
use crate::synth::table::{NotePrecomputeTable, NoteTable};
use crate::synth::voice::{NoteId, VoiceSet};

/// How long to wait for input when a tick has nothing to play.
pub const IDLE_WAIT: Duration = Duration::from_millis(16);

/// What one tick played.
#[derive(Debug, Clone, PartialEq)]
pub struct TickReport {
    /// 1-based tick number
    pub tick: u64,
    /// Notes mixed into the tick, in key order
    pub notes: Vec<NoteId>,
    /// Largest absolute sample of the mix
    pub peak: f32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub ticks: u64,
    pub voices: usize,
}

pub struct PlaySession {
    mixer: VoiceMixer,
    voices: VoiceSet,
    sample_rate: u32,
    ticks: u64,
    voices_played: usize,
}

impl PlaySession {
    /// Render every note of `notes` under `mode` and get ready to play.
    pub fn new(mode: EffectMode, notes: &NoteTable, config: &SynthConfig) -> Result<Self> {
        Ok(Self::from_table(NotePrecomputeTable::build(
            mode, notes, config,
        )?))
    }

    pub fn from_table(table: NotePrecomputeTable) -> Self {
        Self {
            sample_rate: table.sample_rate(),
            mixer: VoiceMixer::new(table),
            voices: VoiceSet::new(),
            ticks: 0,
            voices_played: 0,
        }
    }

    pub fn mode(&self) -> EffectMode {
        self.mixer.table().mode()
    }

    pub fn voices(&self) -> &VoiceSet {
        &self.voices
    }

    /// Apply one input event.
    pub fn handle(&mut self, message: SynthMessage) -> ControlFlow<()> {
        match message {
            SynthMessage::KeyDown(note) if self.mixer.table().contains(note) => {
                self.voices.key_down(note);
            }
            SynthMessage::KeyDown(note) => {
                trace!("ignoring unmapped key {note:?}");
            }
            SynthMessage::KeyUp(note) => {
                self.voices.key_up(note);
            }
            SynthMessage::Quit => return ControlFlow::Break(()),
        }
        ControlFlow::Continue(())
    }

    /// Mix the held voices and play them, then clear the voice set.
    ///
    /// Plays a silent buffer if no voice is held.
    pub fn tick<S: AudioSink>(&mut self, sink: &mut S) -> Result<TickReport> {
        self.tick_with(sink, |_, _| {})
    }

    fn tick_with<S, F>(&mut self, sink: &mut S, mut on_tick: F) -> Result<TickReport>
    where
        S: AudioSink,
        F: FnMut(&TickReport, &[f32]),
    {
        let mix = self.mixer.mix(&self.voices);
        self.ticks += 1;
        let report = TickReport {
            tick: self.ticks,
            notes: self.voices.iter().collect(),
            peak: peak_level(&mix),
        };
        trace!("tick {}: {:?} peak {:.3}", report.tick, report.notes, report.peak);
        on_tick(&report, &mix);

        if let Err(err) = sink.play(&mix, self.sample_rate) {
            warn!("playback failed on tick {}: {err}", report.tick);
            return Err(err);
        }

        self.voices_played += report.notes.len();
        self.voices.end_tick();
        Ok(report)
    }

    /// Run until a [`SynthMessage::Quit`] arrives.
    pub fn run<R, S>(&mut self, rx: &mut R, sink: &mut S) -> Result<SessionSummary>
    where
        R: MessageReceiver,
        S: AudioSink,
    {
        self.run_with(rx, sink, |_, _| {})
    }

    /// Like [`run`](Self::run), calling `on_tick` with each mix right before it
    /// is handed to the sink.
    pub fn run_with<R, S, F>(&mut self, rx: &mut R, sink: &mut S, mut on_tick: F) -> Result<SessionSummary>
    where
        R: MessageReceiver,
        S: AudioSink,
        F: FnMut(&TickReport, &[f32]),
    {
        info!("session started: {}", self.mode());

        'session: loop {
            while let Some(message) = rx.pop() {
                if self.handle(message).is_break() {
                    break 'session;
                }
            }

            if self.voices.is_empty() {
                rx.wait(IDLE_WAIT);
                continue;
            }

            self.tick_with(sink, &mut on_tick)?;
        }

        let summary = SessionSummary {
            ticks: self.ticks,
            voices: self.voices_played,
        };
        info!(
            "session ended after {} ticks, {} voices",
            summary.ticks, summary.voices
        );
        Ok(summary)
    }
}

/// Play every note of `notes` once, in order, as a quantized pure tone.
pub fn play_scale<S: AudioSink>(notes: &NoteTable, config: &SynthConfig, sink: &mut S) -> Result<()> {
    for note in notes.iter() {
        let samples = generate_sine_pcm16(note.frequency, config.duration, config.sample_rate)?;
        info!("playing {} ({} Hz)", note.name, note.frequency);
        sink.play_pcm16(&samples, config.sample_rate)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::RecordingSink;

    fn session(mode: EffectMode) -> PlaySession {
        PlaySession::new(mode, &NoteTable::default(), &SynthConfig::default()).unwrap()
    }

    #[test]
    fn quit_breaks() {
        let mut session = session(EffectMode::Plain);
        assert!(session.handle(SynthMessage::Quit).is_break());
        assert!(session.handle(SynthMessage::KeyDown('a')).is_continue());
    }

    #[test]
    fn unmapped_keys_are_ignored() {
        let mut session = session(EffectMode::Plain);
        session.handle(SynthMessage::KeyDown('z'));
        assert!(session.voices().is_empty());
    }

    #[test]
    fn tick_clears_voices() {
        let mut session = session(EffectMode::Plain);
        let mut sink = RecordingSink::new();
        session.handle(SynthMessage::KeyDown('a'));
        session.handle(SynthMessage::KeyDown('d'));

        let report = session.tick(&mut sink).unwrap();

        assert_eq!(report.tick, 1);
        assert_eq!(report.notes, vec!['a', 'd']);
        assert!(session.voices().is_empty());
        assert_eq!(sink.buffers[0].len(), 44_100);
        assert_eq!(sink.sample_rate, Some(44_100));
    }

    #[test]
    fn empty_tick_plays_silence() {
        let mut session = session(EffectMode::Echo);
        let mut sink = RecordingSink::new();
        let report = session.tick(&mut sink).unwrap();

        assert!(report.notes.is_empty());
        assert_eq!(report.peak, 0.0);
        assert_eq!(sink.buffers[0].len(), 132_300);
    }

    #[test]
    fn scale_plays_each_note_in_order() {
        let notes = NoteTable::new([('a', "A4", 441.0), ('s', "B4", 493.88)]);
        let config = SynthConfig::default();
        let mut sink = RecordingSink::new();

        play_scale(&notes, &config, &mut sink).unwrap();

        assert_eq!(sink.buffers.len(), 2);
        assert!(sink.buffers.iter().all(|b| b.len() == 44_100));
        assert_eq!(sink.buffers[0][0], 0.0);
        assert!(sink.buffers[0][25] > 0.99);
    }
}
