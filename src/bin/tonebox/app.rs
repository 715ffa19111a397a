//! Tonebox - application builder and runner

use color_eyre::eyre::{Result as EyreResult, WrapErr};
use log::warn;

use tonebox::synth::{play_scale, EffectMode, NoteTable, PlaySession};
use tonebox::SynthConfig;

use super::audio::CpalSink;
use super::input::KeyboardInput;
use super::ui::StatusPanel;

/// Main application builder
pub struct Tonebox {
    effect: EffectMode,
    notes: NoteTable,
    config: SynthConfig,
}

impl Tonebox {
    pub fn new() -> Self {
        Self {
            effect: EffectMode::Plain,
            notes: NoteTable::default(),
            config: SynthConfig::default(),
        }
    }

    /// Effect applied to every note of the session
    pub fn effect(mut self, effect: EffectMode) -> Self {
        self.effect = effect;
        self
    }

    /// Play each note of the table once as a pure tone, then exit.
    pub fn play_scale(self) -> EyreResult<()> {
        let mut sink = CpalSink::open(self.config.sample_rate)?;
        play_scale(&self.notes, &self.config, &mut sink).wrap_err("scale playback failed")
    }

    /// Run the interactive session (takes over the terminal until quit).
    pub fn run(self) -> EyreResult<()> {
        // Render every note before touching the terminal so a bad config
        // reports cleanly.
        let mut session = PlaySession::new(self.effect, &self.notes, &self.config)
            .wrap_err_with(|| format!("failed to prepare {} notes", self.effect))?;
        let mut sink = CpalSink::open(self.config.sample_rate)?;

        let mut panel = StatusPanel::new(self.effect, &self.notes, self.config.sample_rate);
        let mut terminal = ratatui::init();

        let result = KeyboardInput::new()
            .wrap_err("failed to configure keyboard input")
            .and_then(|mut input| {
                terminal.draw(|frame| panel.render(frame))?;
                session
                    .run_with(&mut input, &mut sink, |report, mix| {
                        panel.record(report, mix);
                        if let Err(err) = terminal.draw(|frame| panel.render(frame)) {
                            warn!("failed to draw status panel: {err}");
                        }
                    })
                    .wrap_err("session failed")
            });

        ratatui::restore();

        let summary = result?;
        println!(
            "{}: {} ticks, {} voices",
            self.effect.label(),
            summary.ticks,
            summary.voices
        );
        Ok(())
    }
}

impl Default for Tonebox {
    fn default() -> Self {
        Self::new()
    }
}
