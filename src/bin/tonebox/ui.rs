//! Status panel - shows the effect, the key map, and what the last tick played

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use tonebox::dsp::spectrum::dominant_frequency;
use tonebox::synth::{EffectMode, NoteId, NoteTable, TickReport};

/// What the panel knows about the last tick
struct LastTick {
    report: TickReport,
    seconds: f32,
    pitch: Option<f32>,
}

pub struct StatusPanel {
    mode: EffectMode,
    sample_rate: u32,
    keys: Vec<(NoteId, String, f32)>,
    last: Option<LastTick>,
}

impl StatusPanel {
    pub fn new(mode: EffectMode, notes: &NoteTable, sample_rate: u32) -> Self {
        Self {
            mode,
            sample_rate,
            keys: notes
                .iter()
                .map(|note| (note.key, note.name.clone(), note.frequency))
                .collect(),
            last: None,
        }
    }

    /// Remember a tick that is about to play.
    pub fn record(&mut self, report: &TickReport, mix: &[f32]) {
        self.last = Some(LastTick {
            report: report.clone(),
            seconds: mix.len() as f32 / self.sample_rate as f32,
            pitch: dominant_frequency(mix, self.sample_rate),
        });
    }

    pub fn render(&self, frame: &mut Frame) {
        let [header, keys, tick, help] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(self.keys.len() as u16 + 2),
            Constraint::Length(5),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        self.render_header(frame, header);
        self.render_keys(frame, keys);
        self.render_tick(frame, tick);

        let hint = Line::from(Span::styled(
            " press a mapped key to play  |  q / Esc quits",
            Style::default().fg(Color::DarkGray),
        ));
        frame.render_widget(Paragraph::new(hint), help);
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let line = Line::from(vec![
            Span::styled(
                format!(" Effect: {}  ", self.mode.label()),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("{:.1}kHz", self.sample_rate as f32 / 1000.0),
                Style::default().fg(Color::DarkGray),
            ),
        ]);
        let block = Block::default().title(" tonebox ").borders(Borders::ALL);
        frame.render_widget(Paragraph::new(line).block(block), area);
    }

    fn render_keys(&self, frame: &mut Frame, area: Rect) {
        let held: &[NoteId] = self
            .last
            .as_ref()
            .map(|last| last.report.notes.as_slice())
            .unwrap_or(&[]);

        let lines: Vec<Line> = self
            .keys
            .iter()
            .map(|(key, name, frequency)| {
                let style = if held.contains(key) {
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                Line::from(Span::styled(
                    format!(" [{key}]  {name:<4} {frequency:>8.2} Hz"),
                    style,
                ))
            })
            .collect();

        let block = Block::default().title(" keys ").borders(Borders::ALL);
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }

    fn render_tick(&self, frame: &mut Frame, area: Rect) {
        let lines = match &self.last {
            None => vec![Line::from(" waiting for input")],
            Some(last) => {
                let notes: String = last.report.notes.iter().collect();
                let pitch = match last.pitch {
                    Some(hz) => format!("{hz:.1} Hz"),
                    None => "-".to_string(),
                };
                let peak_color = if last.report.peak > 1.0 {
                    Color::Red
                } else {
                    Color::Green
                };
                vec![
                    Line::from(format!(
                        " tick {}: [{notes}]  {:.2}s",
                        last.report.tick, last.seconds
                    )),
                    Line::from(vec![
                        Span::raw(" peak "),
                        Span::styled(
                            format!("{:.3}", last.report.peak),
                            Style::default().fg(peak_color),
                        ),
                    ]),
                    Line::from(format!(" dominant {pitch}")),
                ]
            }
        };

        let block = Block::default().title(" last tick ").borders(Borders::ALL);
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}
