//! Terminal keyboard as a message source.

use std::io::{self, stdout};
use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags,
    PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::{execute, terminal};
use log::{debug, warn};

use tonebox::synth::{MessageReceiver, SynthMessage};

/// Polls crossterm without blocking.
///
/// Where the terminal supports it, key release events are switched on so
/// key-ups reach the session and auto-repeat is not mistaken for a new press.
pub struct KeyboardInput {
    enhanced: bool,
}

impl KeyboardInput {
    pub fn new() -> io::Result<Self> {
        let enhanced = terminal::supports_keyboard_enhancement().unwrap_or(false);
        if enhanced {
            execute!(
                stdout(),
                PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
            )?;
        }
        debug!("keyboard enhancement: {enhanced}");
        Ok(Self { enhanced })
    }
}

impl Drop for KeyboardInput {
    fn drop(&mut self) {
        if self.enhanced {
            let _ = execute!(stdout(), PopKeyboardEnhancementFlags);
        }
    }
}

impl MessageReceiver for KeyboardInput {
    fn pop(&mut self) -> Option<SynthMessage> {
        loop {
            match event::poll(Duration::ZERO) {
                Ok(true) => {}
                Ok(false) => return None,
                Err(err) => {
                    warn!("input poll failed: {err}");
                    return Some(SynthMessage::Quit);
                }
            }

            match event::read() {
                Ok(Event::Key(key)) => {
                    if let Some(message) = translate(key) {
                        return Some(message);
                    }
                }
                Ok(_) => {}
                Err(err) => {
                    warn!("input read failed: {err}");
                    return Some(SynthMessage::Quit);
                }
            }
        }
    }

    fn wait(&mut self, timeout: Duration) {
        let _ = event::poll(timeout);
    }
}

fn translate(key: KeyEvent) -> Option<SynthMessage> {
    match (key.code, key.kind) {
        (KeyCode::Esc, KeyEventKind::Press) => Some(SynthMessage::Quit),
        (KeyCode::Char('c'), KeyEventKind::Press)
            if key.modifiers.contains(KeyModifiers::CONTROL) =>
        {
            Some(SynthMessage::Quit)
        }
        (KeyCode::Char('q'), KeyEventKind::Press) => Some(SynthMessage::Quit),
        (KeyCode::Char(c), KeyEventKind::Press) => Some(SynthMessage::KeyDown(c.to_ascii_lowercase())),
        (KeyCode::Char(c), KeyEventKind::Release) => Some(SynthMessage::KeyUp(c.to_ascii_lowercase())),
        _ => None,
    }
}
