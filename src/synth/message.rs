use std::time::Duration;

#[cfg(feature = "rtrb")]
use rtrb::Consumer;

use crate::synth::voice::NoteId;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SynthMessage {
    KeyDown(NoteId),
    KeyUp(NoteId),
    Quit,
}

/// Source of input events for a play session.
pub trait MessageReceiver {
    /// Next pending event, without blocking.
    fn pop(&mut self) -> Option<SynthMessage>;

    /// Block for up to `timeout` until input may be available.
    ///
    /// Called when a tick had nothing to play. Default: return immediately.
    fn wait(&mut self, _timeout: Duration) {}
}

#[cfg(feature = "rtrb")]
impl MessageReceiver for Consumer<SynthMessage> {
    fn pop(&mut self) -> Option<SynthMessage> {
        Consumer::pop(self).ok()
    }

    fn wait(&mut self, timeout: Duration) {
        if self.is_empty() {
            std::thread::sleep(timeout);
        }
    }
}
