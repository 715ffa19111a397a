// Purpose: effect selection, note precomputation, polyphonic mixing
// This layer sits above the dsp primitives and drives a play session

pub mod effect;
pub mod message;
pub mod poly;
pub mod session;
pub mod table;
pub mod voice;

pub use effect::{EffectMode, LengthClass};
pub use message::{MessageReceiver, SynthMessage};
pub use poly::VoiceMixer;
pub use session::{play_scale, PlaySession, SessionSummary, TickReport};
pub use table::{NotePrecomputeTable, NoteTable};
pub use voice::{NoteId, VoiceSet};
