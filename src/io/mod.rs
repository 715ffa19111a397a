// Purpose - external interfaces: where finished buffers go

use crate::error::Result;

/// Output device contract.
///
/// `play` must not return until the buffer has finished playing: the session
/// renders the next tick only after the previous one is done. Samples arrive
/// unclipped; clamping to the device range is the sink's job.
pub trait AudioSink {
    fn play(&mut self, samples: &[f32], sample_rate: u32) -> Result<()>;

    /// Play 16-bit PCM, scaled to the float range.
    fn play_pcm16(&mut self, samples: &[i16], sample_rate: u32) -> Result<()> {
        let samples: Vec<f32> = samples
            .iter()
            .map(|&s| f32::from(s) / 32768.0)
            .collect();
        self.play(&samples, sample_rate)
    }
}

/// Sink that keeps every buffer it is handed, for offline rendering and tests.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub buffers: Vec<Vec<f32>>,
    pub sample_rate: Option<u32>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded buffers back to back.
    pub fn concatenated(&self) -> Vec<f32> {
        self.buffers.iter().flatten().copied().collect()
    }
}

impl AudioSink for RecordingSink {
    fn play(&mut self, samples: &[f32], sample_rate: u32) -> Result<()> {
        self.buffers.push(samples.to_vec());
        self.sample_rate = Some(sample_rate);
        Ok(())
    }
}
