//! Blocking cpal output.
//!
//! The stream runs for the whole session. `play` hands a buffer to the audio
//! callback and sleeps on a condvar until the callback has consumed all of it.

use std::sync::{Arc, Condvar, Mutex, PoisonError};

use color_eyre::eyre::{eyre, Result as EyreResult, WrapErr};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{SampleFormat, SampleRate, Stream};
use log::{error, info};

use tonebox::io::AudioSink;
use tonebox::Error;

struct Playback {
    samples: Vec<f32>,
    pos: usize,
}

/// Buffer being played (if any) and the signal for "buffer finished".
type Shared = Arc<(Mutex<Option<Playback>>, Condvar)>;

pub struct CpalSink {
    _stream: Stream,
    shared: Shared,
    sample_rate: u32,
}

impl CpalSink {
    /// Open the default output device at exactly `sample_rate`.
    pub fn open(sample_rate: u32) -> EyreResult<Self> {
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or_else(|| eyre!("no default output device available"))?;

        let config = device
            .supported_output_configs()
            .wrap_err("failed to query output configs")?
            .filter(|range| range.sample_format() == SampleFormat::F32)
            .find(|range| {
                range.min_sample_rate().0 <= sample_rate && sample_rate <= range.max_sample_rate().0
            })
            .ok_or_else(|| eyre!("output device cannot play f32 samples at {sample_rate} Hz"))?
            .with_sample_rate(SampleRate(sample_rate));

        let channels = config.channels() as usize;
        info!("opened output: {sample_rate} Hz, {channels} channels");

        let shared: Shared = Arc::new((Mutex::new(None), Condvar::new()));
        let callback_shared = shared.clone();

        let stream = device
            .build_output_stream(
                &config.into(),
                move |data: &mut [f32], _| fill(&callback_shared, data, channels),
                |err| error!("audio stream error: {err}"),
                None,
            )
            .wrap_err("failed to build output stream")?;
        stream.play().wrap_err("failed to start output stream")?;

        Ok(Self {
            _stream: stream,
            shared,
            sample_rate,
        })
    }
}

/// Audio callback: copy the pending buffer (mono to all channels), clamped to
/// the device range, then silence.
fn fill(shared: &Shared, data: &mut [f32], channels: usize) {
    let (lock, finished) = &**shared;
    let mut slot = lock.lock().unwrap_or_else(PoisonError::into_inner);

    for frame in data.chunks_mut(channels) {
        let sample = match slot.as_mut() {
            Some(playback) if playback.pos < playback.samples.len() => {
                let s = playback.samples[playback.pos];
                playback.pos += 1;
                s.clamp(-1.0, 1.0)
            }
            _ => 0.0,
        };
        frame.fill(sample);
    }

    let done = matches!(slot.as_ref(), Some(p) if p.pos >= p.samples.len());
    if done {
        *slot = None;
        finished.notify_all();
    }
}

impl AudioSink for CpalSink {
    fn play(&mut self, samples: &[f32], sample_rate: u32) -> tonebox::Result<()> {
        if sample_rate != self.sample_rate {
            return Err(Error::playback(format!(
                "stream runs at {} Hz, buffer is {sample_rate} Hz",
                self.sample_rate
            )));
        }

        let (lock, finished) = &*self.shared;
        let mut slot = lock.lock().unwrap_or_else(PoisonError::into_inner);
        *slot = Some(Playback {
            samples: samples.to_vec(),
            pos: 0,
        });
        while slot.is_some() {
            slot = finished.wait(slot).unwrap_or_else(PoisonError::into_inner);
        }
        Ok(())
    }
}
