/// Fixed-length ring buffer with independent read and write cursors.
///
/// Both cursors start at offset 0 and wrap at the line length, so a sample
/// written at step `n` is read back at step `n + len`. Until the line has gone
/// round once every read returns the initial silence.
pub struct DelayLine {
    buffer: Vec<f32>,
    read_pos: usize,
    write_pos: usize,
}

impl DelayLine {
    /// A zero-sample delay is clamped to one sample.
    pub fn new(delay_samples: usize) -> Self {
        Self {
            buffer: vec![0.0; delay_samples.max(1)],
            read_pos: 0,
            write_pos: 0,
        }
    }

    /// Sample under the read cursor.
    #[inline]
    pub fn read(&self) -> f32 {
        self.buffer[self.read_pos]
    }

    /// Overwrite the cell under the write cursor.
    #[inline]
    pub fn write(&mut self, sample: f32) {
        self.buffer[self.write_pos] = sample;
    }

    /// Move both cursors one step forward, each wrapping on its own.
    #[inline]
    pub fn advance(&mut self) {
        self.read_pos = (self.read_pos + 1) % self.buffer.len();
        self.write_pos = (self.write_pos + 1) % self.buffer.len();
    }

    pub fn reset(&mut self) {
        self.buffer.fill(0.0);
        self.read_pos = 0;
        self.write_pos = 0;
    }
}
