/// Audio-related types
use serde::{Deserialize, Serialize};

/// Sample rate in Hz
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SampleRate(pub u32);

impl SampleRate {
    /// Rate of the generated podcast PCM stream
    pub const PODCAST: Self = Self(24_000);
    /// CD quality, used by export tests
    pub const CD_QUALITY: Self = Self(44_100);

    /// Create a new sample rate
    #[must_use]
    pub fn new(hz: u32) -> Self {
        Self(hz)
    }

    /// Get the sample rate as Hz
    pub fn as_hz(&self) -> u32 {
        self.0
    }
}

/// Audio buffer containing decoded samples
///
/// Samples are stored as f32 in the range [-1.0, 1.0], one `Vec` per
/// channel (planar layout). Buffers are held in memory only and never
/// persisted; the textual podcast script is what gets saved.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioBuffer {
    /// Per-channel sample data
    pub channel_data: Vec<Vec<f32>>,

    /// Sample rate
    pub sample_rate: SampleRate,
}

impl AudioBuffer {
    /// Create a new audio buffer
    pub fn new(channel_data: Vec<Vec<f32>>, sample_rate: SampleRate) -> Self {
        Self {
            channel_data,
            sample_rate,
        }
    }

    /// Get the number of channels
    pub fn channels(&self) -> usize {
        self.channel_data.len()
    }

    /// Get the number of frames (samples per channel)
    pub fn frames(&self) -> usize {
        self.channel_data.first().map_or(0, Vec::len)
    }

    /// Get one channel's samples
    pub fn channel(&self, index: usize) -> Option<&[f32]> {
        self.channel_data.get(index).map(Vec::as_slice)
    }

    /// Get the duration in seconds
    pub fn duration_secs(&self) -> f64 {
        self.frames() as f64 / f64::from(self.sample_rate.as_hz())
    }

    /// Check if the buffer is empty
    pub fn is_empty(&self) -> bool {
        self.frames() == 0
    }
}
