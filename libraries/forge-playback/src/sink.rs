//! Platform audio sink trait
//!
//! Abstracts the host's one-shot playback primitive. The platforms this
//! engine targets can only create a source, start it at an offset, and
//! stop it; pause and resume are emulated above this seam by the
//! transport.

use crate::error::Result;
use forge_core::AudioBuffer;

/// Platform-agnostic audio sink
///
/// Implementors bind a buffer to a fresh one-shot source per `start`
/// call. The transport always calls [`stop`](AudioSink::stop) before
/// [`start`](AudioSink::start), so at most one source is live at a time;
/// implementations should still treat `start` on an active sink as
/// replace, not overlay.
pub trait AudioSink: Send {
    /// Start a new one-shot source playing `buffer` from `offset` seconds
    ///
    /// # Errors
    /// Returns an error if the platform cannot create or start a source
    fn start(&mut self, buffer: &AudioBuffer, offset: f64) -> Result<()>;

    /// Stop the active source, if any
    ///
    /// Stopping an idle sink is a no-op.
    ///
    /// # Errors
    /// Returns an error if the platform fails to tear the source down
    fn stop(&mut self) -> Result<()>;
}

/// Dummy sink for unit tests
///
/// Tracks only whether a source is active.
#[cfg(test)]
pub(crate) struct NullSink {
    active: bool,
}

#[cfg(test)]
impl NullSink {
    pub(crate) fn new() -> Self {
        Self { active: false }
    }
}

#[cfg(test)]
impl AudioSink for NullSink {
    fn start(&mut self, _buffer: &AudioBuffer, _offset: f64) -> Result<()> {
        self.active = true;
        Ok(())
    }

    fn stop(&mut self) -> Result<()> {
        self.active = false;
        Ok(())
    }
}
