//! Transport control - core orchestration
//!
//! Emulates VCR-style play/pause/seek/resume over a platform that only
//! offers "start a one-shot source at offset X" and "stop". Position is
//! never read back from the platform; it is derived from the injected
//! clock: while playing, `position = clock.now() - clock_start`, and
//! `clock_start` is rebased on every start so the arithmetic holds across
//! pauses and seeks.

use crate::{
    clock::{SystemClock, TransportClock},
    error::{PlaybackError, Result},
    events::TransportEvent,
    sink::AudioSink,
    types::TransportState,
};
use forge_core::AudioBuffer;
use tracing::debug;

/// Clock-driven transport over a one-shot audio sink
///
/// Exactly one source is live at any time: every start is preceded by a
/// stop of whatever source came before it. Callers poll [`tick`] once per
/// display frame while playing; the tick detects the natural end of the
/// buffer.
///
/// [`tick`]: Transport::tick
pub struct Transport {
    // State
    state: TransportState,
    buffer: Option<AudioBuffer>,

    // Platform seams
    sink: Box<dyn AudioSink>,
    clock: Box<dyn TransportClock>,

    // Clock arithmetic: frozen offset while not playing, clock origin
    // shifted by that offset while playing
    paused_at_offset: f64,
    clock_start: f64,

    // Event queue for UI synchronization
    pending_events: Vec<TransportEvent>,
}

impl Transport {
    /// Create a transport over the given sink, timed by the system clock
    pub fn new(sink: Box<dyn AudioSink>) -> Self {
        Self::with_clock(sink, Box::new(SystemClock::new()))
    }

    /// Create a transport with an explicit clock
    ///
    /// Tests pass a manual clock and step time deterministically.
    pub fn with_clock(sink: Box<dyn AudioSink>, clock: Box<dyn TransportClock>) -> Self {
        Self {
            state: TransportState::Stopped,
            buffer: None,
            sink,
            clock,
            paused_at_offset: 0.0,
            clock_start: 0.0,
            pending_events: Vec::new(),
        }
    }

    // ===== Loading =====

    /// Load a decoded buffer, replacing any current audio
    ///
    /// Stops playback and rewinds the position to the start.
    ///
    /// # Errors
    /// Returns an error for a buffer with no frames
    pub fn load(&mut self, buffer: AudioBuffer) -> Result<()> {
        if buffer.is_empty() {
            return Err(PlaybackError::EmptyBuffer);
        }
        if self.state == TransportState::Playing {
            self.sink.stop()?;
        }
        let was = self.state;
        self.state = TransportState::Stopped;
        self.paused_at_offset = 0.0;
        debug!(
            "Loaded {:.2}s of audio ({} channel(s) at {} Hz)",
            buffer.duration_secs(),
            buffer.channels(),
            buffer.sample_rate.as_hz()
        );
        self.buffer = Some(buffer);
        if was != TransportState::Stopped {
            self.emit_state_changed(TransportState::Stopped);
        }
        Ok(())
    }

    // ===== Playback Control =====

    /// Start or resume playback from the frozen offset
    ///
    /// Calling `play` while already playing restarts a fresh source at
    /// the current position; the old source is stopped first, so two
    /// sources never overlap.
    ///
    /// # Errors
    /// Returns an error if no audio is loaded or the sink fails
    pub fn play(&mut self) -> Result<()> {
        if self.state == TransportState::Playing {
            self.paused_at_offset = self.position();
        }
        let offset = self.paused_at_offset;
        let Some(buffer) = self.buffer.as_ref() else {
            return Err(PlaybackError::NoAudioLoaded);
        };
        // Tear down whatever source came before; at most one is ever live
        self.sink.stop()?;
        self.sink.start(buffer, offset)?;
        self.clock_start = self.clock.now() - offset;
        if self.state != TransportState::Playing {
            self.state = TransportState::Playing;
            self.emit_state_changed(TransportState::Playing);
        }
        debug!("Playing from {:.3}s", offset);
        Ok(())
    }

    /// Pause playback, freezing the position as the resume point
    ///
    /// The platform has no pause primitive, so the source is stopped and
    /// the elapsed clock time becomes the frozen offset.
    ///
    /// # Errors
    /// Returns an error if the sink fails to stop
    pub fn pause(&mut self) -> Result<()> {
        if self.state != TransportState::Playing {
            return Ok(());
        }
        let elapsed = self.clock.now() - self.clock_start;
        self.paused_at_offset = elapsed.clamp(0.0, self.duration());
        self.sink.stop()?;
        self.state = TransportState::Paused;
        self.emit_state_changed(TransportState::Paused);
        debug!("Paused at {:.3}s", self.paused_at_offset);
        Ok(())
    }

    /// Stop playback and rewind to the start
    ///
    /// # Errors
    /// Returns an error if the sink fails to stop
    pub fn stop(&mut self) -> Result<()> {
        if self.state == TransportState::Playing {
            self.sink.stop()?;
        }
        self.state = TransportState::Stopped;
        self.paused_at_offset = 0.0;
        self.emit_state_changed(TransportState::Stopped);
        Ok(())
    }

    /// Jump to a position in seconds, clamped to `[0, duration]`
    ///
    /// While playing, the current source is stopped and a fresh one
    /// starts at the target immediately; playback continues without
    /// passing through Paused. While paused or stopped, only the frozen
    /// offset moves, so a later `play` begins at the target.
    ///
    /// # Errors
    /// Returns an error if no audio is loaded, the position is not
    /// finite, or the sink fails
    pub fn seek(&mut self, position: f64) -> Result<()> {
        if !position.is_finite() {
            return Err(PlaybackError::InvalidSeekPosition(position));
        }
        let Some(buffer) = self.buffer.as_ref() else {
            return Err(PlaybackError::NoAudioLoaded);
        };
        let target = position.clamp(0.0, buffer.duration_secs());
        self.paused_at_offset = target;
        if self.state == TransportState::Playing {
            self.sink.stop()?;
            self.sink.start(buffer, target)?;
            self.clock_start = self.clock.now() - target;
        }
        self.emit_seeked(target);
        debug!("Seeked to {:.3}s", target);
        Ok(())
    }

    // ===== Polling =====

    /// Advance the poll loop one step and report the current position
    ///
    /// Call once per display frame while playing. A tick that observes
    /// the end of the buffer stops the source, resets the offset to the
    /// start, and reports the full duration one last time; after that the
    /// transport is Stopped and polling should cease.
    ///
    /// # Errors
    /// Returns an error if the sink fails to stop at the end of buffer
    pub fn tick(&mut self) -> Result<f64> {
        if self.state != TransportState::Playing {
            return Ok(self.position());
        }
        let duration = self.duration();
        let elapsed = self.clock.now() - self.clock_start;
        if elapsed >= duration {
            self.sink.stop()?;
            self.state = TransportState::Stopped;
            self.paused_at_offset = 0.0;
            self.emit_finished();
            self.emit_state_changed(TransportState::Stopped);
            debug!("Reached end of buffer at {:.2}s", duration);
            return Ok(duration);
        }
        Ok(elapsed.clamp(0.0, duration))
    }

    // ===== Queries =====

    /// Current playback position in seconds, clamped to `[0, duration]`
    pub fn position(&self) -> f64 {
        let duration = self.duration();
        match self.state {
            TransportState::Playing => (self.clock.now() - self.clock_start).clamp(0.0, duration),
            TransportState::Paused | TransportState::Stopped => {
                self.paused_at_offset.clamp(0.0, duration)
            }
        }
    }

    /// Duration of the loaded audio in seconds, 0 when nothing is loaded
    pub fn duration(&self) -> f64 {
        self.buffer.as_ref().map_or(0.0, AudioBuffer::duration_secs)
    }

    /// Whether the transport is currently playing
    pub fn is_playing(&self) -> bool {
        self.state == TransportState::Playing
    }

    /// Current transport state
    pub fn state(&self) -> TransportState {
        self.state
    }

    // ===== Export =====

    /// Encode the loaded buffer as a WAV file for download
    ///
    /// # Errors
    /// Returns an error if no audio is loaded or encoding fails
    pub fn export_wav(&self) -> Result<Vec<u8>> {
        let Some(buffer) = self.buffer.as_ref() else {
            return Err(PlaybackError::NoAudioLoaded);
        };
        forge_audio::encode_wav(buffer).map_err(|e| PlaybackError::Export(e.to_string()))
    }

    // ===== Events =====

    /// Drain all pending events
    ///
    /// Returns all events emitted since the last drain. The UI calls
    /// this alongside its poll to synchronize with transport state.
    pub fn drain_events(&mut self) -> Vec<TransportEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Check if there are pending events
    pub fn has_pending_events(&self) -> bool {
        !self.pending_events.is_empty()
    }

    /// Emit a state changed event
    fn emit_state_changed(&mut self, state: TransportState) {
        self.pending_events
            .push(TransportEvent::StateChanged { state });
    }

    /// Emit a seeked event
    fn emit_seeked(&mut self, position: f64) {
        self.pending_events.push(TransportEvent::Seeked { position });
    }

    /// Emit a finished event
    fn emit_finished(&mut self) {
        self.pending_events.push(TransportEvent::Finished);
    }
}

impl Drop for Transport {
    fn drop(&mut self) {
        // A live source would keep sounding after the engine is gone
        if self.state == TransportState::Playing {
            let _ = self.sink.stop();
        }
    }
}
