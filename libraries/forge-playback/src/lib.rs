//! Forge - Podcast Playback
//!
//! Platform-agnostic playback transport for Forge's generated podcasts.
//!
//! This crate provides:
//! - Transport states (Stopped, Playing, Paused)
//! - Clock-derived position (never read back from the platform)
//! - Pause/resume with a frozen resume offset
//! - Seek with clamping to `[0, duration]`
//! - End-of-buffer detection via a per-frame poll
//! - WAV export of the loaded buffer
//! - UI events (state changes, seeks, natural end)
//!
//! # Architecture
//!
//! `forge-playback` is completely platform-agnostic:
//! - No dependency on a concrete audio backend
//! - No dependency on any UI framework
//! - No timers or threads of its own
//!
//! The platform supplies two seams: an [`AudioSink`] that can start a
//! one-shot source at an offset and stop it, and a [`TransportClock`]
//! that reports monotonic seconds. Everything else (position arithmetic,
//! pause emulation, seek restarts, end detection) lives here and is
//! deterministic under test clocks.
//!
//! # Example: Basic Playback
//!
//! ```rust
//! use forge_core::{AudioBuffer, SampleRate};
//! use forge_playback::{AudioSink, Result, Transport};
//!
//! // A sink that discards audio; real platforms bind a device here
//! struct SilentSink;
//!
//! impl AudioSink for SilentSink {
//!     fn start(&mut self, _buffer: &AudioBuffer, _offset: f64) -> Result<()> {
//!         Ok(())
//!     }
//!
//!     fn stop(&mut self) -> Result<()> {
//!         Ok(())
//!     }
//! }
//!
//! let mut transport = Transport::new(Box::new(SilentSink));
//!
//! // One second of silence at the podcast sample rate
//! let buffer = AudioBuffer::new(vec![vec![0.0; 24_000]], SampleRate::PODCAST);
//! transport.load(buffer).unwrap();
//!
//! transport.play().unwrap();
//! let position = transport.tick().unwrap();
//! assert!(position >= 0.0);
//!
//! transport.pause().unwrap();
//! transport.seek(0.5).unwrap();
//!
//! // Download the audio as a WAV file
//! let wav_bytes = transport.export_wav().unwrap();
//! assert_eq!(&wav_bytes[0..4], b"RIFF");
//! ```
//!
//! # Example: Platform Integration
//!
//! ```rust,no_run
//! use forge_core::AudioBuffer;
//! use forge_playback::{AudioSink, Result, Transport};
//!
//! // Implement AudioSink for your platform
//! struct MyAudioOutput {
//!     // ... platform-specific device handle
//! }
//!
//! impl AudioSink for MyAudioOutput {
//!     fn start(&mut self, buffer: &AudioBuffer, offset: f64) -> Result<()> {
//!         // Create a fresh one-shot source bound to `buffer` and start
//!         // it `offset` seconds in
//!         Ok(())
//!     }
//!
//!     fn stop(&mut self) -> Result<()> {
//!         // Tear down the active source, if any
//!         Ok(())
//!     }
//! }
//!
//! // Use with the transport
//! let output = MyAudioOutput { /* ... */ };
//! let mut transport = Transport::new(Box::new(output));
//!
//! // Poll once per display frame while playing
//! loop {
//!     let _position = transport.tick().unwrap();
//!     for _event in transport.drain_events() {
//!         // Forward to the UI
//!     }
//!     if !transport.is_playing() {
//!         break;
//!     }
//! }
//! ```

mod clock;
mod error;
mod events;
mod sink;
mod transport;
pub mod types;

// Public exports
pub use clock::{SystemClock, TransportClock};
pub use error::{PlaybackError, Result};
pub use events::TransportEvent;
pub use sink::AudioSink;
pub use transport::Transport;
pub use types::TransportState;
