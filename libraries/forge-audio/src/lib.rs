//! Forge Audio
//!
//! PCM decoding and WAV export for Forge podcast audio.
//!
//! This crate provides:
//! - Decoding of the generation service's raw PCM16LE payloads (base64 or
//!   bytes) into planar `AudioBuffer`s
//! - Bit-exact 16-bit WAV encoding for file export
//!
//! # Example: Decoding a payload
//!
//! ```rust
//! use forge_audio::decode_payload;
//! use forge_core::SampleRate;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Podcast audio arrives as base64 PCM16LE, mono at 24000 Hz
//! let buffer = decode_payload("AAAAAA==", SampleRate::PODCAST, 1)?;
//!
//! println!("Decoded {} frames at {} Hz", buffer.frames(), buffer.sample_rate.as_hz());
//! # Ok(())
//! # }
//! ```
//!
//! # Example: Exporting to WAV
//!
//! ```rust
//! use forge_audio::encode_wav;
//! use forge_core::{AudioBuffer, SampleRate};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let buffer = AudioBuffer::new(vec![vec![0.0, 0.5, -0.5]], SampleRate::PODCAST);
//! let bytes = encode_wav(&buffer)?;
//!
//! assert_eq!(bytes.len(), 44 + 3 * 2);
//! # Ok(())
//! # }
//! ```

mod error;
mod pcm;
mod wav;

pub use error::{AudioError, Result};
pub use pcm::{decode_payload, decode_pcm16};
pub use wav::{encode_wav, HEADER_LEN};
