//! Raw PCM16LE decoding
//!
//! The generation service delivers podcast audio as a base64 string of
//! interleaved 16-bit signed little-endian samples with no container.
//! Decoding is general over channel count and sample rate; the service
//! itself always sends mono at 24000 Hz.

use crate::error::{AudioError, Result};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use forge_core::{AudioBuffer, SampleRate};
use tracing::debug;

/// Decode interleaved PCM16LE bytes into a planar [`AudioBuffer`]
///
/// An odd byte length is rejected since the bytes cannot form 16-bit
/// samples. A byte length that forms whole samples but ends mid-frame
/// drops the trailing partial frame; this truncation is intentional.
///
/// # Errors
/// Returns an error for zero channels or an odd byte length
pub fn decode_pcm16(
    raw_bytes: &[u8],
    sample_rate: SampleRate,
    channels: usize,
) -> Result<AudioBuffer> {
    if channels == 0 {
        return Err(AudioError::NoChannels);
    }
    if raw_bytes.len() % 2 != 0 {
        return Err(AudioError::InvalidLength {
            byte_length: raw_bytes.len(),
        });
    }

    let sample_count = raw_bytes.len() / 2;
    let frame_count = sample_count / channels;
    let dropped = sample_count - frame_count * channels;
    if dropped > 0 {
        debug!(
            "PCM stream ends mid-frame, dropping {} trailing sample(s)",
            dropped
        );
    }

    let mut channel_data: Vec<Vec<f32>> = (0..channels)
        .map(|_| Vec::with_capacity(frame_count))
        .collect();
    for (index, bytes) in raw_bytes
        .chunks_exact(2)
        .take(frame_count * channels)
        .enumerate()
    {
        let sample = i16::from_le_bytes([bytes[0], bytes[1]]);
        // Divide by 32768.0 for symmetric [-1.0, 1.0) range
        channel_data[index % channels].push(f32::from(sample) / 32768.0);
    }

    debug!(
        "Decoded {} frames, {} channel(s) at {} Hz",
        frame_count,
        channels,
        sample_rate.as_hz()
    );
    Ok(AudioBuffer::new(channel_data, sample_rate))
}

/// Decode a base64 generation payload into a playable buffer
///
/// # Errors
/// Returns an error if the payload is empty, is not valid base64, or does
/// not decode as PCM16LE
pub fn decode_payload(
    payload: &str,
    sample_rate: SampleRate,
    channels: usize,
) -> Result<AudioBuffer> {
    if payload.is_empty() {
        return Err(AudioError::EmptyPayload);
    }
    let raw_bytes = STANDARD.decode(payload)?;
    if raw_bytes.is_empty() {
        return Err(AudioError::EmptyPayload);
    }
    decode_pcm16(&raw_bytes, sample_rate, channels)
}
