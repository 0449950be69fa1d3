//! WAV export
//!
//! Re-encodes a decoded buffer as a standard RIFF/WAVE file for download.
//! The layout is the fixed 44-byte PCM header followed by interleaved
//! 16-bit samples; nothing else is written (no extension chunks).

use crate::error::{AudioError, Result};
use forge_core::AudioBuffer;
use tracing::debug;

/// Size of the RIFF/WAVE header in bytes
pub const HEADER_LEN: usize = 44;

/// Encode a buffer as a 16-bit PCM WAV file
///
/// Float samples are clamped to [-1.0, 1.0] and scaled asymmetrically:
/// negative values by 32768, non-negative by 32767, truncated toward
/// zero. Both rails map to exact full scale (`i16::MIN` / `i16::MAX`);
/// keep the asymmetry as-is, it is not a rounding bug.
///
/// # Errors
/// Returns an error for zero channels, mismatched channel lengths, or a
/// buffer too large for a RIFF size field
pub fn encode_wav(buffer: &AudioBuffer) -> Result<Vec<u8>> {
    let channels = buffer.channels();
    if channels == 0 {
        return Err(AudioError::NoChannels);
    }
    let frames = buffer.frames();
    if buffer.channel_data.iter().any(|c| c.len() != frames) {
        return Err(AudioError::InvalidBuffer(
            "channel lengths differ".to_string(),
        ));
    }

    let data_len = frames * channels * 2;
    // The RIFF size field also covers the 36 header bytes after it
    let Ok(riff_size) = u32::try_from(data_len + 36) else {
        return Err(AudioError::InvalidBuffer(format!(
            "{data_len} data bytes exceed the RIFF size field"
        )));
    };
    let data_len_u32 = riff_size - 36;

    let sample_rate = buffer.sample_rate.as_hz();
    let byte_rate = sample_rate * channels as u32 * 2;
    let block_align = channels as u16 * 2;

    let mut out = Vec::with_capacity(HEADER_LEN + data_len);

    // RIFF chunk
    out.extend_from_slice(b"RIFF");
    write_u32(&mut out, riff_size);
    out.extend_from_slice(b"WAVE");

    // fmt chunk: PCM, 16-bit
    out.extend_from_slice(b"fmt ");
    write_u32(&mut out, 16);
    write_u16(&mut out, 1);
    write_u16(&mut out, channels as u16);
    write_u32(&mut out, sample_rate);
    write_u32(&mut out, byte_rate);
    write_u16(&mut out, block_align);
    write_u16(&mut out, 16);

    // data chunk
    out.extend_from_slice(b"data");
    write_u32(&mut out, data_len_u32);
    for frame in 0..frames {
        for channel in &buffer.channel_data {
            write_i16(&mut out, quantize(channel[frame]));
        }
    }

    debug!(
        "Encoded {} frames, {} channel(s) into {} WAV bytes",
        frames,
        channels,
        out.len()
    );
    Ok(out)
}

/// Clamp and scale one float sample to i16
fn quantize(sample: f32) -> i16 {
    let clamped = sample.clamp(-1.0, 1.0);
    let scaled = if clamped < 0.0 {
        clamped * 32768.0
    } else {
        clamped * 32767.0
    };
    scaled as i16
}

fn write_u16(out: &mut Vec<u8>, value: u16) {
    out.extend_from_slice(&value.to_le_bytes());
}

fn write_u32(out: &mut Vec<u8>, value: u32) {
    out.extend_from_slice(&value.to_le_bytes());
}

fn write_i16(out: &mut Vec<u8>, value: i16) {
    out.extend_from_slice(&value.to_le_bytes());
}
