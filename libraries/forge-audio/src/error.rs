/// Audio-specific errors
use thiserror::Error;

/// Result type alias using `AudioError`
pub type Result<T> = std::result::Result<T, AudioError>;

/// Audio error types
#[derive(Error, Debug)]
pub enum AudioError {
    /// PCM byte stream cannot be split into whole 16-bit samples
    #[error("Invalid PCM length: {byte_length} bytes is not a whole number of 16-bit samples")]
    InvalidLength {
        /// Length of the rejected input
        byte_length: usize,
    },

    /// Channel count of zero
    #[error("Channel count must be at least 1")]
    NoChannels,

    /// The generation payload carried no audio data
    #[error("Empty audio payload")]
    EmptyPayload,

    /// Base64 payload could not be decoded
    #[error("Invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),

    /// Invalid audio buffer
    #[error("Invalid audio buffer: {0}")]
    InvalidBuffer(String),
}

impl From<AudioError> for forge_core::CoreError {
    fn from(err: AudioError) -> Self {
        forge_core::CoreError::audio(err.to_string())
    }
}
