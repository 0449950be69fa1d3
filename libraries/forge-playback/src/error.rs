//! Error types for transport control

use thiserror::Error;

/// Transport errors
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// No audio buffer is currently loaded
    #[error("No audio loaded")]
    NoAudioLoaded,

    /// A loaded buffer must contain at least one frame
    #[error("Buffer contains no audio")]
    EmptyBuffer,

    /// Invalid seek position
    #[error("Invalid seek position: {0}")]
    InvalidSeekPosition(f64),

    /// Audio sink error
    #[error("Audio sink error: {0}")]
    Sink(String),

    /// WAV export error
    #[error("Export error: {0}")]
    Export(String),
}

impl PlaybackError {
    /// Create a sink error
    pub fn sink(msg: impl Into<String>) -> Self {
        Self::Sink(msg.into())
    }
}

/// Result type for transport operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
