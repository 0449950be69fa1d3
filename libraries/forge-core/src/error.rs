/// Core error types for Forge
use thiserror::Error;

/// Result type alias using `CoreError`
pub type Result<T> = std::result::Result<T, CoreError>;

/// Core error type for Forge
#[derive(Error, Debug)]
pub enum CoreError {
    /// Content generation errors (collaborator rejected or timed out)
    #[error("Generation error: {0}")]
    Generation(String),

    /// The generation collaborator returned no audio payload
    #[error("No audio generated")]
    NoAudio,

    /// Audio decoding/encoding errors
    #[error("Audio error: {0}")]
    Audio(String),

    /// Storage-related errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Serialization errors
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    /// Other errors
    #[error("{0}")]
    Other(String),
}

impl CoreError {
    /// Create a generation error
    pub fn generation(msg: impl Into<String>) -> Self {
        Self::Generation(msg.into())
    }

    /// Create an audio error
    pub fn audio(msg: impl Into<String>) -> Self {
        Self::Audio(msg.into())
    }

    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }
}
