//! Podcast generation types

use serde::{Deserialize, Serialize};

/// Conversational tone of the generated podcast
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PodcastTone {
    Casual,
    Formal,
    Humorous,
    Debate,
}

/// Target length of the generated podcast
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PodcastLength {
    Short,
    Medium,
    Long,
}

/// Options for podcast generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PodcastConfig {
    /// Conversational tone
    pub tone: PodcastTone,

    /// Target length
    pub length: PodcastLength,
}

impl Default for PodcastConfig {
    fn default() -> Self {
        Self {
            tone: PodcastTone::Casual,
            length: PodcastLength::Medium,
        }
    }
}

/// Result of a podcast generation call
///
/// The payload is base64-encoded raw PCM as delivered by the collaborator;
/// decode it with the audio crate before playback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedPodcast {
    /// Base64-encoded PCM16LE stream
    pub audio_payload: String,

    /// Dialogue script (persisted with the study set)
    pub script: String,
}
