//! Collaborator traits
//!
//! The engines never talk to the AI service or the storage backend
//! directly; both capabilities are injected through these seams so the
//! core stays platform-agnostic and testable with scripted fakes.

use crate::error::Result;
use crate::types::{GeneratedPodcast, PodcastConfig, SetId, StudySet, UserProgress};
use async_trait::async_trait;

/// Content generation capability
///
/// Calls are not aborted once issued; a superseded result is discarded by
/// the caller, so implementations may resolve late without harm.
#[async_trait]
pub trait ContentGenerator: Send + Sync {
    /// Generate an illustration for a flashcard concept
    ///
    /// Returns the image as a data URI. `aspect_ratio` uses the service's
    /// "W:H" string form, e.g. `"3:4"`.
    ///
    /// # Errors
    /// Returns an error if the service rejects the request or times out
    async fn generate_concept_image(
        &self,
        concept: &str,
        analogy: &str,
        aspect_ratio: &str,
    ) -> Result<String>;

    /// Generate podcast audio for the given source text
    ///
    /// # Errors
    /// Returns [`CoreError::NoAudio`](crate::CoreError::NoAudio) when the
    /// service responds without an audio payload
    async fn generate_podcast_audio(
        &self,
        source_text: &str,
        config: PodcastConfig,
    ) -> Result<GeneratedPodcast>;
}

/// Persistence capability for study sets and user progress
///
/// Saves are assumed eventually consistent; the engines hand records over
/// and advance without awaiting confirmation.
#[async_trait]
pub trait StudyStore: Send + Sync {
    /// Persist a study set (insert or replace by id)
    async fn save_set(&self, set: &StudySet) -> Result<()>;

    /// Load a study set by id
    async fn load_set(&self, id: &SetId) -> Result<Option<StudySet>>;

    /// Load all study sets
    async fn load_sets(&self) -> Result<Vec<StudySet>>;

    /// Delete a study set by id
    async fn delete_set(&self, id: &SetId) -> Result<()>;

    /// Persist the user's progress
    async fn save_progress(&self, progress: UserProgress) -> Result<()>;

    /// Load the user's progress
    async fn load_progress(&self) -> Result<UserProgress>;
}
