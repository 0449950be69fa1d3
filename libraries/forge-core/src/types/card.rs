//! Flashcard domain types
//!
//! Cards are created by the generation collaborator and annotated with
//! scheduling state by the review engine. The JSON shape (camelCase keys,
//! absent optionals) matches the records the surrounding app persists.

use super::ids::CardId;
use serde::{Deserialize, Serialize};

/// Spaced-repetition scheduling state for a single card
///
/// Absent until the card is first reviewed (lazy initialization).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SrsState {
    /// Current review interval in days
    pub interval: u32,

    /// Consecutive successful reviews
    pub repetitions: u32,

    /// Next review due time, milliseconds since the Unix epoch
    pub next_review: i64,
}

/// A flashcard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flashcard {
    /// Stable identifier assigned at creation
    ///
    /// Records persisted before ids existed get a fresh one on load.
    #[serde(default = "CardId::generate")]
    pub id: CardId,

    /// Prompt side
    pub front: String,

    /// Answer side
    pub back: String,

    /// Optional analogy text used to illustrate the concept
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visual_analogy: Option<String>,

    /// Generated illustration, as a data URI
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    /// Optional Mermaid diagram source
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagram: Option<String>,

    /// Scheduling state, absent until first reviewed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub srs: Option<SrsState>,
}

impl Flashcard {
    /// Create a new card with a generated id
    pub fn new(front: impl Into<String>, back: impl Into<String>) -> Self {
        Self {
            id: CardId::generate(),
            front: front.into(),
            back: back.into(),
            visual_analogy: None,
            image_url: None,
            diagram: None,
            srs: None,
        }
    }

    /// Whether the card has never been reviewed
    pub fn is_new(&self) -> bool {
        self.srs.is_none()
    }
}
