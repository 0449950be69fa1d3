//! Review engine events
//!
//! Event-based communication for UI synchronization and persistence.
//! [`CardRated`](ReviewEvent::CardRated) and
//! [`IllustrationReady`](ReviewEvent::IllustrationReady) carry the
//! updated card record; the caller drains events and saves them through
//! its store.

use forge_core::{CardId, Flashcard};
use serde::{Deserialize, Serialize};

/// Events emitted by the review session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ReviewEvent {
    /// The current card was rated and rescheduled
    CardRated {
        /// The card with its new scheduling state
        card: Flashcard,
    },

    /// The cursor tried to advance past the last card
    ///
    /// Re-emitted on every further advance; the queue is retained so the
    /// session can be restarted.
    SessionCompleted,

    /// A generated illustration was attached to a card
    IllustrationReady {
        /// The card with its new image
        card: Flashcard,
    },

    /// Illustration generation failed
    ///
    /// Transient: the card is unchanged and the request may be retried.
    IllustrationFailed {
        /// The card the request was for
        card_id: CardId,
        /// Human-readable failure description
        message: String,
    },
}
