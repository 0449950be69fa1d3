//! Illustration request tracking
//!
//! Image generation is fire-and-forget: the session hands out an
//! [`IllustrationRequest`], the caller awaits the generation collaborator,
//! and the outcome comes back through the session. Two guards keep the
//! async boundary safe without aborting anything in flight:
//!
//! - a per-card in-flight flag: duplicate requests for a card are ignored,
//!   not queued;
//! - a per-card token: a completion whose token no longer matches is
//!   discarded, so a stale response never writes onto a card.

use forge_core::CardId;
use std::collections::{HashMap, HashSet};

/// Aspect ratio requested for concept illustrations
pub const DEFAULT_ASPECT_RATIO: &str = "3:4";

/// A pending illustration hand-off to the generation collaborator
///
/// Pass `concept`, `analogy` and `aspect_ratio` to
/// [`ContentGenerator::generate_concept_image`](forge_core::ContentGenerator::generate_concept_image),
/// then return the whole request with the outcome to
/// `complete_illustration`.
#[derive(Debug, Clone)]
pub struct IllustrationRequest {
    /// The card to illustrate
    pub card_id: CardId,
    /// Concept text (the card's front)
    pub concept: String,
    /// Analogy text guiding the image
    pub analogy: String,
    /// Requested aspect ratio
    pub aspect_ratio: String,
    pub(crate) token: u64,
}

impl IllustrationRequest {
    pub(crate) fn new(card_id: CardId, token: u64, concept: String, analogy: String) -> Self {
        Self {
            card_id,
            concept,
            analogy,
            aspect_ratio: DEFAULT_ASPECT_RATIO.to_string(),
            token,
        }
    }
}

/// Per-card generation bookkeeping
#[derive(Debug, Default)]
pub(crate) struct Illustrator {
    tokens: HashMap<CardId, u64>,
    in_flight: HashSet<CardId>,
}

impl Illustrator {
    /// Claim a generation slot for the card
    ///
    /// Returns the token for this attempt, or `None` when a request for
    /// the card is already in flight.
    pub(crate) fn begin(&mut self, card_id: &CardId) -> Option<u64> {
        if self.in_flight.contains(card_id) {
            return None;
        }
        let token = self.tokens.entry(card_id.clone()).or_insert(0);
        *token += 1;
        self.in_flight.insert(card_id.clone());
        Some(*token)
    }

    /// Check a completion against the card's current token
    ///
    /// A match releases the in-flight slot and returns `true`. A stale
    /// token, or a second delivery for an already-released attempt,
    /// returns `false`.
    pub(crate) fn accept(&mut self, card_id: &CardId, token: u64) -> bool {
        if self.tokens.get(card_id) == Some(&token) && self.in_flight.contains(card_id) {
            self.in_flight.remove(card_id);
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_request_is_ignored_while_in_flight() {
        let mut illustrator = Illustrator::default();
        let card = CardId::new("card-1");

        assert_eq!(illustrator.begin(&card), Some(1));
        assert_eq!(illustrator.begin(&card), None);
    }

    #[test]
    fn completion_releases_the_slot() {
        let mut illustrator = Illustrator::default();
        let card = CardId::new("card-1");

        let token = illustrator.begin(&card).unwrap();
        assert!(illustrator.accept(&card, token));
        assert_eq!(illustrator.begin(&card), Some(2));
    }

    #[test]
    fn stale_token_is_rejected() {
        let mut illustrator = Illustrator::default();
        let card = CardId::new("card-1");

        let first = illustrator.begin(&card).unwrap();
        assert!(illustrator.accept(&card, first));

        let second = illustrator.begin(&card).unwrap();
        // A late duplicate delivery of the first attempt
        assert!(!illustrator.accept(&card, first));
        // The live attempt still completes normally
        assert!(illustrator.accept(&card, second));
    }

    #[test]
    fn double_delivery_is_rejected() {
        let mut illustrator = Illustrator::default();
        let card = CardId::new("card-1");

        let token = illustrator.begin(&card).unwrap();
        assert!(illustrator.accept(&card, token));
        assert!(!illustrator.accept(&card, token));
    }

    #[test]
    fn cards_are_tracked_independently() {
        let mut illustrator = Illustrator::default();
        let first = CardId::new("card-1");
        let second = CardId::new("card-2");

        assert_eq!(illustrator.begin(&first), Some(1));
        assert_eq!(illustrator.begin(&second), Some(1));
        assert_eq!(illustrator.begin(&first), None);
    }
}
