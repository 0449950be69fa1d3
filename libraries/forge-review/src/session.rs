//! Review session state machine
//!
//! Drives sequential presentation of a fixed card queue. The queue is a
//! snapshot taken at session start; ratings annotate cards in place and
//! advancing moves a cursor, so cards are never reordered or removed
//! mid-session. Every mutation that the caller should persist is emitted
//! as an event carrying the updated card.

use crate::{
    clock::{ReviewClock, SystemClock},
    error::{ReviewError, Result},
    events::ReviewEvent,
    illustrate::{IllustrationRequest, Illustrator},
    scheduler,
};
use forge_core::{CardId, Flashcard, StudySet};
use tracing::{debug, warn};

/// One pass over a fixed set of cards
///
/// The cursor always points at a card: construction rejects an empty
/// queue and [`advance`](ReviewSession::advance) stops at the last card,
/// signalling completion instead of moving past it. Restarting rewinds
/// the cursor but keeps every scheduling annotation earned so far.
pub struct ReviewSession {
    // Queue snapshot and cursor
    queue: Vec<Flashcard>,
    current_index: usize,
    is_flipped: bool,
    completed: bool,

    // Injected wall clock for due-time computation
    clock: Box<dyn ReviewClock>,

    // Fire-and-forget illustration bookkeeping
    illustrator: Illustrator,

    // Event queue for UI synchronization and persistence
    pending_events: Vec<ReviewEvent>,
}

impl ReviewSession {
    /// Start a session over the given cards, timed by the system clock
    ///
    /// # Errors
    /// Returns an error for an empty card list
    pub fn new(cards: Vec<Flashcard>) -> Result<Self> {
        Self::with_clock(cards, Box::new(SystemClock))
    }

    /// Start a session with an explicit clock
    ///
    /// Tests pass a fixed clock and assert exact due times.
    ///
    /// # Errors
    /// Returns an error for an empty card list
    pub fn with_clock(cards: Vec<Flashcard>, clock: Box<dyn ReviewClock>) -> Result<Self> {
        if cards.is_empty() {
            return Err(ReviewError::EmptyQueue);
        }
        debug!("Starting review session with {} card(s)", cards.len());
        Ok(Self {
            queue: cards,
            current_index: 0,
            is_flipped: false,
            completed: false,
            clock,
            illustrator: Illustrator::default(),
            pending_events: Vec::new(),
        })
    }

    /// Start a session over a snapshot of a set's cards
    ///
    /// # Errors
    /// Returns an error if the set has no cards
    pub fn from_set(set: &StudySet) -> Result<Self> {
        Self::new(set.flashcards.clone())
    }

    // ===== Review Flow =====

    /// Rate the current card and reschedule it
    ///
    /// Returns the updated card; the same record is queued as
    /// [`ReviewEvent::CardRated`] so the caller persists it before
    /// advancing.
    pub fn rate(&mut self, success: bool) -> Flashcard {
        let now_ms = self.clock.now_ms();
        // The cursor invariant makes this index valid
        let card = &mut self.queue[self.current_index];
        card.srs = Some(scheduler::schedule(card.srs.as_ref(), success, now_ms));
        let updated = card.clone();
        debug!(card = %updated.id, success, "Rated card");
        self.emit_card_rated(updated.clone());
        updated
    }

    /// Move to the next card, or signal completion at the end
    ///
    /// Advancing resets the flip. At the last card the cursor stays put
    /// and [`ReviewEvent::SessionCompleted`] is emitted; calling again
    /// re-emits it.
    pub fn advance(&mut self) {
        if self.current_index + 1 < self.queue.len() {
            self.current_index += 1;
            self.is_flipped = false;
        } else {
            self.completed = true;
            debug!("Review session complete");
            self.emit_session_completed();
        }
    }

    /// Turn the current card over (or back)
    pub fn flip(&mut self) {
        self.is_flipped = !self.is_flipped;
    }

    /// Start the queue over, keeping accumulated scheduling state
    pub fn restart(&mut self) {
        self.current_index = 0;
        self.is_flipped = false;
        self.completed = false;
        debug!("Restarted review session");
    }

    // ===== Queries =====

    /// The card under the cursor
    pub fn current_card(&self) -> &Flashcard {
        &self.queue[self.current_index]
    }

    /// Cursor position in the queue
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Number of cards in the session
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Whether the queue is empty (never, for a constructed session)
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Whether the current card shows its back side
    pub fn is_flipped(&self) -> bool {
        self.is_flipped
    }

    /// Whether the cursor has been advanced past the last card
    pub fn is_session_complete(&self) -> bool {
        self.completed
    }

    /// All cards with their current annotations
    pub fn cards(&self) -> &[Flashcard] {
        &self.queue
    }

    // ===== Illustration =====

    /// Ask for an illustration of a card's visual analogy
    ///
    /// Returns the request to hand to the generation collaborator, or
    /// `None` when a request for this card is already in flight
    /// (duplicate clicks are ignored, not queued).
    ///
    /// # Errors
    /// Returns an error for a card outside this session or one without
    /// analogy text
    pub fn request_illustration(
        &mut self,
        card_id: &CardId,
    ) -> Result<Option<IllustrationRequest>> {
        let card = self
            .queue
            .iter()
            .find(|card| &card.id == card_id)
            .ok_or_else(|| ReviewError::UnknownCard(card_id.clone()))?;
        let analogy = card
            .visual_analogy
            .clone()
            .ok_or_else(|| ReviewError::NoAnalogy(card_id.clone()))?;
        let concept = card.front.clone();

        let Some(token) = self.illustrator.begin(card_id) else {
            debug!(card = %card_id, "Illustration already in flight, ignoring request");
            return Ok(None);
        };
        debug!(card = %card_id, "Requested illustration");
        Ok(Some(IllustrationRequest::new(
            card_id.clone(),
            token,
            concept,
            analogy,
        )))
    }

    /// Hand back the outcome of an illustration request
    ///
    /// A result whose token has been superseded, or a second delivery of
    /// an already-completed attempt, is discarded without touching the
    /// card. Success attaches the image (overwriting any previous one)
    /// and emits [`ReviewEvent::IllustrationReady`]; failure leaves the
    /// card unchanged and emits a transient
    /// [`ReviewEvent::IllustrationFailed`].
    pub fn complete_illustration(
        &mut self,
        request: IllustrationRequest,
        outcome: forge_core::Result<String>,
    ) {
        if !self.illustrator.accept(&request.card_id, request.token) {
            debug!(card = %request.card_id, "Discarding superseded illustration result");
            return;
        }
        match outcome {
            Ok(image_url) => {
                if let Some(card) = self
                    .queue
                    .iter_mut()
                    .find(|card| card.id == request.card_id)
                {
                    card.image_url = Some(image_url);
                    let updated = card.clone();
                    debug!(card = %updated.id, "Attached illustration");
                    self.emit_illustration_ready(updated);
                }
            }
            Err(error) => {
                warn!(card = %request.card_id, %error, "Illustration generation failed");
                self.emit_illustration_failed(request.card_id, error.to_string());
            }
        }
    }

    // ===== Events =====

    /// Drain all pending events
    ///
    /// Returns events in emission order; the caller persists the card
    /// payloads and updates its UI.
    pub fn drain_events(&mut self) -> Vec<ReviewEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Check if there are pending events
    pub fn has_pending_events(&self) -> bool {
        !self.pending_events.is_empty()
    }

    /// Emit a card rated event
    fn emit_card_rated(&mut self, card: Flashcard) {
        self.pending_events.push(ReviewEvent::CardRated { card });
    }

    /// Emit a session completed event
    fn emit_session_completed(&mut self) {
        self.pending_events.push(ReviewEvent::SessionCompleted);
    }

    /// Emit an illustration ready event
    fn emit_illustration_ready(&mut self, card: Flashcard) {
        self.pending_events
            .push(ReviewEvent::IllustrationReady { card });
    }

    /// Emit an illustration failed event
    fn emit_illustration_failed(&mut self, card_id: CardId, message: String) {
        self.pending_events
            .push(ReviewEvent::IllustrationFailed { card_id, message });
    }
}
