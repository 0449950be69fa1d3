//! Forge - Spaced-Repetition Review
//!
//! Review engine for Forge study sets.
//!
//! This crate provides:
//! - Interval scheduling (Leitner-style doubling with hard reset)
//! - Review sessions over a snapshot card queue (rate, flip, advance,
//!   restart, completion signalling)
//! - Fire-and-forget illustration attachment with stale-result protection
//! - Quiz sessions (two-phase select/submit answering, score, percentage)
//! - Events carrying updated cards for persistence
//!
//! # Architecture
//!
//! `forge-review` is pure state and logic:
//! - No I/O; updated cards leave through drained events and the caller
//!   persists them via its own store
//! - Wall-clock time comes from an injected [`ReviewClock`]
//! - Image generation happens outside: the session hands out an
//!   [`IllustrationRequest`], the caller awaits the generation
//!   collaborator and returns the outcome
//!
//! # Example: Review Session
//!
//! ```rust
//! use forge_core::Flashcard;
//! use forge_review::{ReviewEvent, ReviewSession};
//!
//! let cards = vec![
//!     Flashcard::new("What is ATP?", "The cell's energy currency"),
//!     Flashcard::new("What is osmosis?", "Diffusion of water across a membrane"),
//! ];
//! let mut session = ReviewSession::new(cards).unwrap();
//!
//! // Show the answer, then rate the recall
//! session.flip();
//! let updated = session.rate(true);
//! assert_eq!(updated.srs.unwrap().interval, 1);
//! session.advance();
//!
//! session.rate(false);
//! session.advance();
//! assert!(session.is_session_complete());
//!
//! // Persist every updated card the session handed back
//! for event in session.drain_events() {
//!     if let ReviewEvent::CardRated { card } = event {
//!         assert!(card.srs.is_some());
//!         // store.save_set(...) in the embedding app
//!     }
//! }
//! ```
//!
//! # Example: Quiz and XP
//!
//! ```rust
//! use forge_core::{QuizQuestion, UserProgress};
//! use forge_review::QuizSession;
//!
//! let questions = vec![QuizQuestion::new(
//!     "Largest planet?",
//!     vec!["Mars".into(), "Jupiter".into()],
//!     1,
//! )];
//! let mut quiz = QuizSession::new(questions).unwrap();
//!
//! quiz.select(1);
//! assert_eq!(quiz.submit(), Some(true));
//! quiz.next();
//! assert!(quiz.is_finished());
//!
//! // Convert the result into XP
//! let mut progress = UserProgress::default();
//! progress.award(UserProgress::quiz_award(quiz.score()));
//! assert_eq!(progress.xp, 10);
//! ```
//!
//! # Example: Illustration Hand-Off
//!
//! ```rust,no_run
//! use forge_core::{CardId, ContentGenerator};
//! use forge_review::ReviewSession;
//!
//! async fn illustrate(
//!     session: &mut ReviewSession,
//!     generator: &dyn ContentGenerator,
//!     card_id: &CardId,
//! ) -> forge_review::Result<()> {
//!     // None means a request for this card is already in flight
//!     let Some(request) = session.request_illustration(card_id)? else {
//!         return Ok(());
//!     };
//!     let outcome = generator
//!         .generate_concept_image(&request.concept, &request.analogy, &request.aspect_ratio)
//!         .await;
//!     session.complete_illustration(request, outcome);
//!     Ok(())
//! }
//! ```

mod clock;
mod error;
mod events;
mod illustrate;
mod quiz;
mod scheduler;
mod session;

// Public exports
pub use clock::{ReviewClock, SystemClock};
pub use error::{ReviewError, Result};
pub use events::ReviewEvent;
pub use illustrate::{IllustrationRequest, DEFAULT_ASPECT_RATIO};
pub use quiz::QuizSession;
pub use scheduler::{schedule, DAY_MS};
pub use session::ReviewSession;
