//! Forge Study Core
//!
//! Platform-agnostic core types, traits, and error handling for Forge.
//!
//! This crate provides the foundational building blocks shared by the
//! review and audio engines.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `StudySet`, `Flashcard`, `QuizQuestion`, `AudioBuffer`, etc.
//! - **Collaborator Traits**: `ContentGenerator`, `StudyStore`
//! - **Error Handling**: Unified `CoreError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use forge_core::types::{Flashcard, StudySet, UserId};
//!
//! let user = UserId::generate();
//! let mut set = StudySet::new(user, "Cell Biology");
//! set.flashcards.push(Flashcard::new("What is ATP?", "The cell's energy currency"));
//!
//! assert!(set.flashcards[0].is_new());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod store;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use error::{CoreError, Result};
pub use store::MemoryStore;
pub use traits::{ContentGenerator, StudyStore};

// Export all types
pub use types::{
    // Audio types
    AudioBuffer, SampleRate,
    // Cards and sets
    CardId, Flashcard, QuizQuestion, SetId, SrsState, StudySet,
    // Podcast generation
    GeneratedPodcast, PodcastConfig, PodcastLength, PodcastTone,
    // Progress
    UserId, UserProgress,
};
