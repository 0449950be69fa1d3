//! Study set domain types
//!
//! A study set bundles every artifact generated from one source document:
//! summary, flashcards, quiz questions, and an optional podcast script.

use super::card::Flashcard;
use super::ids::{CardId, SetId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single multiple-choice quiz question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    /// Question text
    pub question: String,

    /// Answer options, in presentation order
    pub options: Vec<String>,

    /// Index into `options` of the correct answer
    pub correct_index: usize,
}

impl QuizQuestion {
    /// Create a new question
    pub fn new(question: impl Into<String>, options: Vec<String>, correct_index: usize) -> Self {
        Self {
            question: question.into(),
            options,
            correct_index,
        }
    }

    /// Whether the given option index is the correct answer
    pub fn is_correct(&self, answer_index: usize) -> bool {
        answer_index == self.correct_index
    }
}

/// A study set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudySet {
    /// Unique set identifier
    pub id: SetId,

    /// Set title
    pub title: String,

    /// Short description
    pub description: String,

    /// Generated summary (Markdown)
    pub summary: String,

    /// Flashcards belonging to this set
    pub flashcards: Vec<Flashcard>,

    /// Quiz questions belonging to this set
    pub quiz: Vec<QuizQuestion>,

    /// Generated podcast dialogue, if a podcast was produced
    ///
    /// Only the script is persisted; decoded audio stays in memory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub podcast_script: Option<String>,

    /// Owner user ID
    pub created_by: UserId,

    /// Creation timestamp
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,

    /// Free-form tags
    pub tags: Vec<String>,

    /// Parent binder, if the set is filed in one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub binder_id: Option<String>,
}

impl StudySet {
    /// Create a new empty study set
    pub fn new(created_by: UserId, title: impl Into<String>) -> Self {
        Self {
            id: SetId::generate(),
            title: title.into(),
            description: String::new(),
            summary: String::new(),
            flashcards: Vec::new(),
            quiz: Vec::new(),
            podcast_script: None,
            created_by,
            created_at: Utc::now(),
            tags: Vec::new(),
            binder_id: None,
        }
    }

    /// Look up a card by id
    pub fn card(&self, id: &CardId) -> Option<&Flashcard> {
        self.flashcards.iter().find(|c| &c.id == id)
    }

    /// Replace a card by id, returning whether a card was updated
    ///
    /// Matching is by id only; two cards with identical text stay distinct.
    pub fn update_card(&mut self, card: Flashcard) -> bool {
        match self.flashcards.iter_mut().find(|c| c.id == card.id) {
            Some(slot) => {
                *slot = card;
                true
            }
            None => false,
        }
    }
}
