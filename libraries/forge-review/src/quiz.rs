//! Quiz session
//!
//! Sequential multiple-choice player over a set's quiz questions.
//! Answering is two-phase: a selection stays mutable until [`submit`]
//! locks and scores it, then [`next`] moves on. The final score counts
//! every question at most once and feeds the XP award.
//!
//! [`submit`]: QuizSession::submit
//! [`next`]: QuizSession::next

use crate::error::{ReviewError, Result};
use forge_core::QuizQuestion;
use tracing::debug;

/// One pass over a fixed list of quiz questions
#[derive(Debug, Clone)]
pub struct QuizSession {
    questions: Vec<QuizQuestion>,
    current_index: usize,
    score: u32,
    selected_answer: Option<usize>,
    submitted: bool,
    finished: bool,
}

impl QuizSession {
    /// Start a quiz over the given questions
    ///
    /// # Errors
    /// Returns an error for an empty question list
    pub fn new(questions: Vec<QuizQuestion>) -> Result<Self> {
        if questions.is_empty() {
            return Err(ReviewError::EmptyQuiz);
        }
        debug!("Starting quiz with {} question(s)", questions.len());
        Ok(Self {
            questions,
            current_index: 0,
            score: 0,
            selected_answer: None,
            submitted: false,
            finished: false,
        })
    }

    /// Select (or change) the tentative answer for the current question
    ///
    /// Ignored after submission, after the quiz finished, and for an
    /// index outside the question's options. Returns whether the
    /// selection was recorded.
    pub fn select(&mut self, answer_index: usize) -> bool {
        if self.finished || self.submitted {
            return false;
        }
        if answer_index >= self.current_question().options.len() {
            return false;
        }
        self.selected_answer = Some(answer_index);
        true
    }

    /// Lock in the selected answer and score it
    ///
    /// Returns whether the answer was correct, or `None` when there is
    /// nothing to submit (no selection, already submitted, or finished).
    pub fn submit(&mut self) -> Option<bool> {
        if self.finished || self.submitted {
            return None;
        }
        let selected = self.selected_answer?;
        self.submitted = true;
        let correct = self.current_question().is_correct(selected);
        if correct {
            self.score += 1;
        }
        debug!(question = self.current_index, correct, "Submitted answer");
        Some(correct)
    }

    /// Move to the next question, or finish after the last
    ///
    /// Accepted only once the current answer is submitted; otherwise a
    /// no-op.
    pub fn next(&mut self) {
        if self.finished || !self.submitted {
            return;
        }
        if self.current_index + 1 < self.questions.len() {
            self.current_index += 1;
            self.selected_answer = None;
            self.submitted = false;
        } else {
            self.finished = true;
            debug!(
                score = self.score,
                total = self.questions.len(),
                "Quiz finished"
            );
        }
    }

    /// Start over with the same questions
    pub fn restart(&mut self) {
        self.current_index = 0;
        self.score = 0;
        self.selected_answer = None;
        self.submitted = false;
        self.finished = false;
    }

    // ===== Queries =====

    /// The question under the cursor
    pub fn current_question(&self) -> &QuizQuestion {
        // Constructor rejects empty quizzes and next stops at the end
        &self.questions[self.current_index]
    }

    /// Cursor position in the question list
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// The tentative or locked selection for the current question
    pub fn selected_answer(&self) -> Option<usize> {
        self.selected_answer
    }

    /// Whether the current question's answer is locked
    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    /// Whether the last question has been answered and passed
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Number of correct answers so far
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Score as a rounded percentage of all questions
    pub fn score_percent(&self) -> u32 {
        let total = self.questions.len() as f64;
        (f64::from(self.score) * 100.0 / total).round() as u32
    }

    /// Number of questions
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Whether the quiz has no questions (never, for a constructed quiz)
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}
