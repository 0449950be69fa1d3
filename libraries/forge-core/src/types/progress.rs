//! User progress (XP and level)

use serde::{Deserialize, Serialize};

/// XP granted for completing a flashcard review session
pub const XP_SESSION_COMPLETE: u32 = 20;

/// XP granted per correct quiz answer
pub const XP_PER_QUIZ_POINT: u32 = 10;

/// XP granted per imported source document
pub const XP_PER_DOCUMENT: u32 = 50;

/// XP required per level
const XP_PER_LEVEL: u32 = 100;

/// A user's accumulated experience and level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProgress {
    /// Total experience points
    pub xp: u32,

    /// Current level, starts at 1
    pub level: u32,
}

impl Default for UserProgress {
    fn default() -> Self {
        Self { xp: 0, level: 1 }
    }
}

impl UserProgress {
    /// Create progress with an explicit XP total
    pub fn new(xp: u32) -> Self {
        Self {
            xp,
            level: xp / XP_PER_LEVEL + 1,
        }
    }

    /// Add XP and raise the level if the new total warrants it
    ///
    /// The level never decreases.
    pub fn award(&mut self, amount: u32) {
        self.xp += amount;
        let new_level = self.xp / XP_PER_LEVEL + 1;
        if new_level > self.level {
            self.level = new_level;
        }
    }

    /// XP awarded for a finished quiz with the given score
    pub fn quiz_award(score: u32) -> u32 {
        score * XP_PER_QUIZ_POINT
    }
}
