//! XP and level progression.
//!
//! Pure state: awarding XP returns a new record instead of mutating in
//! place, so the math is testable without any storage or UI attached.

use serde::{Deserialize, Serialize};

/// XP threshold growth per level-up
pub const LEVEL_UP_XP_STEP: u32 = 100;

/// The user's gamification status.
///
/// Serialized field names match the persisted blob layout
/// (`currentXP`, `maxXP`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progression {
    /// Current level
    pub level: u32,
    /// XP accumulated toward the next level
    #[serde(rename = "currentXP")]
    pub current_xp: u32,
    /// XP threshold for the current level
    #[serde(rename = "maxXP")]
    pub max_xp: u32,
    /// Consecutive-day streak; display-only, maintained elsewhere
    pub streak: u32,
}

impl Default for Progression {
    fn default() -> Self {
        Self {
            level: 5,
            current_xp: 350,
            max_xp: 500,
            streak: 3,
        }
    }
}

impl Progression {
    /// Apply an XP award and return the new state.
    ///
    /// At most one level-up happens per award: rewards top out at 100 XP
    /// while thresholds start at 500, so a single award can never cross
    /// two thresholds. On level-up the excess carries over and the
    /// threshold grows by [`LEVEL_UP_XP_STEP`]. The streak passes
    /// through untouched.
    pub fn award(&self, xp: u32) -> Progression {
        let candidate = self.current_xp + xp;
        if candidate < self.max_xp {
            Progression {
                current_xp: candidate,
                ..self.clone()
            }
        } else {
            Progression {
                level: self.level + 1,
                current_xp: candidate - self.max_xp,
                max_xp: self.max_xp + LEVEL_UP_XP_STEP,
                streak: self.streak,
            }
        }
    }

    /// Display title for the current level bucket
    pub fn title(&self) -> &'static str {
        match self.level {
            0..=1 => "Fresh Recruit",
            2..=3 => "Errand Runner",
            4..=6 => "Task Master",
            7..=9 => "Quest Veteran",
            10..=14 => "Deadline Slayer",
            15..=24 => "Productivity Sage",
            _ => "Grandmaster of Done",
        }
    }

    /// Fraction of the way to the next level, clamped to 0..=1
    pub fn xp_fraction(&self) -> f64 {
        if self.max_xp == 0 {
            return 0.0;
        }
        (self.current_xp as f64 / self.max_xp as f64).clamp(0.0, 1.0)
    }
}
