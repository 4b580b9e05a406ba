//! Quest records and priorities.
//!
//! A quest is a single unit of work. Its XP reward is fixed at creation
//! from the priority and never recomputed afterwards.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Priority of a quest, fixed at creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl Priority {
    /// XP granted when a quest of this priority is completed
    pub fn xp_reward(&self) -> u32 {
        match self {
            Priority::High => 100,
            Priority::Medium => 50,
            Priority::Low => 25,
        }
    }

    /// Sort rank, highest priority first
    pub fn rank(&self) -> u8 {
        match self {
            Priority::High => 0,
            Priority::Medium => 1,
            Priority::Low => 2,
        }
    }

    /// Badge label for display surfaces
    pub fn label(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::High => write!(f, "high"),
            Self::Medium => write!(f, "medium"),
            Self::Low => write!(f, "low"),
        }
    }
}

impl std::str::FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "high" => Ok(Priority::High),
            "medium" => Ok(Priority::Medium),
            "low" => Ok(Priority::Low),
            other => Err(format!("unknown priority: {other}")),
        }
    }
}

/// A single quest.
///
/// Field names in the serialized form match the persisted blob layout
/// (`dueDate`, `xpReward`, `createdAt`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quest {
    /// Unique id, assigned at creation
    pub id: Uuid,
    /// Display title, non-empty at creation
    pub title: String,
    /// Completion flag
    pub completed: bool,
    /// Priority, immutable
    pub priority: Priority,
    /// Optional calendar deadline, no time component
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    /// XP granted once per false→true completion flip
    pub xp_reward: u32,
    /// Creation timestamp, drives default insertion order only
    pub created_at: DateTime<Utc>,
}

impl Quest {
    /// Build a new incomplete quest. The title is stored trimmed; the
    /// caller validates non-emptiness before constructing.
    pub fn new(title: &str, priority: Priority, due_date: Option<NaiveDate>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.trim().to_string(),
            completed: false,
            priority,
            due_date,
            xp_reward: priority.xp_reward(),
            created_at: Utc::now(),
        }
    }

    /// Derived, never stored: an incomplete quest whose due date's UTC
    /// midnight lies strictly before `now`. Recomputed at query time so
    /// it changes as real time advances.
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        match self.due_date {
            Some(due) => !self.completed && due.and_time(NaiveTime::MIN).and_utc() < now,
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_xp_reward_by_priority() {
        assert_eq!(Priority::High.xp_reward(), 100);
        assert_eq!(Priority::Medium.xp_reward(), 50);
        assert_eq!(Priority::Low.xp_reward(), 25);
    }

    #[test]
    fn test_new_quest_trims_title() {
        let quest = Quest::new("  Slay the dragon  ", Priority::High, None);
        assert_eq!(quest.title, "Slay the dragon");
        assert!(!quest.completed);
        assert_eq!(quest.xp_reward, 100);
    }

    #[test]
    fn test_overdue_requires_past_due_date() {
        let now = Utc::now();
        let yesterday = (now - Duration::days(1)).date_naive();
        let tomorrow = (now + Duration::days(1)).date_naive();

        let overdue = Quest::new("late", Priority::Low, Some(yesterday));
        assert!(overdue.is_overdue(now));

        let upcoming = Quest::new("soon", Priority::Low, Some(tomorrow));
        assert!(!upcoming.is_overdue(now));

        let undated = Quest::new("whenever", Priority::Low, None);
        assert!(!undated.is_overdue(now));
    }

    #[test]
    fn test_completed_quest_is_never_overdue() {
        let now = Utc::now();
        let yesterday = (now - Duration::days(1)).date_naive();
        let mut quest = Quest::new("done late", Priority::Medium, Some(yesterday));
        quest.completed = true;
        assert!(!quest.is_overdue(now));
    }

    #[test]
    fn test_priority_from_str() {
        assert_eq!("high".parse::<Priority>().unwrap(), Priority::High);
        assert_eq!("Medium".parse::<Priority>().unwrap(), Priority::Medium);
        assert!("urgent".parse::<Priority>().is_err());
    }
}
