//! View projection: filter, search, and sort without touching the source
//! collection.

use crate::quest::Quest;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Completion filter applied before search and sort
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Completed,
}

impl std::fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Active => write!(f, "active"),
            Self::Completed => write!(f, "completed"),
        }
    }
}

impl std::str::FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "all" => Ok(StatusFilter::All),
            "active" => Ok(StatusFilter::Active),
            "completed" => Ok(StatusFilter::Completed),
            other => Err(format!("unknown filter: {other}")),
        }
    }
}

/// Sort key for the projected list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Priority,
    Deadline,
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Priority => write!(f, "priority"),
            Self::Deadline => write!(f, "deadline"),
        }
    }
}

impl std::str::FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "priority" => Ok(SortKey::Priority),
            "deadline" => Ok(SortKey::Deadline),
            other => Err(format!("unknown sort key: {other}")),
        }
    }
}

/// Derive the displayed list from the raw collection.
///
/// Stages run in order: completion filter, then trimmed case-insensitive
/// substring search on the title, then a stable sort on a copy. The
/// input slice is never mutated, so the projection is safe to recompute
/// on every state change.
pub fn project(quests: &[Quest], filter: StatusFilter, search: &str, sort: SortKey) -> Vec<Quest> {
    let needle = search.trim().to_lowercase();

    let mut visible: Vec<Quest> = quests
        .iter()
        .filter(|q| match filter {
            StatusFilter::All => true,
            StatusFilter::Active => !q.completed,
            StatusFilter::Completed => q.completed,
        })
        .filter(|q| needle.is_empty() || q.title.to_lowercase().contains(&needle))
        .cloned()
        .collect();

    // Vec::sort_by is stable: ties keep their relative order.
    match sort {
        SortKey::Priority => {
            visible.sort_by(|a, b| a.priority.rank().cmp(&b.priority.rank()));
        }
        SortKey::Deadline => {
            visible.sort_by(|a, b| match (a.due_date, b.due_date) {
                (Some(x), Some(y)) => x.cmp(&y),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            });
        }
    }

    visible
}
