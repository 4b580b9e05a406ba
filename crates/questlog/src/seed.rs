//! First-run demonstration data.
//!
//! Seeded when the store has no quest blob yet, then persisted
//! immediately so later sessions load it back instead of regenerating.

use crate::quest::{Priority, Quest};
use chrono::{DateTime, Duration, Utc};

/// Demo quest set for an empty store. Due dates are relative to `now`
/// so one quest always starts out overdue.
pub fn demo_quests(now: DateTime<Utc>) -> Vec<Quest> {
    let mut docs = Quest::new(
        "Complete project documentation and update README with installation instructions",
        Priority::Medium,
        Some((now + Duration::days(3)).date_naive()),
    );
    let mut bug = Quest::new(
        "Fix critical bug in authentication module",
        Priority::High,
        Some((now - Duration::days(1)).date_naive()),
    );
    let mut review = Quest::new(
        "Review pull requests from team members",
        Priority::Low,
        Some((now + Duration::days(1)).date_naive()),
    );
    review.completed = true;
    let mut stretch = Quest::new(
        "Clear out the reading backlog before it spills into next month",
        Priority::Low,
        Some((now + Duration::days(7)).date_naive()),
    );

    // Raw order is most-recent-first; stamp accordingly.
    stretch.created_at = now - Duration::minutes(3);
    review.created_at = now - Duration::minutes(2);
    bug.created_at = now - Duration::minutes(1);
    docs.created_at = now;

    vec![docs, bug, review, stretch]
}
