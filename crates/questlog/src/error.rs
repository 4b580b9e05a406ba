//! Error types for Questlog.

use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum QuestError {
    #[error("Quest name can't be empty.")]
    EmptyTitle,

    #[error("No quest with id {0}")]
    NotFound(Uuid),
}

impl QuestError {
    /// True for errors meant to be shown inline to the user.
    pub fn is_user_facing(&self) -> bool {
        matches!(self, QuestError::EmptyTitle)
    }
}
