//! Questlog core: a single-user quest tracker with an XP/level/streak
//! progression layer.
//!
//! The logic lives in four pieces: the quest collection and its
//! mutations ([`session`]), the pure progression math ([`progression`]),
//! the pure view projection ([`view`]), and the persistence bridge
//! ([`store`]). Rendering belongs to front-end crates; everything here
//! is synchronous and side-effect free apart from write-through
//! persistence.

pub mod error;
pub mod progression;
pub mod quest;
pub mod seed;
pub mod session;
pub mod store;
pub mod view;

pub use error::QuestError;
pub use progression::Progression;
pub use quest::{Priority, Quest};
pub use session::QuestLog;
pub use store::{BlobStore, FileStore, MemoryStore};
pub use view::{project, SortKey, StatusFilter};
