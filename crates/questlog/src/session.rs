//! Top-level session controller.
//!
//! Owns the quest collection, the progression record, and the ephemeral
//! view selection, and mirrors every mutation to the persistence bridge.
//! All transitions are synchronous; nothing here blocks or suspends.

use crate::error::QuestError;
use crate::progression::Progression;
use crate::quest::{Priority, Quest};
use crate::seed;
use crate::store::{BlobStore, QUESTS_KEY, USER_KEY};
use crate::view::{project, SortKey, StatusFilter};
use chrono::{NaiveDate, Utc};
use tracing::{debug, warn};
use uuid::Uuid;

/// Session state: quests, progression, and view selection.
///
/// The view selection (filter, sort, search, pending deletion) is
/// ephemeral and never persisted; quests and progression write through
/// to the store on every mutation.
pub struct QuestLog<S: BlobStore> {
    store: S,
    quests: Vec<Quest>,
    progression: Progression,
    filter: StatusFilter,
    sort: SortKey,
    search: String,
    pending_delete: Option<Uuid>,
    validation_error: Option<String>,
}

impl<S: BlobStore> QuestLog<S> {
    /// Load session state from the store, seeding fixed defaults for any
    /// absent key and persisting those defaults immediately. A malformed
    /// blob falls back to the seed without overwriting the stored bytes;
    /// the next mutation's write-through replaces them.
    pub fn open(store: S) -> Self {
        let now = Utc::now();

        let (quests, quests_seeded) = match store.get(QUESTS_KEY) {
            Some(raw) => match serde_json::from_str::<Vec<Quest>>(&raw) {
                Ok(quests) => (quests, false),
                Err(e) => {
                    warn!("malformed quest blob, falling back to demo set: {e}");
                    (seed::demo_quests(now), false)
                }
            },
            None => (seed::demo_quests(now), true),
        };

        let (progression, user_seeded) = match store.get(USER_KEY) {
            Some(raw) => match serde_json::from_str::<Progression>(&raw) {
                Ok(progression) => (progression, false),
                Err(e) => {
                    warn!("malformed progression blob, falling back to default: {e}");
                    (Progression::default(), false)
                }
            },
            None => (Progression::default(), true),
        };

        let mut log = Self {
            store,
            quests,
            progression,
            filter: StatusFilter::default(),
            sort: SortKey::default(),
            search: String::new(),
            pending_delete: None,
            validation_error: None,
        };

        if quests_seeded {
            log.persist_quests();
        }
        if user_seeded {
            log.persist_user();
        }

        log
    }

    /// Create a quest and prepend it to the collection.
    ///
    /// A blank or whitespace-only title fails validation, leaves the
    /// collection untouched, and records the inline error message;
    /// success clears any prior validation error.
    pub fn add(
        &mut self,
        title: &str,
        priority: Priority,
        due_date: Option<NaiveDate>,
    ) -> Result<Quest, QuestError> {
        if title.trim().is_empty() {
            let err = QuestError::EmptyTitle;
            self.validation_error = Some(err.to_string());
            return Err(err);
        }

        let quest = Quest::new(title, priority, due_date);
        self.quests.insert(0, quest.clone());
        self.validation_error = None;
        self.persist_quests();
        Ok(quest)
    }

    /// Flip a quest's completion flag.
    ///
    /// Completing awards the quest's XP exactly once per false→true
    /// flip; un-completing never revokes XP, so a full off/on cycle
    /// awards again.
    pub fn toggle(&mut self, id: Uuid) -> Result<Quest, QuestError> {
        let quest = self
            .quests
            .iter_mut()
            .find(|q| q.id == id)
            .ok_or(QuestError::NotFound(id))?;

        quest.completed = !quest.completed;
        let snapshot = quest.clone();

        if snapshot.completed {
            self.progression = self.progression.award(snapshot.xp_reward);
            self.persist_user();
        }
        self.persist_quests();
        Ok(snapshot)
    }

    /// Start the delete handshake; hands back the display title for the
    /// confirmation dialog. Deletion only proceeds through
    /// [`confirm_delete`](Self::confirm_delete).
    pub fn request_delete(&mut self, id: Uuid) -> Result<String, QuestError> {
        let quest = self
            .quests
            .iter()
            .find(|q| q.id == id)
            .ok_or(QuestError::NotFound(id))?;
        self.pending_delete = Some(id);
        Ok(quest.title.clone())
    }

    /// Complete a pending deletion, returning the removed quest.
    pub fn confirm_delete(&mut self) -> Option<Quest> {
        let id = self.pending_delete.take()?;
        let idx = self.quests.iter().position(|q| q.id == id)?;
        let removed = self.quests.remove(idx);
        self.persist_quests();
        Some(removed)
    }

    /// Abandon a pending deletion.
    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Quest queued for deletion, if a handshake is in flight
    pub fn pending_delete(&self) -> Option<&Quest> {
        let id = self.pending_delete?;
        self.quests.iter().find(|q| q.id == id)
    }

    /// Placeholder: editing has no mutation semantics yet.
    pub fn edit(&self, id: Uuid) {
        debug!("edit requested for quest {id}; editing is not implemented");
    }

    /// Projected list for display, derived from the current selection
    pub fn visible(&self) -> Vec<Quest> {
        project(&self.quests, self.filter, &self.search, self.sort)
    }

    pub fn set_filter(&mut self, filter: StatusFilter) {
        self.filter = filter;
    }

    pub fn set_sort(&mut self, sort: SortKey) {
        self.sort = sort;
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
    }

    /// Clear the inline validation message (title input changed)
    pub fn clear_validation_error(&mut self) {
        self.validation_error = None;
    }

    pub fn validation_error(&self) -> Option<&str> {
        self.validation_error.as_deref()
    }

    /// Raw collection in insertion order (most recent first)
    pub fn quests(&self) -> &[Quest] {
        &self.quests
    }

    pub fn find(&self, id: Uuid) -> Option<&Quest> {
        self.quests.iter().find(|q| q.id == id)
    }

    pub fn progression(&self) -> &Progression {
        &self.progression
    }

    pub fn filter(&self) -> StatusFilter {
        self.filter
    }

    pub fn sort(&self) -> SortKey {
        self.sort
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    // Write-through persistence. Failures are logged and swallowed:
    // best-effort durability for a single-session local tool.
    fn persist_quests(&mut self) {
        match serde_json::to_string(&self.quests) {
            Ok(json) => {
                if let Err(e) = self.store.set(QUESTS_KEY, &json) {
                    warn!("failed to persist quests: {e}");
                }
            }
            Err(e) => warn!("failed to serialize quests: {e}"),
        }
    }

    fn persist_user(&mut self) {
        match serde_json::to_string(&self.progression) {
            Ok(json) => {
                if let Err(e) = self.store.set(USER_KEY, &json) {
                    warn!("failed to persist progression: {e}");
                }
            }
            Err(e) => warn!("failed to serialize progression: {e}"),
        }
    }
}
