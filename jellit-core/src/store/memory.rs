use std::cell::RefCell;
use std::collections::VecDeque;

use chrono::Utc;
use uuid::Uuid;

use super::EntryStore;
use crate::entry::{Entry, EntryDraft, EntryPatch};
use crate::error::RemoteError;
use crate::session::Session;

/// A call received by [`MemoryStore`], in arrival order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreCall {
    List { owner: String },
    Insert { owner: String },
    Update { id: String },
    Delete { id: String },
}

/// An in-process [`EntryStore`] with the same visibility rules as the hosted table:
/// rows of other owners behave as if they did not exist.
///
/// Every call is recorded, and failures can be queued to exercise error paths.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RefCell<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    rows: Vec<Entry>,
    calls: Vec<StoreCall>,
    failures: VecDeque<RemoteError>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries(rows: Vec<Entry>) -> Self {
        let store = Self::default();
        store.inner.borrow_mut().rows = rows;
        store
    }

    /// Makes the next call fail with `error`, before it touches any row.
    pub fn fail_next(&self, error: RemoteError) {
        self.inner.borrow_mut().failures.push_back(error);
    }

    pub fn calls(&self) -> Vec<StoreCall> {
        self.inner.borrow().calls.clone()
    }

    /// Rows of `owner_id`, in storage order.
    pub fn rows_of(&self, owner_id: &str) -> Vec<Entry> {
        self.inner
            .borrow()
            .rows
            .iter()
            .filter(|row| row.owner_id == owner_id)
            .cloned()
            .collect()
    }

    fn begin(&self, call: StoreCall) -> Result<(), RemoteError> {
        let mut inner = self.inner.borrow_mut();
        inner.calls.push(call);
        match inner.failures.pop_front() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

impl EntryStore for MemoryStore {
    fn list(&self, owner: &Session) -> Result<Vec<Entry>, RemoteError> {
        self.begin(StoreCall::List {
            owner: owner.owner_id().to_string(),
        })?;
        let mut rows = self.rows_of(owner.owner_id());
        rows.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(rows)
    }

    fn insert(&self, owner: &Session, draft: &EntryDraft) -> Result<Entry, RemoteError> {
        self.begin(StoreCall::Insert {
            owner: owner.owner_id().to_string(),
        })?;
        let now = Utc::now();
        let entry = Entry {
            id: Uuid::new_v4().to_string(),
            owner_id: owner.owner_id().to_string(),
            timestamp: draft.timestamp.unwrap_or(now),
            bristol_score: draft.bristol_score,
            urgency_level: draft.urgency_level,
            pain_level: draft.pain_level,
            mood_emoji: draft.mood_emoji.map(|m| m.emoji().to_string()),
            notes: draft.notes.clone(),
            created_at: Some(now),
        };
        self.inner.borrow_mut().rows.push(entry.clone());
        Ok(entry)
    }

    fn update(&self, owner: &Session, id: &str, patch: &EntryPatch) -> Result<Entry, RemoteError> {
        self.begin(StoreCall::Update { id: id.to_string() })?;
        let mut inner = self.inner.borrow_mut();
        let row = inner
            .rows
            .iter_mut()
            .find(|row| row.id == id && row.owner_id == owner.owner_id())
            .ok_or_else(|| RemoteError::NotFound(id.to_string()))?;
        patch.apply_to(row);
        Ok(row.clone())
    }

    fn delete(&self, owner: &Session, id: &str) -> Result<(), RemoteError> {
        self.begin(StoreCall::Delete { id: id.to_string() })?;
        self.inner
            .borrow_mut()
            .rows
            .retain(|row| !(row.id == id && row.owner_id == owner.owner_id()));
        Ok(())
    }
}
