//! The local copy of the current owner's entries.

use crate::entry::{Entry, EntryDraft, EntryPatch};
use crate::error::{Error, Operation};
use crate::session::Session;
use crate::store::EntryStore;

/// Entries of the current owner, newest first, kept in step with an [`EntryStore`].
///
/// Every write goes to the store first; the local list only changes once the store
/// has accepted it, so a failed call leaves the cache exactly as it was.
#[derive(Debug)]
pub struct EntryCache<S> {
    store: S,
    owner: Option<Session>,
    entries: Vec<Entry>,
}

impl<S: EntryStore> EntryCache<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            owner: None,
            entries: Vec::new(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn owner(&self) -> Option<&Session> {
        self.owner.as_ref()
    }

    /// Newest `timestamp` first.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn get(&self, id: &str) -> Option<&Entry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// Replaces the owner without touching the entries. Callers reload afterwards.
    pub(crate) fn set_owner(&mut self, owner: Option<Session>) {
        self.owner = owner;
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }

    /// Replaces the cache with the owner's entries from the store. Without an owner the
    /// cache is simply emptied.
    pub fn load(&mut self) -> Result<(), Error> {
        let Some(owner) = &self.owner else {
            self.entries.clear();
            return Ok(());
        };
        let entries = self
            .store
            .list(owner)
            .map_err(Error::remote(Operation::LoadEntries))?;
        tracing::debug!(owner = owner.owner_id(), count = entries.len(), "entries loaded");
        self.entries = entries;
        Ok(())
    }

    pub fn refresh(&mut self) -> Result<(), Error> {
        self.load()
    }

    /// Logs a new entry for the current owner.
    ///
    /// The stored entry is placed where it keeps the list newest first; when it
    /// shares its timestamp with cached entries it goes ahead of them.
    pub fn create(&mut self, draft: EntryDraft) -> Result<&Entry, Error> {
        let owner = self.owner.as_ref().ok_or(Error::AuthenticationRequired)?;
        let draft = draft.normalized();
        draft.validate()?;
        let entry = self
            .store
            .insert(owner, &draft)
            .map_err(Error::remote(Operation::CreateEntry))?;
        tracing::debug!(id = %entry.id, "entry created");
        let index = self.insert_sorted(entry);
        Ok(&self.entries[index])
    }

    /// Applies a partial update and swaps in the stored result. An id that isn't
    /// cached leaves the cache unchanged.
    pub fn update(&mut self, id: &str, patch: EntryPatch) -> Result<Entry, Error> {
        let owner = self.owner.as_ref().ok_or(Error::AuthenticationRequired)?;
        let patch = patch.normalized();
        patch.validate()?;
        let updated = self
            .store
            .update(owner, id, &patch)
            .map_err(Error::remote(Operation::UpdateEntry))?;
        tracing::debug!(id, "entry updated");
        if let Some(index) = self.position(id) {
            self.entries.remove(index);
            self.insert_sorted(updated.clone());
        }
        Ok(updated)
    }

    /// Deletes remotely, then locally. Removing an id the cache doesn't hold is a no-op.
    pub fn delete(&mut self, id: &str) -> Result<(), Error> {
        let owner = self.owner.as_ref().ok_or(Error::AuthenticationRequired)?;
        self.store
            .delete(owner, id)
            .map_err(Error::remote(Operation::DeleteEntry))?;
        tracing::debug!(id, "entry deleted");
        self.entries.retain(|entry| entry.id != id);
        Ok(())
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id == id)
    }

    fn insert_sorted(&mut self, entry: Entry) -> usize {
        let index = self
            .entries
            .partition_point(|cached| cached.timestamp > entry.timestamp);
        self.entries.insert(index, entry);
        index
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RemoteError;
    use crate::store::{MemoryStore, StoreCall};
    use crate::tests::common::{mk_entry_for, mk_session, utc};
    use pretty_assertions::assert_eq;

    fn ids<S: EntryStore>(cache: &EntryCache<S>) -> Vec<&str> {
        cache.entries().iter().map(|e| e.id.as_str()).collect()
    }

    fn loaded_cache() -> EntryCache<MemoryStore> {
        let store = MemoryStore::with_entries(vec![
            mk_entry_for("owner-1", "old", "2025-08-10T08:00:00Z"),
            mk_entry_for("owner-1", "new", "2025-08-14T08:00:00Z"),
            mk_entry_for("owner-2", "theirs", "2025-08-12T08:00:00Z"),
        ]);
        let mut cache = EntryCache::new(store);
        cache.set_owner(Some(mk_session("owner-1")));
        cache.load().unwrap();
        cache
    }

    #[test]
    fn load_replaces_with_owner_entries_newest_first() {
        let cache = loaded_cache();
        assert_eq!(ids(&cache), vec!["new", "old"]);
    }

    #[test]
    fn load_without_owner_clears_without_calling_store() {
        let mut cache = loaded_cache();
        cache.set_owner(None);
        cache.load().unwrap();
        assert!(cache.entries().is_empty());
        assert_eq!(cache.store().calls().len(), 1);
    }

    #[test]
    fn create_without_owner_fails_before_any_call() {
        let mut cache = EntryCache::new(MemoryStore::new());
        let err = cache.create(EntryDraft::default()).unwrap_err();
        assert!(matches!(err, Error::AuthenticationRequired));
        assert!(cache.store().calls().is_empty());
    }

    #[test]
    fn update_without_owner_fails_before_any_call() {
        let mut cache = EntryCache::new(MemoryStore::new());
        let patch = EntryPatch {
            bristol_score: Some(9),
            ..Default::default()
        };
        let err = cache.update("x", patch).unwrap_err();
        assert!(matches!(err, Error::AuthenticationRequired));
        assert!(cache.store().calls().is_empty());
    }

    #[test]
    fn delete_without_owner_fails_before_any_call() {
        let mut cache = EntryCache::new(MemoryStore::new());
        let err = cache.delete("x").unwrap_err();
        assert!(matches!(err, Error::AuthenticationRequired));
        assert!(cache.store().calls().is_empty());
    }

    #[test]
    fn signed_out_cache_keeps_entries_until_reloaded() {
        let mut cache = loaded_cache();
        cache.set_owner(None);
        assert!(matches!(cache.delete("new"), Err(Error::AuthenticationRequired)));
        assert_eq!(ids(&cache), vec!["new", "old"]);
        assert_eq!(cache.store().calls().len(), 1);
    }

    #[test]
    fn create_rejects_invalid_draft_before_any_call() {
        let mut cache = loaded_cache();
        let draft = EntryDraft {
            bristol_score: 8,
            ..Default::default()
        };
        assert!(matches!(
            cache.create(draft),
            Err(Error::InvalidEntry { field: "bristol_score", .. })
        ));
        assert_eq!(cache.store().calls().len(), 1);
    }

    #[test]
    fn created_entry_goes_to_the_head_when_newest() {
        let mut cache = loaded_cache();
        let draft = EntryDraft {
            timestamp: Some(utc("2025-08-15T08:00:00Z")),
            ..Default::default()
        };
        let id = cache.create(draft).unwrap().id.clone();
        assert_eq!(cache.entries()[0].id, id);
        assert_eq!(cache.entries().len(), 3);
    }

    #[test]
    fn backdated_entry_keeps_newest_first_order() {
        let mut cache = loaded_cache();
        let draft = EntryDraft {
            timestamp: Some(utc("2025-08-12T08:00:00Z")),
            ..Default::default()
        };
        let id = cache.create(draft).unwrap().id.clone();
        assert_eq!(ids(&cache), vec!["new", id.as_str(), "old"]);
    }

    #[test]
    fn same_timestamp_entry_goes_first() {
        let mut cache = loaded_cache();
        let draft = EntryDraft {
            timestamp: Some(utc("2025-08-14T08:00:00Z")),
            ..Default::default()
        };
        let id = cache.create(draft).unwrap().id.clone();
        assert_eq!(ids(&cache), vec![id.as_str(), "new", "old"]);
    }

    #[test]
    fn failed_create_leaves_cache_untouched() {
        let mut cache = loaded_cache();
        let before = cache.entries().to_vec();
        cache.store().fail_next(RemoteError::Status {
            status: 500,
            message: "boom".into(),
        });
        let err = cache.create(EntryDraft::default()).unwrap_err();
        assert!(matches!(
            err,
            Error::RemoteOperationFailed {
                operation: Operation::CreateEntry,
                ..
            }
        ));
        assert_eq!(cache.entries(), before.as_slice());
    }

    #[test]
    fn update_swaps_in_store_representation() {
        let mut cache = loaded_cache();
        let patch = EntryPatch {
            urgency_level: Some(5),
            notes: Some(Some("after coffee".into())),
            ..Default::default()
        };
        let updated = cache.update("old", patch).unwrap();
        assert_eq!(updated.urgency_level, 5);
        assert_eq!(cache.get("old"), Some(&updated));
        assert_eq!(ids(&cache), vec!["new", "old"]);
    }

    #[test]
    fn update_that_moves_timestamp_repositions_entry() {
        let mut cache = loaded_cache();
        let patch = EntryPatch {
            timestamp: Some(utc("2025-08-16T08:00:00Z")),
            ..Default::default()
        };
        cache.update("old", patch).unwrap();
        assert_eq!(ids(&cache), vec!["old", "new"]);
    }

    #[test]
    fn failed_update_leaves_cache_untouched() {
        let mut cache = loaded_cache();
        let before = cache.entries().to_vec();
        let err = cache
            .update("theirs", EntryPatch {
                pain_level: Some(2),
                ..Default::default()
            })
            .unwrap_err();
        assert!(matches!(
            err,
            Error::RemoteOperationFailed {
                source: RemoteError::NotFound(_),
                ..
            }
        ));
        assert_eq!(cache.entries(), before.as_slice());
    }

    #[test]
    fn delete_removes_locally_after_store() {
        let mut cache = loaded_cache();
        cache.delete("new").unwrap();
        assert_eq!(ids(&cache), vec!["old"]);
        assert!(cache.store().rows_of("owner-1").iter().all(|e| e.id != "new"));
    }

    #[test]
    fn delete_of_uncached_id_still_reaches_store() {
        let mut cache = loaded_cache();
        cache.delete("not-cached").unwrap();
        assert_eq!(ids(&cache), vec!["new", "old"]);
        assert_eq!(
            cache.store().calls().last(),
            Some(&StoreCall::Delete {
                id: "not-cached".into()
            })
        );
    }

    #[test]
    fn failed_delete_keeps_entry() {
        let mut cache = loaded_cache();
        cache.store().fail_next(RemoteError::PermissionDenied);
        assert!(cache.delete("new").is_err());
        assert_eq!(ids(&cache), vec!["new", "old"]);
    }

    #[test]
    fn last_update_to_arrive_wins() {
        let mut cache = loaded_cache();
        cache
            .update("new", EntryPatch {
                bristol_score: Some(2),
                ..Default::default()
            })
            .unwrap();
        cache
            .update("new", EntryPatch {
                bristol_score: Some(6),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(cache.get("new").map(|e| e.bristol_score), Some(6));
    }
}
