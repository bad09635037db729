//! The remote table of entries, seen through the four calls the cache needs.

mod memory;
mod rest;

pub use memory::{MemoryStore, StoreCall};
pub use rest::RestEntryStore;

use crate::entry::{Entry, EntryDraft, EntryPatch};
use crate::error::RemoteError;
use crate::session::Session;

/// CRUD access to an owner's entries.
///
/// Access control belongs to the implementation: rows of other owners must never be
/// returned, changed or removed.
pub trait EntryStore {
    /// All of `owner`'s entries, newest `timestamp` first.
    fn list(&self, owner: &Session) -> Result<Vec<Entry>, RemoteError>;

    /// Stores a new entry for `owner` and returns it with its assigned `id` and
    /// `created_at`. A missing draft timestamp becomes the insert time.
    fn insert(&self, owner: &Session, draft: &EntryDraft) -> Result<Entry, RemoteError>;

    /// Applies `patch` to `owner`'s entry `id` and returns the stored result.
    fn update(&self, owner: &Session, id: &str, patch: &EntryPatch) -> Result<Entry, RemoteError>;

    /// Removes `owner`'s entry `id`. Removing an id that no longer exists succeeds.
    fn delete(&self, owner: &Session, id: &str) -> Result<(), RemoteError>;
}
