use reqwest::Method;
use reqwest::blocking::RequestBuilder;
use serde::Serialize;

use super::EntryStore;
use crate::entry::{Entry, EntryDraft, EntryPatch};
use crate::error::RemoteError;
use crate::rest::RestClient;
use crate::session::Session;

const ENTRIES: &str = "rest/v1/entries";

/// The hosted `entries` table, reached through its PostgREST interface.
#[derive(Debug, Clone)]
pub struct RestEntryStore {
    client: RestClient,
}

#[derive(Serialize)]
struct InsertRow<'a> {
    user_id: &'a str,
    #[serde(flatten)]
    draft: &'a EntryDraft,
}

impl RestEntryStore {
    pub fn new(client: RestClient) -> Self {
        Self { client }
    }

    fn list_request(&self, owner: &Session) -> RequestBuilder {
        self.client
            .request(Method::GET, ENTRIES, Some(owner))
            .query(&[
                ("select", "*".to_string()),
                ("user_id", format!("eq.{}", owner.owner_id())),
                ("order", "timestamp.desc".to_string()),
            ])
    }

    fn insert_request(&self, owner: &Session, draft: &EntryDraft) -> RequestBuilder {
        let row = InsertRow {
            user_id: owner.owner_id(),
            draft,
        };
        self.client
            .request(Method::POST, ENTRIES, Some(owner))
            .header("Prefer", "return=representation")
            .json(&row)
    }

    fn update_request(&self, owner: &Session, id: &str, patch: &EntryPatch) -> RequestBuilder {
        self.client
            .request(Method::PATCH, ENTRIES, Some(owner))
            .query(&[("id", format!("eq.{id}"))])
            .header("Prefer", "return=representation")
            .json(patch)
    }

    fn delete_request(&self, owner: &Session, id: &str) -> RequestBuilder {
        self.client
            .request(Method::DELETE, ENTRIES, Some(owner))
            .query(&[("id", format!("eq.{id}"))])
    }
}

/// Write calls answer with an array of the affected rows.
fn single_row(body: &str, id: &str) -> Result<Entry, RemoteError> {
    let rows: Vec<Entry> = serde_json::from_str(body)?;
    rows.into_iter()
        .next()
        .ok_or_else(|| RemoteError::NotFound(id.to_string()))
}

impl EntryStore for RestEntryStore {
    fn list(&self, owner: &Session) -> Result<Vec<Entry>, RemoteError> {
        let body = self.client.send(self.list_request(owner))?;
        let rows: Vec<Entry> = serde_json::from_str(&body)?;
        tracing::debug!(owner = owner.owner_id(), rows = rows.len(), "listed entries");
        Ok(rows)
    }

    fn insert(&self, owner: &Session, draft: &EntryDraft) -> Result<Entry, RemoteError> {
        let body = self.client.send(self.insert_request(owner, draft))?;
        single_row(&body, "new entry")
    }

    fn update(&self, owner: &Session, id: &str, patch: &EntryPatch) -> Result<Entry, RemoteError> {
        let body = self.client.send(self.update_request(owner, id, patch))?;
        single_row(&body, id)
    }

    fn delete(&self, owner: &Session, id: &str) -> Result<(), RemoteError> {
        self.client.send(self.delete_request(owner, id))?;
        Ok(())
    }
}
