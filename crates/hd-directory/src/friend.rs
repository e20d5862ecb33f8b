//! The friends directory.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use hd_core::errors::{Error, Result};

use crate::payload;
use crate::store::{MemoryStore, Record, RecordStore};

const REQUIRED: [&str; 6] = ["id", "firstName", "lastName", "telephone", "email", "notes"];

/// One entry in the friends directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Friend {
    /// Caller-chosen identifier, unique case-insensitively.
    pub id: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Telephone number, free-form.
    pub telephone: String,
    /// Email address, free-form.
    pub email: String,
    /// Free-form notes.
    pub notes: String,
}

impl Friend {
    /// Build a friend from a JSON payload.  All six fields are required and
    /// must be strings; any other fields are ignored.
    ///
    /// # Errors
    /// [`Error::Validation`] naming the missing or mistyped fields.
    pub fn from_payload(payload: &Value) -> Result<Self> {
        let map = payload::require(payload, &REQUIRED, "friend")?;
        let id = payload::required_string(map, "id")?;
        if id.trim().is_empty() {
            return Err(Error::Validation("friend id must not be empty".into()));
        }
        Ok(Self {
            id,
            first_name: payload::required_string(map, "firstName")?,
            last_name: payload::required_string(map, "lastName")?,
            telephone: payload::required_string(map, "telephone")?,
            email: payload::required_string(map, "email")?,
            notes: payload::required_string(map, "notes")?,
        })
    }
}

impl std::fmt::Display for Friend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "friend '{}'", self.id)
    }
}

impl Record for Friend {
    fn key(&self) -> String {
        self.id.clone()
    }
}

/// CRUD over [`Friend`] records.
#[derive(Clone)]
pub struct FriendDirectory {
    store: Arc<dyn RecordStore<Friend>>,
}

impl std::fmt::Debug for FriendDirectory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FriendDirectory").finish_non_exhaustive()
    }
}

impl Default for FriendDirectory {
    fn default() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }
}

impl FriendDirectory {
    /// A directory over the given store.
    pub fn new(store: Arc<dyn RecordStore<Friend>>) -> Self {
        Self { store }
    }

    /// An empty, in-memory directory.
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Every friend, ordered by id.
    pub fn friends(&self) -> Result<Vec<Friend>> {
        self.store.fetch_all()
    }

    /// The friend with `id` (case-insensitive).
    pub fn friend(&self, id: &str) -> Result<Friend> {
        tracing::debug!(id, "friend lookup");
        self.store
            .fetch(id)?
            .ok_or_else(|| Error::NotFound(format!("no friend with id '{id}'")))
    }

    /// Add a friend from a JSON payload.
    ///
    /// # Errors
    /// [`Error::Validation`] for a malformed payload, [`Error::Duplicate`]
    /// if the id is taken.
    pub fn create_friend(&self, payload: &Value) -> Result<Friend> {
        let friend = Friend::from_payload(payload)?;
        if let Err(err) = self.store.insert_if_absent(friend.clone()) {
            tracing::warn!(id = %friend.id, error = %err, "friend not created");
            return Err(err);
        }
        tracing::info!(id = %friend.id, "friend created");
        Ok(friend)
    }

    /// Replace the friend stored under `id` with the payload.  The payload's
    /// id may differ from `id`, but must not belong to another friend.
    pub fn update_friend(&self, id: &str, payload: &Value) -> Result<Friend> {
        let replacement = Friend::from_payload(payload)?;
        let updated = self
            .store
            .update(id, &|_| Ok(replacement.clone()))?
            .ok_or_else(|| Error::NotFound(format!("no friend with id '{id}'")))?;
        tracing::info!(id, new_id = %updated.id, "friend updated");
        Ok(updated)
    }

    /// Remove the friend with `id`.
    pub fn destroy_friend(&self, id: &str) -> Result<Friend> {
        let removed = self
            .store
            .delete(id)?
            .ok_or_else(|| Error::NotFound(format!("no friend with id '{id}'")))?;
        tracing::info!(id, "friend deleted");
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(id: &str) -> Value {
        json!({
            "id": id,
            "firstName": "Ada",
            "lastName": "Lovelace",
            "telephone": "555-0100",
            "email": "ada@example.com",
            "notes": "",
            "favouriteColour": "green",
        })
    }

    #[test]
    fn extra_fields_are_ignored() {
        let friend = Friend::from_payload(&payload("ada")).unwrap();
        let back = serde_json::to_value(&friend).unwrap();
        assert_eq!(back.as_object().unwrap().len(), 6);
        assert_eq!(back["firstName"], "Ada");
    }

    #[test]
    fn missing_fields_are_listed() {
        let err = Friend::from_payload(&json!({"id": "x", "email": "x@y"})).unwrap_err();
        let Error::Validation(msg) = err else {
            panic!("expected validation error");
        };
        assert!(msg.contains("firstName, lastName, telephone, notes"), "{msg}");
    }

    #[test]
    fn update_to_taken_id_is_duplicate() {
        let dir = FriendDirectory::in_memory();
        dir.create_friend(&payload("ada")).unwrap();
        dir.create_friend(&payload("grace")).unwrap();
        assert!(matches!(
            dir.update_friend("grace", &payload("ADA")),
            Err(Error::Duplicate(_))
        ));
    }
}
