//! Per-team help-desk attributes (phone numbers, queue names, and so on).

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use hd_core::errors::{Error, Result};
use hd_core::utilities::normalize_key;

use crate::payload;
use crate::store::{MemoryStore, Record, RecordStore};

const FIELDS: [&str; 3] = ["team", "attribute_name", "attribute_value"];

/// A named value attached to a team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamAttribute {
    /// Store-generated identifier.
    pub id: u64,
    /// Owning team.
    pub team: String,
    /// Attribute name, unique per team (case-insensitive).
    pub attribute_name: String,
    /// Attribute value.
    pub attribute_value: String,
}

impl std::fmt::Display for TeamAttribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "attribute '{}' of team '{}'", self.attribute_name, self.team)
    }
}

impl Record for TeamAttribute {
    fn key(&self) -> String {
        self.id.to_string()
    }

    fn conflicts_with(&self, other: &Self) -> bool {
        normalize_key(&self.team) == normalize_key(&other.team)
            && normalize_key(&self.attribute_name) == normalize_key(&other.attribute_name)
    }
}

/// `{id, value}` as listed by [`TeamAttributes::attributes`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttributeEntry {
    /// Attribute id.
    pub id: u64,
    /// Attribute value.
    pub value: String,
}

/// `{id, attribute_value}` as returned by [`TeamAttributes::attribute`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttributeValue {
    /// Attribute id.
    pub id: u64,
    /// Attribute value.
    pub attribute_value: String,
}

/// CRUD over [`TeamAttribute`] records.
#[derive(Clone)]
pub struct TeamAttributes {
    store: Arc<dyn RecordStore<TeamAttribute>>,
}

impl std::fmt::Debug for TeamAttributes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TeamAttributes").finish_non_exhaustive()
    }
}

impl Default for TeamAttributes {
    fn default() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }
}

impl TeamAttributes {
    /// Attributes over the given store.
    pub fn new(store: Arc<dyn RecordStore<TeamAttribute>>) -> Self {
        Self { store }
    }

    /// An empty, in-memory attribute set.
    pub fn in_memory() -> Self {
        Self::default()
    }

    fn for_team(&self, team: &str) -> Result<Vec<TeamAttribute>> {
        let team = normalize_key(team);
        Ok(self
            .store
            .fetch_all()?
            .into_iter()
            .filter(|a| normalize_key(&a.team) == team)
            .collect())
    }

    /// Every attribute of `team`, keyed by attribute name.
    ///
    /// # Errors
    /// [`Error::NotFound`] if the team has no attributes.
    pub fn attributes(&self, team: &str) -> Result<BTreeMap<String, AttributeEntry>> {
        let found = self.for_team(team)?;
        tracing::debug!(team, count = found.len(), "attribute lookup");
        if found.is_empty() {
            return Err(Error::NotFound(format!("no attributes for team '{team}'")));
        }
        Ok(found
            .into_iter()
            .map(|a| {
                (
                    a.attribute_name,
                    AttributeEntry {
                        id: a.id,
                        value: a.attribute_value,
                    },
                )
            })
            .collect())
    }

    /// One attribute of `team`, by name (case-insensitive).
    pub fn attribute(&self, team: &str, name: &str) -> Result<AttributeValue> {
        let name_key = normalize_key(name);
        self.for_team(team)?
            .into_iter()
            .find(|a| normalize_key(&a.attribute_name) == name_key)
            .map(|a| AttributeValue {
                id: a.id,
                attribute_value: a.attribute_value,
            })
            .ok_or_else(|| {
                Error::NotFound(format!("no attribute '{name}' for team '{team}'"))
            })
    }

    /// The attribute with `id`.
    pub fn attribute_by_id(&self, id: u64) -> Result<TeamAttribute> {
        self.store
            .fetch(&id.to_string())?
            .ok_or_else(|| Error::NotFound(format!("no attribute with id {id}")))
    }

    /// Add an attribute from a payload carrying `team`, `attribute_name`
    /// and `attribute_value`.  Returns the generated id.
    ///
    /// # Errors
    /// [`Error::Validation`] for a malformed payload, [`Error::Duplicate`]
    /// if the team already has an attribute with that name.
    pub fn create_attribute(&self, payload: &Value) -> Result<u64> {
        let map = payload::require(payload, &FIELDS, "team attribute")?;
        let attribute = TeamAttribute {
            id: self.store.next_id(),
            team: payload::required_string(map, "team")?,
            attribute_name: payload::required_string(map, "attribute_name")?,
            attribute_value: payload::required_string(map, "attribute_value")?,
        };
        let id = attribute.id;
        if let Err(err) = self.store.insert_if_absent(attribute) {
            tracing::warn!(error = %err, "team attribute not created");
            return Err(err);
        }
        tracing::info!(id, "team attribute created");
        Ok(id)
    }

    /// Patch the attribute with `id`.  Fields absent from `patch` keep their
    /// current values.
    pub fn update_attribute(&self, id: u64, patch: &Value) -> Result<TeamAttribute> {
        let map = payload::object(patch, "team attribute")?;
        let team = payload::string(map, "team")?;
        let name = payload::string(map, "attribute_name")?;
        let value = payload::string(map, "attribute_value")?;
        let updated = self
            .store
            .update(&id.to_string(), &|current| {
                Ok(TeamAttribute {
                    id: current.id,
                    team: team.clone().unwrap_or_else(|| current.team.clone()),
                    attribute_name: name
                        .clone()
                        .unwrap_or_else(|| current.attribute_name.clone()),
                    attribute_value: value
                        .clone()
                        .unwrap_or_else(|| current.attribute_value.clone()),
                })
            })?
            .ok_or_else(|| Error::NotFound(format!("no attribute with id {id}")))?;
        tracing::info!(id, "team attribute updated");
        Ok(updated)
    }

    /// Remove the attribute with `id`.
    pub fn delete_attribute(&self, id: u64) -> Result<()> {
        self.store
            .delete(&id.to_string())?
            .ok_or_else(|| Error::NotFound(format!("no attribute with id {id}")))?;
        tracing::info!(id, "team attribute deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn create_and_lookup_case_insensitively() {
        let attrs = TeamAttributes::in_memory();
        let id = attrs
            .create_attribute(&json!({
                "team": "Ops",
                "attribute_name": "Phone",
                "attribute_value": "555-0199",
            }))
            .unwrap();
        let found = attrs.attribute("ops", "PHONE").unwrap();
        assert_eq!(found.id, id);
        assert_eq!(found.attribute_value, "555-0199");
        assert_eq!(attrs.attributes("OPS").unwrap()["Phone"].value, "555-0199");
    }

    #[test]
    fn same_name_on_same_team_is_duplicate() {
        let attrs = TeamAttributes::in_memory();
        let body = json!({"team": "ops", "attribute_name": "queue", "attribute_value": "a"});
        attrs.create_attribute(&body).unwrap();
        let again = json!({"team": "OPS", "attribute_name": "Queue", "attribute_value": "b"});
        assert!(matches!(attrs.create_attribute(&again), Err(Error::Duplicate(_))));
        let other_team = json!({"team": "dev", "attribute_name": "queue", "attribute_value": "b"});
        assert!(attrs.create_attribute(&other_team).is_ok());
    }
}
