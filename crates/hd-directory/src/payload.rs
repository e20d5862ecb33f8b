//! JSON payload helpers shared by the directories.

use serde_json::{Map, Value};

use hd_core::errors::{Error, Result};

/// Borrow `payload` as a JSON object.
pub(crate) fn object<'a>(payload: &'a Value, what: &str) -> Result<&'a Map<String, Value>> {
    payload
        .as_object()
        .ok_or_else(|| Error::Validation(format!("{what} payload must be a JSON object")))
}

/// Check that every field in `required` is present, naming the missing ones.
pub(crate) fn require<'a>(
    payload: &'a Value,
    required: &[&str],
    what: &str,
) -> Result<&'a Map<String, Value>> {
    let map = object(payload, what)?;
    let missing: Vec<&str> = required
        .iter()
        .copied()
        .filter(|field| !map.contains_key(*field))
        .collect();
    if !missing.is_empty() {
        return Err(Error::Validation(format!(
            "{what} is missing required fields: {}",
            missing.join(", ")
        )));
    }
    Ok(map)
}

/// The string value of `field`, or `None` if it is absent.
pub(crate) fn string(map: &Map<String, Value>, field: &str) -> Result<Option<String>> {
    match map.get(field) {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(Error::Validation(format!(
            "field '{field}' must be a string, got {other}"
        ))),
    }
}

/// The string value of a field already known to be present.
pub(crate) fn required_string(map: &Map<String, Value>, field: &str) -> Result<String> {
    string(map, field)?.ok_or_else(|| Error::Validation(format!("field '{field}' is required")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn lists_every_missing_field() {
        let err = require(&json!({"team": "ops"}), &["team", "day", "start"], "hours").unwrap_err();
        assert_eq!(
            err,
            Error::Validation("hours is missing required fields: day, start".into())
        );
    }

    #[test]
    fn rejects_non_objects_and_non_strings() {
        assert!(require(&Value::Null, &["id"], "friend").is_err());
        let value = json!({"id": 7});
        let map = require(&value, &["id"], "friend").unwrap();
        assert!(string(map, "id").is_err());
        assert_eq!(string(map, "notes").unwrap(), None);
    }
}
