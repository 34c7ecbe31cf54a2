//! Deserialization helpers for loosely typed backend payloads.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Accepts a string or a number and yields its string form.
///
/// The backend is inconsistent about identifier types (some endpoints
/// return numeric ids, others strings), so anything identifier-shaped
/// goes through this.
pub fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number, got {other}"
        ))),
    }
}

/// Optional variant of [`string_or_number`]; missing and `null` both
/// yield `None`.
pub fn opt_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(serde::de::Error::custom(format!(
            "expected string or number, got {other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Wrapper {
        #[serde(deserialize_with = "super::string_or_number")]
        id: String,
        #[serde(default, deserialize_with = "super::opt_string_or_number")]
        parent: Option<String>,
    }

    #[test]
    fn accepts_string_ids() {
        let w: Wrapper = serde_json::from_str(r#"{"id":"abc"}"#).unwrap();
        assert_eq!(w.id, "abc");
        assert_eq!(w.parent, None);
    }

    #[test]
    fn accepts_numeric_ids() {
        let w: Wrapper = serde_json::from_str(r#"{"id":42,"parent":7}"#).unwrap();
        assert_eq!(w.id, "42");
        assert_eq!(w.parent.as_deref(), Some("7"));
    }

    #[test]
    fn null_parent_is_none() {
        let w: Wrapper = serde_json::from_str(r#"{"id":"x","parent":null}"#).unwrap();
        assert_eq!(w.parent, None);
    }

    #[test]
    fn rejects_other_shapes() {
        assert!(serde_json::from_str::<Wrapper>(r#"{"id":[1]}"#).is_err());
    }
}
