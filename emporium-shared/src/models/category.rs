use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::de;
use super::moderation::ModerationStatus;
use super::user::CreatedBy;

/// User reference embedded in category records.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryCreator {
    /// Identifier of the referenced user.
    #[serde(deserialize_with = "de::string_or_number")]
    pub id: String,

    /// Display name.
    #[serde(default)]
    pub name: String,

    /// Email address.
    #[serde(default)]
    pub email: String,
}

/// Category as returned by the catalog endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// External identifier.
    #[serde(deserialize_with = "de::string_or_number")]
    pub id: String,

    /// Display name.
    pub name: String,

    /// URL slug.
    #[serde(default)]
    pub slug: Option<String>,

    /// Backend numeric moderation state; see
    /// [`ModerationStatus::as_state`] for the mapping.
    #[serde(default)]
    pub state: i32,

    /// Identifier of the creating user.
    #[serde(default, deserialize_with = "de::opt_string_or_number")]
    pub created_by: Option<String>,

    /// Identifier of the approving user, once approved.
    #[serde(default, deserialize_with = "de::opt_string_or_number")]
    pub approved_by: Option<String>,

    /// Creation timestamp.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    /// Last-update timestamp.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,

    /// Approval timestamp, once approved.
    #[serde(default)]
    pub approved_at: Option<DateTime<Utc>>,

    /// Expanded creator record, when the backend joins it in.
    #[serde(default)]
    pub creator: Option<CategoryCreator>,

    /// Expanded approver record, when the backend joins it in.
    #[serde(default)]
    pub approver: Option<CategoryCreator>,
}

impl Category {
    /// Case-insensitive name comparison used by the duplicate check.
    #[must_use]
    pub fn name_matches(&self, candidate: &str) -> bool {
        self.name.trim().to_lowercase() == candidate.trim().to_lowercase()
    }
}

/// Client-constructed payload for the create-category form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryDraft {
    /// Display name, trimmed before submission.
    pub name: String,

    /// Moderation status derived from the submitting role.
    pub status: ModerationStatus,

    /// Attribution of the submitting actor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<CreatedBy>,
}

impl CategoryDraft {
    /// Wire payload for the category endpoint, which takes the numeric
    /// `state` rather than the semantic status.
    #[must_use]
    pub fn to_wire(&self) -> serde_json::Value {
        let mut payload = serde_json::json!({
            "name": self.name.trim(),
            "state": self.status.as_state(),
        });
        if let (Some(map), Some(created_by)) = (payload.as_object_mut(), &self.created_by) {
            map.insert(
                "createdBy".to_string(),
                serde_json::Value::String(created_by.id.clone()),
            );
        }
        payload
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;

    #[test]
    fn category_deserializes_with_nulls() {
        let body = r#"{
            "id": 3, "name": "Electronics", "slug": "electronics",
            "state": 1, "createdBy": "u1", "approvedBy": null,
            "createdAt": "2024-06-01T12:00:00Z", "updatedAt": null,
            "approvedAt": null, "creator": null, "approver": null
        }"#;
        let category: Category = serde_json::from_str(body).unwrap();
        assert_eq!(category.id, "3");
        assert_eq!(category.state, 1);
        assert!(category.approved_by.is_none());
        assert!(category.created_at.is_some());
    }

    #[test]
    fn name_match_ignores_case_and_whitespace() {
        let category: Category =
            serde_json::from_str(r#"{"id":"1","name":"Home Goods"}"#).unwrap();
        assert!(category.name_matches("  home goods "));
        assert!(!category.name_matches("home"));
    }

    #[test]
    fn wire_payload_maps_status_to_state() {
        let draft = CategoryDraft {
            name: "  Toys ".into(),
            status: ModerationStatus::for_role(Role::Employee),
            created_by: Some(CreatedBy {
                id: "u9".into(),
                role: Role::Employee,
            }),
        };
        let wire = draft.to_wire();
        assert_eq!(wire["name"], "Toys");
        assert_eq!(wire["state"], 0);
        assert_eq!(wire["createdBy"], "u9");
    }

    #[test]
    fn wire_payload_omits_missing_attribution() {
        let draft = CategoryDraft {
            name: "Toys".into(),
            status: ModerationStatus::Approved,
            created_by: None,
        };
        let wire = draft.to_wire();
        assert_eq!(wire["state"], 1);
        assert!(wire.get("createdBy").is_none());
    }
}
