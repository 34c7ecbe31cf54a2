use serde::{Deserialize, Serialize};

use super::Role;
use super::de;

/// Request to authenticate with email/password credentials.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    /// The user's email address.
    pub email: String,

    /// The user's password.
    pub password: String,
}

/// Request to create an account; the new account is treated as
/// immediately authenticated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisterRequest {
    /// The user's email address.
    pub email: String,

    /// The user's chosen username.
    pub username: String,

    /// The user's password.
    pub password: String,
}

/// Response from the login and registration endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthResponse {
    /// Opaque bearer credential for subsequent requests.
    pub token: String,

    /// The authenticated user's record, as the backend shapes it.
    #[serde(default)]
    pub user: Option<UserPayload>,
}

/// User record as returned by the backend, before normalization.
///
/// Different backend revisions disagree on field names (`id` vs `_id`,
/// `name` vs `username`), so everything is optional here and
/// [`UserPayload::normalize`] settles the shape.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserPayload {
    /// Primary identifier, when present under its modern name.
    #[serde(default, deserialize_with = "de::opt_string_or_number")]
    pub id: Option<String>,

    /// Identifier under its legacy name.
    #[serde(
        default,
        rename = "_id",
        deserialize_with = "de::opt_string_or_number"
    )]
    pub legacy_id: Option<String>,

    /// Display name, when present under its modern name.
    #[serde(default)]
    pub name: Option<String>,

    /// Display name under its legacy name.
    #[serde(default)]
    pub username: Option<String>,

    /// Email address.
    #[serde(default)]
    pub email: Option<String>,

    /// Raw backend role string; resolved via [`Role::resolve`].
    #[serde(default)]
    pub role: Option<String>,

    /// Avatar image URL.
    #[serde(default, rename = "avatarUrl")]
    pub avatar_url: Option<String>,
}

impl UserPayload {
    /// Collapse the tolerated field variants into a [`SessionUser`].
    ///
    /// Identifier falls back `id` → `_id` → `email`; display name falls
    /// back `name` → `username` → `email`. The raw role string is
    /// resolved here, once, and never consulted again.
    #[must_use]
    pub fn normalize(self) -> SessionUser {
        let id = self
            .id
            .or(self.legacy_id)
            .or_else(|| self.email.clone())
            .unwrap_or_default();
        let name = self
            .name
            .or(self.username)
            .or_else(|| self.email.clone())
            .unwrap_or_default();
        let role = Role::resolve(self.role.as_deref().unwrap_or_default());
        SessionUser {
            id,
            name,
            email: self.email,
            role,
            avatar_url: self.avatar_url,
        }
    }
}

/// Normalized user record held in (and persisted with) the session.
///
/// The role is the resolved enum; deserializing a persisted record
/// with an unknown role string fails, which is how a stale or
/// corrupted session is detected on restore.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionUser {
    /// Stable identifier used when attributing created resources.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Email address, when the backend provided one.
    #[serde(default)]
    pub email: Option<String>,

    /// Resolved access level.
    pub role: Role,

    /// Avatar image URL.
    #[serde(default, rename = "avatarUrl")]
    pub avatar_url: Option<String>,
}

/// In-memory representation of the authenticated actor.
///
/// Invariant: a session always carries both the token and the user; a
/// partial pair read back from storage is treated as unauthenticated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Session {
    /// Opaque bearer credential.
    pub token: String,

    /// The authenticated user.
    pub user: SessionUser,
}

/// Attribution attached to create-form submissions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreatedBy {
    /// Identifier of the submitting user.
    pub id: String,

    /// Resolved role of the submitting user.
    pub role: Role,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_prefers_modern_fields() {
        let payload = UserPayload {
            id: Some("u1".into()),
            legacy_id: Some("old".into()),
            name: Some("Ada".into()),
            username: Some("ada42".into()),
            email: Some("ada@example.com".into()),
            role: Some("Employee".into()),
            avatar_url: None,
        };
        let user = payload.normalize();
        assert_eq!(user.id, "u1");
        assert_eq!(user.name, "Ada");
        assert_eq!(user.role, Role::Employee);
    }

    #[test]
    fn normalize_falls_back_through_variants() {
        let payload = UserPayload {
            legacy_id: Some("legacy-7".into()),
            username: Some("grace".into()),
            email: Some("grace@example.com".into()),
            ..UserPayload::default()
        };
        let user = payload.normalize();
        assert_eq!(user.id, "legacy-7");
        assert_eq!(user.name, "grace");
        assert_eq!(user.role, Role::Shopper);
    }

    #[test]
    fn normalize_uses_email_as_last_resort() {
        let payload = UserPayload {
            email: Some("solo@example.com".into()),
            ..UserPayload::default()
        };
        let user = payload.normalize();
        assert_eq!(user.id, "solo@example.com");
        assert_eq!(user.name, "solo@example.com");
    }

    #[test]
    fn auth_response_tolerates_numeric_id() {
        let body = r#"{"token":"t1","user":{"id":1,"name":"E","role":"Employee"}}"#;
        let response: AuthResponse = serde_json::from_str(body).unwrap();
        let user = response.user.unwrap().normalize();
        assert_eq!(user.id, "1");
        assert_eq!(user.role, Role::Employee);
    }

    #[test]
    fn auth_response_without_user() {
        let response: AuthResponse = serde_json::from_str(r#"{"token":"t1"}"#).unwrap();
        assert!(response.user.is_none());
    }

    /// The stub login payload from the backend contract resolves to an
    /// employee session.
    #[test]
    fn login_payload_resolves_to_employee() {
        let body = r#"{"token":"t1","user":{"id":"1","name":"E","role":"Employee"}}"#;
        let response: AuthResponse = serde_json::from_str(body).unwrap();
        let user = response.user.unwrap().normalize();
        let session = Session {
            token: response.token,
            user,
        };
        assert_eq!(session.token, "t1");
        assert_eq!(session.user.role, Role::Employee);
        assert!(session.user.role.is_back_office());
    }

    #[test]
    fn session_user_roundtrips_through_json() {
        let user = SessionUser {
            id: "u1".into(),
            name: "Ada".into(),
            email: None,
            role: Role::Admin,
            avatar_url: Some("https://img.example/a.png".into()),
        };
        let text = serde_json::to_string(&user).unwrap();
        assert!(text.contains(r#""role":"admin""#));
        assert!(text.contains("avatarUrl"));
        let parsed: SessionUser = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, user);
    }

    #[test]
    fn persisted_user_with_unknown_role_is_rejected() {
        let stale = r#"{"id":"u1","name":"Ada","role":"SuperAdmin"}"#;
        assert!(serde_json::from_str::<SessionUser>(stale).is_err());
    }
}
