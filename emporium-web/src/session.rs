//! Session lifecycle: restore on startup, login/register/logout, and
//! stale-session teardown.
//!
//! The session module is the only writer of the session keys in
//! storage and of the in-memory session held in
//! [`crate::models::app_state::AppState`]; everything else reads.
//! Fetched server data is never cached across session changes: pages
//! hold their fetch state locally and re-fetch on mount, and the
//! forced reload on credential expiry restarts the whole app.

use shared::models::{AuthResponse, LoginRequest, RegisterRequest, Role, Session, SessionUser};

use crate::api::{ApiError, EmporiumClient};
use crate::routes::MainRoute;
use crate::storage::{self, StorageTier};

/// Read the persisted session back at startup.
///
/// The token, the user record, and a valid role must all be present;
/// anything less actively clears the stale keys and yields an
/// unauthenticated session, so a partially written or corrupted
/// record can never reach the role guards.
pub fn restore() -> Option<Session> {
    let token = storage::get(storage::TOKEN_KEY);
    let user_json = storage::get(storage::USER_KEY);
    let restored = validate_stored(token, user_json);
    if restored.is_none() {
        storage::clear_session_keys();
    }
    restored
}

/// Pure half of [`restore`]: both values must be present and the user
/// must parse with a known role.
fn validate_stored(token: Option<String>, user_json: Option<String>) -> Option<Session> {
    let token = token?;
    let user: SessionUser = serde_json::from_str(&user_json?).ok()?;
    Some(Session { token, user })
}

/// Authenticate and persist the resulting session.
///
/// On success, returns the session together with the suggested
/// post-login redirect; `None` means "return to wherever the user was
/// headed, or home". On failure the stored state is untouched and the
/// error is a display-ready message.
pub async fn login(
    email: String,
    password: String,
    remember: bool,
) -> Result<(Session, Option<MainRoute>), String> {
    let client = EmporiumClient::shared();
    let request = LoginRequest { email, password };
    let response = client.login(&request).await.map_err(auth_error)?;
    Ok(establish(response, remember))
}

/// Create an account and persist the immediately authenticated
/// session. Same contract as [`login`].
pub async fn register(
    email: String,
    username: String,
    password: String,
    remember: bool,
) -> Result<(Session, Option<MainRoute>), String> {
    let client = EmporiumClient::shared();
    let request = RegisterRequest {
        email,
        username,
        password,
    };
    let response = client.register(&request).await.map_err(auth_error)?;
    Ok(establish(response, remember))
}

/// End the session. The backend call is best-effort by policy: logout
/// always succeeds locally even when the network call does not.
pub async fn logout() {
    let client = EmporiumClient::shared();
    if let Err(err) = client.logout().await {
        log::debug!("logout call failed (ignored): {err}");
    }
    storage::clear_session_keys();
}

/// Stale-session teardown: wipe both storage tiers and reload, forcing
/// the app back to a consistent unauthenticated state.
pub fn expire_and_reload() {
    storage::clear_session_keys();
    if let Some(window) = web_sys::window() {
        if window.location().reload().is_err() {
            log::error!("failed to reload after session expiry");
        }
    }
}

/// Suggested landing route for a fresh session: back-office roles go
/// straight to the employee portal.
pub fn post_login_redirect(role: Role) -> Option<MainRoute> {
    role.is_back_office().then_some(MainRoute::EmployeePortal)
}

fn establish(response: AuthResponse, remember: bool) -> (Session, Option<MainRoute>) {
    let user = response.user.unwrap_or_default().normalize();
    let session = Session {
        token: response.token,
        user,
    };
    persist(&session, remember);
    let redirect = post_login_redirect(session.user.role);
    (session, redirect)
}

fn persist(session: &Session, remember: bool) {
    let tier = StorageTier::for_remember(remember);
    if let Some((token, user_json)) = persist_payload(session) {
        storage::set(storage::TOKEN_KEY, &token, tier);
        storage::set(storage::USER_KEY, &user_json, tier);
    }
}

/// Both halves of the stored pair, or neither. The user record is
/// serialized before anything is written so a serialization failure
/// can never leave a token in storage without its user.
fn persist_payload(session: &Session) -> Option<(String, String)> {
    match serde_json::to_string(&session.user) {
        Ok(user_json) => Some((session.token.clone(), user_json)),
        Err(err) => {
            log::debug!("session not persisted: {err}");
            None
        }
    }
}

fn auth_error(err: ApiError) -> String {
    match err.status() {
        Some(401) => "Invalid credentials".to_string(),
        _ => err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_json(role: &str) -> String {
        format!(r#"{{"id":"u1","name":"Ada","role":"{role}"}}"#)
    }

    #[test]
    fn valid_triple_restores_with_exact_role() {
        for role in ["shopper", "employee", "admin"] {
            let session =
                validate_stored(Some("t1".into()), Some(user_json(role))).expect("valid session");
            assert_eq!(session.token, "t1");
            assert_eq!(session.user.role.as_str(), role);
        }
    }

    #[test]
    fn missing_token_is_unauthenticated() {
        assert!(validate_stored(None, Some(user_json("admin"))).is_none());
    }

    #[test]
    fn missing_user_is_unauthenticated() {
        assert!(validate_stored(Some("t1".into()), None).is_none());
    }

    #[test]
    fn unknown_role_is_unauthenticated() {
        assert!(validate_stored(Some("t1".into()), Some(user_json("SuperAdmin"))).is_none());
        assert!(validate_stored(Some("t1".into()), Some(user_json("guest"))).is_none());
    }

    #[test]
    fn corrupted_user_is_unauthenticated() {
        assert!(validate_stored(Some("t1".into()), Some("{not json".into())).is_none());
    }

    /// The persisted pair is produced atomically: both halves come
    /// back together and restore to the same session.
    #[test]
    fn persisted_pair_restores_the_same_session() {
        let session = Session {
            token: "t1".into(),
            user: SessionUser {
                id: "u1".into(),
                name: "Ada".into(),
                email: Some("ada@example.com".into()),
                role: Role::Employee,
                avatar_url: None,
            },
        };
        let (token, user_json) = persist_payload(&session).expect("serializable session");
        assert_eq!(token, session.token);
        let restored = validate_stored(Some(token), Some(user_json)).expect("valid pair");
        assert_eq!(restored, session);
    }

    #[test]
    fn back_office_roles_redirect_to_portal() {
        assert_eq!(
            post_login_redirect(Role::Employee),
            Some(MainRoute::EmployeePortal)
        );
        assert_eq!(
            post_login_redirect(Role::Admin),
            Some(MainRoute::EmployeePortal)
        );
        assert_eq!(post_login_redirect(Role::Shopper), None);
    }

    #[test]
    fn rejected_credentials_become_a_friendly_message() {
        let err = ApiError::Status {
            status: 401,
            body: String::new(),
            message: "HTTP error 401".into(),
        };
        assert_eq!(auth_error(err), "Invalid credentials");
    }

    #[test]
    fn other_failures_keep_their_message() {
        let err = ApiError::Status {
            status: 409,
            body: String::new(),
            message: "Category already exists.".into(),
        };
        assert_eq!(auth_error(err), "Category already exists.");
        assert_eq!(
            auth_error(ApiError::Transport("dns".into())),
            "Unable to connect to server"
        );
    }
}
