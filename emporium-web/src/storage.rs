//! Two-tier persistent key-value store.
//!
//! Session state can live in either the durable store (survives a
//! browser restart) or the session-scoped store, selected by the
//! remember-me choice at login. Reads always consult the durable tier
//! first. Storage failures are swallowed by policy: loss of
//! persistence is non-fatal to in-memory operation, so errors are
//! logged at debug level and never surfaced.

use gloo_storage::{LocalStorage, SessionStorage, Storage};

/// Bearer token for the current session.
pub const TOKEN_KEY: &str = "emporium.token.v1";
/// Serialized [`shared::models::SessionUser`] record.
pub const USER_KEY: &str = "emporium.user.v1";
/// Serialized favorites array.
pub const FAVORITES_KEY: &str = "emporium.favorites.v1";

/// Which backing store a write lands in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageTier {
    /// Survives browser restarts; chosen when remember-me is set.
    Durable,
    /// Scoped to the current tab session.
    Session,
}

impl StorageTier {
    /// Tier selected by the remember-me flag.
    pub fn for_remember(remember: bool) -> Self {
        if remember { Self::Durable } else { Self::Session }
    }
}

/// Read a value, durable tier first, session tier as fallback.
pub fn get(key: &str) -> Option<String> {
    LocalStorage::get::<String>(key)
        .ok()
        .or_else(|| SessionStorage::get::<String>(key).ok())
}

/// Write a value to the chosen tier and drop any copy in the other
/// tier so the two never disagree.
pub fn set(key: &str, value: &str, tier: StorageTier) {
    let result = match tier {
        StorageTier::Durable => {
            SessionStorage::delete(key);
            LocalStorage::set(key, value)
        }
        StorageTier::Session => {
            LocalStorage::delete(key);
            SessionStorage::set(key, value)
        }
    };
    if let Err(err) = result {
        log::debug!("storage write for {key} failed: {err}");
    }
}

/// Remove a key from both tiers.
pub fn remove(key: &str) {
    LocalStorage::delete(key);
    SessionStorage::delete(key);
}

/// Remove every session-owned key from both tiers.
pub fn clear_session_keys() {
    remove(TOKEN_KEY);
    remove(USER_KEY);
}
