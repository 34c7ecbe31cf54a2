use shared::models::{Role, Session};
use yewdux::Store;

use crate::session;

/// Process-wide application state.
///
/// The session is written only by the session module's operations;
/// guards, the header, and pages read it through selectors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    pub session: Option<Session>,
}

impl Store for AppState {
    /// Initial state comes from the persisted session, validated and
    /// cleared if stale.
    fn new(_cx: &yewdux::Context) -> Self {
        Self {
            session: session::restore(),
        }
    }

    fn should_notify(&self, old: &Self) -> bool {
        self != old
    }
}

impl AppState {
    /// Resolved role of the current actor; `None` when
    /// unauthenticated, which guards treat distinctly from
    /// [`Role::Shopper`].
    pub fn role(&self) -> Option<Role> {
        self.session.as_ref().map(|session| session.user.role)
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }
}
