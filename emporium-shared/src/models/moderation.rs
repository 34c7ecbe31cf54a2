use serde::{Deserialize, Serialize};

use super::Role;

/// Moderation state attached to newly created products and categories.
///
/// Never user-selectable: derived from the submitting actor's role at
/// the moment the form is submitted.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ModerationStatus {
    Approved,
    Unapproved,
}

impl ModerationStatus {
    /// Derive the status for a submission by the given role: admins
    /// publish directly, employees submit for approval.
    #[must_use]
    pub const fn for_role(role: Role) -> Self {
        match role {
            Role::Admin => Self::Approved,
            Role::Employee | Role::Shopper => Self::Unapproved,
        }
    }

    /// Numeric `state` code used by the category endpoint.
    #[must_use]
    pub const fn as_state(self) -> i32 {
        match self {
            Self::Approved => 1,
            Self::Unapproved => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_follows_role() {
        assert_eq!(
            ModerationStatus::for_role(Role::Admin),
            ModerationStatus::Approved
        );
        assert_eq!(
            ModerationStatus::for_role(Role::Employee),
            ModerationStatus::Unapproved
        );
        assert_eq!(
            ModerationStatus::for_role(Role::Shopper),
            ModerationStatus::Unapproved
        );
    }

    #[test]
    fn numeric_state_codes() {
        assert_eq!(ModerationStatus::Approved.as_state(), 1);
        assert_eq!(ModerationStatus::Unapproved.as_state(), 0);
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&ModerationStatus::Approved).unwrap(),
            r#""approved""#
        );
        assert_eq!(
            serde_json::to_string(&ModerationStatus::Unapproved).unwrap(),
            r#""unapproved""#
        );
    }
}
