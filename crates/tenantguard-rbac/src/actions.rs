//! # Actions
//!
//! Defines the actions that can be checked against an organization role.

use serde::{Deserialize, Serialize};

/// Actions that can be performed inside an organization.
///
/// - **Read**: View organization resources
/// - **Write**: Create and edit content
/// - **Delete**: Remove resources
/// - **Manage**: Administer content and members
/// - **Invite**: Invite new members
///
/// Variant order is the canonical listing order used by [`crate::ActionSet`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Read/view resource.
    Read,

    /// Create or edit resource.
    Write,

    /// Delete resource.
    Delete,

    /// Administer resources and members.
    Manage,

    /// Invite new members.
    Invite,
}

impl Action {
    /// Get the string representation of the action.
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Read => "read",
            Action::Write => "write",
            Action::Delete => "delete",
            Action::Manage => "manage",
            Action::Invite => "invite",
        }
    }

    /// Parse action from string representation.
    ///
    /// Only the exact lowercase action names are accepted. Anything else is
    /// an unknown action and is denied by the policy.
    ///
    /// # Example
    ///
    /// ```
    /// use tenantguard_rbac::actions::Action;
    ///
    /// assert_eq!(Action::parse("read"), Some(Action::Read));
    /// assert_eq!(Action::parse("INVITE"), None);
    /// assert_eq!(Action::parse("update"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "read" => Some(Action::Read),
            "write" => Some(Action::Write),
            "delete" => Some(Action::Delete),
            "manage" => Some(Action::Manage),
            "invite" => Some(Action::Invite),
            _ => None,
        }
    }

    /// Get all actions in canonical order.
    pub fn all() -> [Self; 5] {
        [
            Action::Read,
            Action::Write,
            Action::Delete,
            Action::Manage,
            Action::Invite,
        ]
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Default for Action {
    fn default() -> Self {
        Action::Read
    }
}
