//! Role hierarchy
//!
//! This module defines the organization role hierarchy used for both action
//! permissions and user management, and the platform-wide global role used
//! to detect superadmin bypass.

use serde::{Deserialize, Serialize};

/// User role within an organization.
///
/// Roles form a fixed total order. The hierarchy is: Writer < Editor < Owner
///
/// # Permission Model
///
/// - **Writer**: Can read and write content
/// - **Editor**: Can also manage content and members below them
/// - **Owner**: Full organization control including deletion and invites
///
/// # Examples
///
/// ```
/// use tenantguard_org::OrganizationRole;
///
/// assert!(OrganizationRole::Owner > OrganizationRole::Editor);
/// assert_eq!(OrganizationRole::Editor.rank(), 2);
/// assert!(OrganizationRole::Owner.at_least(OrganizationRole::Writer));
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum OrganizationRole {
    /// Can read and write content
    Writer = 1,

    /// Can manage content and members
    Editor = 2,

    /// Full organization control
    Owner = 3,
}

impl OrganizationRole {
    /// Numeric rank of the role (`Owner = 3`, `Editor = 2`, `Writer = 1`).
    pub fn rank(&self) -> u8 {
        *self as u8
    }

    /// Check if this role satisfies `required` in the hierarchy.
    ///
    /// # Returns
    ///
    /// `true` when `rank(self) >= rank(required)`
    pub fn at_least(&self, required: OrganizationRole) -> bool {
        self.rank() >= required.rank()
    }

    /// Parse role from string representation.
    ///
    /// # Arguments
    ///
    /// * `s` - Lowercase role name
    ///
    /// # Returns
    ///
    /// `Some(OrganizationRole)` if valid, `None` otherwise
    ///
    /// # Examples
    ///
    /// ```
    /// use tenantguard_org::OrganizationRole;
    ///
    /// assert_eq!(OrganizationRole::parse("owner"), Some(OrganizationRole::Owner));
    /// assert_eq!(OrganizationRole::parse("editor"), Some(OrganizationRole::Editor));
    /// assert_eq!(OrganizationRole::parse("EDITOR"), None);
    /// assert_eq!(OrganizationRole::parse("admin"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "writer" => Some(Self::Writer),
            "editor" => Some(Self::Editor),
            "owner" => Some(Self::Owner),
            _ => None,
        }
    }

    /// Get string representation of the role.
    ///
    /// # Returns
    ///
    /// Lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Writer => "writer",
            Self::Editor => "editor",
            Self::Owner => "owner",
        }
    }

    /// All roles, lowest rank first.
    pub fn all() -> [Self; 3] {
        [Self::Writer, Self::Editor, Self::Owner]
    }
}

impl std::fmt::Display for OrganizationRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Comparisons over the organization role hierarchy.
///
/// Typed roles always have a rank. Role names coming from untyped input
/// (headers, route metadata, stored strings) may not, and an unknown name
/// never satisfies a requirement, nor can it be satisfied.
///
/// # Examples
///
/// ```
/// use tenantguard_org::{OrganizationRole, RoleHierarchy};
///
/// assert_eq!(RoleHierarchy::rank_of("owner"), Some(3));
/// assert_eq!(RoleHierarchy::rank_of("superuser"), None);
/// assert!(RoleHierarchy::satisfies_str("editor", "writer"));
/// assert!(!RoleHierarchy::satisfies_str("superuser", "writer"));
/// assert!(RoleHierarchy::at_least(OrganizationRole::Owner, OrganizationRole::Editor));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct RoleHierarchy;

impl RoleHierarchy {
    /// Rank of a typed role.
    pub fn rank(role: OrganizationRole) -> u8 {
        role.rank()
    }

    /// Rank of a role name, `None` if the name is not a known role.
    pub fn rank_of(role: &str) -> Option<u8> {
        OrganizationRole::parse(role).map(|r| r.rank())
    }

    /// `rank(actual) >= rank(required)` for typed roles.
    pub fn at_least(actual: OrganizationRole, required: OrganizationRole) -> bool {
        actual.at_least(required)
    }

    /// `rank(actual) >= rank(required)` for role names.
    ///
    /// Fails closed: if either name is unknown the result is `false`.
    pub fn satisfies_str(actual: &str, required: &str) -> bool {
        match (Self::rank_of(actual), Self::rank_of(required)) {
            (Some(actual), Some(required)) => actual >= required,
            _ => false,
        }
    }
}

/// Platform-wide role of a user, independent of any organization.
///
/// Only `SuperAdmin` has an effect on organization-scoped checks: it
/// bypasses them entirely.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum GlobalRole {
    /// Regular platform user
    User,

    /// Platform administrator (no organization bypass)
    Admin,

    /// Platform superadmin (bypasses organization checks)
    SuperAdmin,
}

impl GlobalRole {
    /// Get string representation of the role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Admin => "admin",
            Self::SuperAdmin => "super_admin",
        }
    }
}

impl Default for GlobalRole {
    fn default() -> Self {
        Self::User
    }
}
