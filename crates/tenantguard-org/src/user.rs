//! User domain model
//!
//! Users are created and deactivated by an external user-management
//! service. The access engine only reads the activity flag and the
//! global role.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::roles::GlobalRole;

/// A platform user.
///
/// # Examples
///
/// ```
/// use tenantguard_org::{GlobalRole, User};
///
/// let user = User::new("ops@acme.test").with_global_role(GlobalRole::SuperAdmin);
/// assert!(user.is_active);
/// assert!(user.is_super_admin());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    /// Unique user ID
    pub id: String,

    /// Login email
    pub email: String,

    /// Platform-wide role
    #[serde(default)]
    pub role: GlobalRole,

    /// Whether the account is active
    pub is_active: bool,

    /// When the account was created
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Creates a new active user with the `User` global role and a UUID v7 id.
    pub fn new(email: impl Into<String>) -> Self {
        Self::with_id(Uuid::now_v7().to_string(), email)
    }

    /// Creates a new active user with an explicit id.
    pub fn with_id(id: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
            role: GlobalRole::User,
            is_active: true,
            created_at: Utc::now(),
        }
    }

    /// Set the platform-wide role.
    pub fn with_global_role(mut self, role: GlobalRole) -> Self {
        self.role = role;
        self
    }

    /// Mark the account as deactivated.
    pub fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }

    /// Whether this user bypasses all organization-scoped checks.
    pub fn is_super_admin(&self) -> bool {
        self.role == GlobalRole::SuperAdmin
    }
}
