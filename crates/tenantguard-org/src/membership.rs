//! Membership domain model
//!
//! A membership links a user to an organization with a role and an
//! activity flag. Stores hand memberships back joined with the member's
//! user record and the organization record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::organization::Organization;
use crate::roles::OrganizationRole;
use crate::user::User;

/// Organization membership linking a user to an organization.
///
/// At most one *active* membership is expected per (user, organization)
/// pair. That is the store's invariant; nothing here enforces it.
///
/// # Examples
///
/// ```
/// use tenantguard_org::{Membership, OrganizationRole};
///
/// let membership = Membership::new("user-1", "org-1", OrganizationRole::Editor);
/// assert!(membership.is_active);
/// assert!(membership.user.is_none());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Membership {
    /// Unique membership ID
    pub id: String,

    /// User ID
    pub user_id: String,

    /// Organization ID
    pub organization_id: String,

    /// Role within the organization
    pub role: OrganizationRole,

    /// Whether the membership is active
    pub is_active: bool,

    /// When the user joined
    pub joined_at: DateTime<Utc>,

    /// Who invited this user (if applicable)
    pub invited_by: Option<String>,

    /// Joined user record
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,

    /// Joined organization record
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<Organization>,
}

impl Membership {
    /// Creates a new active membership with no joined records.
    ///
    /// # Arguments
    ///
    /// * `user_id` - The user ID
    /// * `organization_id` - The organization ID
    /// * `role` - The user's role in the organization
    pub fn new(
        user_id: impl Into<String>,
        organization_id: impl Into<String>,
        role: OrganizationRole,
    ) -> Self {
        Self {
            id: Uuid::now_v7().to_string(),
            user_id: user_id.into(),
            organization_id: organization_id.into(),
            role,
            is_active: true,
            joined_at: Utc::now(),
            invited_by: None,
            user: None,
            organization: None,
        }
    }

    /// Set who invited this user.
    pub fn with_inviter(mut self, inviter_id: impl Into<String>) -> Self {
        self.invited_by = Some(inviter_id.into());
        self
    }

    /// Attach the joined user record.
    pub fn with_user(mut self, user: User) -> Self {
        self.user = Some(user);
        self
    }

    /// Attach the joined organization record.
    pub fn with_organization(mut self, organization: Organization) -> Self {
        self.organization = Some(organization);
        self
    }

    /// Mark the membership as removed.
    pub fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }

    /// `true` when the joined user record is present and active.
    pub fn has_active_user(&self) -> bool {
        self.user.as_ref().is_some_and(|u| u.is_active)
    }

    /// `true` when the joined organization record is present and active.
    pub fn has_active_organization(&self) -> bool {
        self.organization.as_ref().is_some_and(|o| o.is_active)
    }
}
