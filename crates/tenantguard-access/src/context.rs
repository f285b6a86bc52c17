//! Permission queries and decisions
//!
//! A [`PermissionContext`] describes who wants to do what, where. The
//! evaluator answers it with a [`Decision`]; every denial carries one of
//! the stable [`DenialReason`] strings.

use serde::{Deserialize, Serialize};

/// Why a permission check was denied.
///
/// The string forms are part of the public contract: guards and clients
/// match on them verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DenialReason {
    /// User or organization id was empty
    MissingIdentifiers,
    /// No user with the given id
    UserNotFound,
    /// Organization missing or inactive
    OrganizationNotFound,
    /// No (eligible) membership for the pair
    MembershipNotFound,
    /// The member's user record is missing or inactive
    UserNotActive,
    /// The membership belongs to a different organization
    NoDirectRelationship,
    /// The resource-specific role check failed
    ResourceDenied,
    /// The caller may not manage the target user
    CannotManageTarget,
    /// The role does not grant the action
    InsufficientRole,
}

impl DenialReason {
    /// The stable reason string.
    pub fn as_str(&self) -> &'static str {
        match self {
            DenialReason::MissingIdentifiers => "User ID and Organization ID are required",
            DenialReason::UserNotFound => "User not found",
            DenialReason::OrganizationNotFound => "Organization not found",
            DenialReason::MembershipNotFound => "Membership not found",
            DenialReason::UserNotActive => "User is not active",
            DenialReason::NoDirectRelationship => "No direct relationship with organization",
            DenialReason::ResourceDenied => "Resource-specific permission denied",
            DenialReason::CannotManageTarget => "Cannot manage target user",
            DenialReason::InsufficientRole => "Insufficient role for action",
        }
    }
}

impl std::fmt::Display for DenialReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a single permission check.
///
/// # Examples
///
/// ```
/// use tenantguard_access::{Decision, DenialReason};
///
/// let denied = Decision::deny(DenialReason::InsufficientRole);
/// assert!(!denied.allowed);
/// assert_eq!(denied.reason.as_deref(), Some("Insufficient role for action"));
/// assert!(Decision::allow().reason.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    /// Whether the action is allowed
    pub allowed: bool,

    /// Reason for a denial
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl Decision {
    /// An allow decision with no reason.
    pub fn allow() -> Self {
        Self {
            allowed: true,
            reason: None,
        }
    }

    /// A deny decision carrying the stable reason string.
    pub fn deny(reason: DenialReason) -> Self {
        Self {
            allowed: false,
            reason: Some(reason.as_str().to_string()),
        }
    }
}

/// A single permission query.
///
/// Defaults: action `read`, active membership required, direct relationship
/// required. Empty strings for the optional fields count as absent.
///
/// # Examples
///
/// ```
/// use tenantguard_access::PermissionContext;
///
/// let ctx = PermissionContext::new("user-1", "org-1")
///     .with_action("delete")
///     .with_resource("post", "post-9");
///
/// assert_eq!(ctx.action, "delete");
/// assert!(ctx.require_active_membership);
/// assert_eq!(ctx.resource(), Some(("post", "post-9")));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionContext {
    /// Acting user
    pub user_id: String,

    /// Organization the check is scoped to
    pub organization_id: String,

    /// User being acted on, if any
    #[serde(default)]
    pub target_user_id: Option<String>,

    /// Resource type for the resource-specific check
    #[serde(default)]
    pub resource_type: Option<String>,

    /// Resource id for the resource-specific check
    #[serde(default)]
    pub resource_id: Option<String>,

    /// Action name
    #[serde(default = "default_action")]
    pub action: String,

    /// Only consider active memberships
    #[serde(default = "default_true")]
    pub require_active_membership: bool,

    /// Require the membership to belong to the queried organization
    #[serde(default = "default_true")]
    pub require_direct_relationship: bool,
}

fn default_action() -> String {
    "read".to_string()
}

fn default_true() -> bool {
    true
}

impl PermissionContext {
    /// Creates a `read` query with the default flags.
    pub fn new(user_id: impl Into<String>, organization_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            organization_id: organization_id.into(),
            target_user_id: None,
            resource_type: None,
            resource_id: None,
            action: default_action(),
            require_active_membership: true,
            require_direct_relationship: true,
        }
    }

    /// Set the action.
    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.action = action.into();
        self
    }

    /// Set the user being acted on.
    pub fn with_target_user(mut self, target_user_id: impl Into<String>) -> Self {
        self.target_user_id = Some(target_user_id.into());
        self
    }

    /// Set the resource for the resource-specific check.
    pub fn with_resource(
        mut self,
        resource_type: impl Into<String>,
        resource_id: impl Into<String>,
    ) -> Self {
        self.resource_type = Some(resource_type.into());
        self.resource_id = Some(resource_id.into());
        self
    }

    /// Let an inactive membership pass the membership lookup.
    pub fn allow_inactive_membership(mut self) -> Self {
        self.require_active_membership = false;
        self
    }

    /// Skip the direct relationship guard.
    pub fn without_direct_relationship(mut self) -> Self {
        self.require_direct_relationship = false;
        self
    }

    /// The target user, when present, non-empty and not the acting user.
    pub fn management_target(&self) -> Option<&str> {
        self.target_user_id
            .as_deref()
            .filter(|target| !target.is_empty() && *target != self.user_id)
    }

    /// Resource type and id, when both are present and non-empty.
    pub fn resource(&self) -> Option<(&str, &str)> {
        match (self.resource_type.as_deref(), self.resource_id.as_deref()) {
            (Some(kind), Some(id)) if !kind.is_empty() && !id.is_empty() => Some((kind, id)),
            _ => None,
        }
    }
}
