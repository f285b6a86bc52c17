//! Single permission evaluation
//!
//! [`PermissionEvaluator::has_permission`] resolves one [`PermissionContext`]
//! into a [`Decision`]. The check order is fixed and every step that can deny
//! reports its own [`DenialReason`]:
//!
//! ```text
//!  1. ids present                    → "User ID and Organization ID are required"
//!  2. user exists                    → "User not found"
//!  3. superadmin                     → allow
//!  4. organization active            → "Organization not found"
//!  5. membership (activity filter)   → "Membership not found"
//!  6. member's user record active    → "User is not active"
//!  7. direct relationship            → "No direct relationship with organization"
//!  8. resource-specific role check   → "Resource-specific permission denied"
//!  9. may manage the target user     → "Cannot manage target user"
//! 10. role grants the action         → "Insufficient role for action"
//! 11. allow
//! ```

use tracing::{debug, instrument};

use tenantguard_org::Membership;
use tenantguard_rbac::{ActionPolicy, ResourceType};

use crate::config::AccessConfig;
use crate::context::{Decision, DenialReason, PermissionContext};
use crate::error::AccessResult;
use crate::management::UserManagementAuthorizer;
use crate::resolver::MembershipResolver;
use crate::store::Stores;

/// Resolves single permission queries.
#[derive(Debug, Clone)]
pub struct PermissionEvaluator {
    stores: Stores,
    resolver: MembershipResolver,
    authorizer: UserManagementAuthorizer,
    config: AccessConfig,
}

impl PermissionEvaluator {
    /// Create an evaluator over the given stores.
    pub fn new(stores: Stores, config: AccessConfig) -> Self {
        let resolver = MembershipResolver::new(stores.memberships.clone());
        let authorizer = UserManagementAuthorizer::new(stores.clone(), config.clone());
        Self {
            stores,
            resolver,
            authorizer,
            config,
        }
    }

    /// Check a single permission query.
    ///
    /// Denials are returned as `Ok(Decision)`. Only store failures are errors.
    #[instrument(
        skip(self, ctx),
        fields(
            user_id = %ctx.user_id,
            organization_id = %ctx.organization_id,
            action = %ctx.action,
        )
    )]
    pub async fn has_permission(&self, ctx: &PermissionContext) -> AccessResult<Decision> {
        if ctx.user_id.is_empty() || ctx.organization_id.is_empty() {
            return Ok(self.deny(DenialReason::MissingIdentifiers));
        }

        let Some(user) = self.stores.users.find_by_id(&ctx.user_id).await? else {
            return Ok(self.deny(DenialReason::UserNotFound));
        };

        if user.is_super_admin() {
            if self.config.log_decisions {
                debug!("Superadmin bypass");
            }
            return Ok(Decision::allow());
        }

        if self
            .stores
            .organizations
            .find_active_by_id(&ctx.organization_id)
            .await?
            .is_none()
        {
            return Ok(self.deny(DenialReason::OrganizationNotFound));
        }

        let Some(membership) = self
            .resolver
            .find(
                &ctx.user_id,
                &ctx.organization_id,
                ctx.require_active_membership,
            )
            .await?
        else {
            return Ok(self.deny(DenialReason::MembershipNotFound));
        };

        if !membership.has_active_user() {
            return Ok(self.deny(DenialReason::UserNotActive));
        }

        // Only reachable with a store that does not key on the organization id.
        if ctx.require_direct_relationship && membership.organization_id != ctx.organization_id {
            return Ok(self.deny(DenialReason::NoDirectRelationship));
        }

        if let Some((resource_type, resource_id)) = ctx.resource() {
            if !Self::resource_permission(&membership, resource_type, resource_id) {
                return Ok(self.deny(DenialReason::ResourceDenied));
            }
        }

        if let Some(target_user_id) = ctx.management_target() {
            let can_manage = self
                .authorizer
                .can_manage_user(&ctx.user_id, target_user_id, &ctx.organization_id)
                .await?;
            if !can_manage {
                return Ok(self.deny(DenialReason::CannotManageTarget));
            }
        }

        if !ActionPolicy::is_action_allowed(membership.role, &ctx.action) {
            return Ok(self.deny(DenialReason::InsufficientRole));
        }

        if self.config.log_decisions {
            debug!(role = %membership.role, "Permission granted");
        }
        Ok(Decision::allow())
    }

    /// Resource-specific role check.
    ///
    /// Looks only at the member's role (and organization id for
    /// `organization` resources). Unknown resource types pass.
    pub fn resource_permission(membership: &Membership, resource_type: &str, resource_id: &str) -> bool {
        let Some(kind) = ResourceType::parse(resource_type) else {
            return true;
        };

        if kind.requires_same_organization() && membership.organization_id != resource_id {
            return false;
        }

        membership.role.at_least(kind.minimum_role())
    }

    fn deny(&self, reason: DenialReason) -> Decision {
        if self.config.log_decisions {
            debug!(reason = reason.as_str(), "Permission denied");
        }
        Decision::deny(reason)
    }
}
