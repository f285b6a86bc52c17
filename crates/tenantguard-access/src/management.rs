//! User management authorization
//!
//! Decides whether one user may administratively act on another inside an
//! organization. The rule is the role hierarchy: a manager may act on any
//! member whose role ranks at or below their own.

use tracing::{debug, instrument, warn};

use tenantguard_org::OrganizationRole;

use crate::config::AccessConfig;
use crate::error::{AccessError, AccessResult};
use crate::resolver::MembershipResolver;
use crate::store::Stores;

/// Decides who may administer whom within an organization.
///
/// # Rules
///
/// 1. All three ids are required (an empty id is a caller error)
/// 2. Superadmins may manage anyone
/// 3. The manager needs a membership with an active user record
/// 4. Only owners may manage themselves
/// 5. The target needs a membership with an active user record
/// 6. The manager's rank must be at least the target's
#[derive(Debug, Clone)]
pub struct UserManagementAuthorizer {
    stores: Stores,
    resolver: MembershipResolver,
    config: AccessConfig,
}

impl UserManagementAuthorizer {
    /// Create an authorizer over the given stores.
    pub fn new(stores: Stores, config: AccessConfig) -> Self {
        let resolver = MembershipResolver::new(stores.memberships.clone());
        Self {
            stores,
            resolver,
            config,
        }
    }

    /// [`Self::can_manage_user_with`] requiring active memberships.
    pub async fn can_manage_user(
        &self,
        manager_id: &str,
        target_user_id: &str,
        organization_id: &str,
    ) -> AccessResult<bool> {
        self.can_manage_user_with(manager_id, target_user_id, organization_id, true)
            .await
    }

    /// Check whether `manager_id` may manage `target_user_id` in `organization_id`.
    ///
    /// # Errors
    ///
    /// [`AccessError::Validation`] if any id is empty, and store failures.
    #[instrument(skip(self))]
    pub async fn can_manage_user_with(
        &self,
        manager_id: &str,
        target_user_id: &str,
        organization_id: &str,
        require_active_membership: bool,
    ) -> AccessResult<bool> {
        if manager_id.is_empty() || target_user_id.is_empty() || organization_id.is_empty() {
            warn!("User management check called with an empty identifier");
            return Err(AccessError::validation(
                "Manager ID, target user ID and organization ID are required",
            ));
        }

        let manager = self.stores.users.find_by_id(manager_id).await?;
        if manager.as_ref().is_some_and(|u| u.is_super_admin()) {
            self.log(true, "superadmin bypass");
            return Ok(true);
        }

        let manager_membership = match self
            .resolver
            .find(manager_id, organization_id, require_active_membership)
            .await?
        {
            Some(m) if m.has_active_user() => m,
            _ => {
                self.log(false, "manager has no usable membership");
                return Ok(false);
            }
        };

        if manager_id == target_user_id {
            let allowed = manager_membership.role == OrganizationRole::Owner;
            self.log(allowed, "self-management");
            return Ok(allowed);
        }

        let target_membership = match self
            .resolver
            .find(target_user_id, organization_id, require_active_membership)
            .await?
        {
            Some(m) if m.has_active_user() => m,
            _ => {
                self.log(false, "target has no usable membership");
                return Ok(false);
            }
        };

        let allowed = manager_membership.role.rank() >= target_membership.role.rank();
        self.log(allowed, "role hierarchy");
        Ok(allowed)
    }

    fn log(&self, allowed: bool, rule: &'static str) {
        if self.config.log_decisions {
            debug!(allowed, rule, "User management decision");
        }
    }
}
