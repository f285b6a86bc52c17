//! Effective permission listing
//!
//! Lists every active organization membership of a user with the role and
//! the actions that role grants.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use tenantguard_org::OrganizationRole;
use tenantguard_rbac::{ActionPolicy, ActionSet};

use crate::config::AccessConfig;
use crate::error::{AccessError, AccessResult};
use crate::store::Stores;

/// A user's standing in one organization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizationPermissions {
    /// Organization ID
    pub organization_id: String,

    /// Role within the organization
    pub role: OrganizationRole,

    /// Actions the role grants
    pub permissions: ActionSet,

    /// Whether the membership is active
    pub is_active: bool,

    /// Organization name
    pub organization_name: String,
}

/// All organizations a user can currently act in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectivePermissions {
    /// One entry per active membership in an active organization
    pub organizations: Vec<OrganizationPermissions>,

    /// Number of entries
    pub total_organizations: usize,

    /// Number of entries with an active membership
    pub total_active_organizations: usize,
}

/// Builds [`EffectivePermissions`] for a user.
#[derive(Debug, Clone)]
pub struct EffectivePermissionsAggregator {
    stores: Stores,
    config: AccessConfig,
}

impl EffectivePermissionsAggregator {
    /// Create an aggregator over the given stores.
    pub fn new(stores: Stores, config: AccessConfig) -> Self {
        Self { stores, config }
    }

    /// List the user's effective permissions.
    ///
    /// # Errors
    ///
    /// [`AccessError::Validation`] if the user is missing or inactive, and
    /// store failures.
    #[instrument(skip(self))]
    pub async fn get_user_effective_permissions(
        &self,
        user_id: &str,
    ) -> AccessResult<EffectivePermissions> {
        let user = self.stores.users.find_by_id(user_id).await?;
        if !user.is_some_and(|u| u.is_active) {
            warn!("Effective permissions requested for missing or inactive user");
            return Err(AccessError::validation("User not found or inactive"));
        }

        let memberships = self
            .stores
            .memberships
            .find_all_active_for_user(user_id)
            .await?;

        let organizations: Vec<OrganizationPermissions> = memberships
            .into_iter()
            .filter(|membership| membership.has_active_organization())
            .map(|membership| OrganizationPermissions {
                permissions: ActionPolicy::allowed_actions(membership.role),
                role: membership.role,
                is_active: membership.is_active,
                organization_name: membership
                    .organization
                    .map(|organization| organization.name)
                    .unwrap_or_default(),
                organization_id: membership.organization_id,
            })
            .collect();

        let total_organizations = organizations.len();
        let total_active_organizations = organizations.iter().filter(|o| o.is_active).count();

        if self.config.log_decisions {
            debug!(total_organizations, "Effective permissions aggregated");
        }

        Ok(EffectivePermissions {
            organizations,
            total_organizations,
            total_active_organizations,
        })
    }
}
