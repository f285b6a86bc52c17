//! Access service facade.

use crate::complex::{ComplexPermissionCheck, ComplexPermissionResolver, ComplexPermissionResult};
use crate::config::{AccessConfig, ConfigError};
use crate::context::{Decision, PermissionContext};
use crate::effective::{EffectivePermissions, EffectivePermissionsAggregator};
use crate::error::AccessResult;
use crate::evaluator::PermissionEvaluator;
use crate::management::UserManagementAuthorizer;
use crate::store::Stores;

/// Entry point for guards and controllers.
///
/// Holds one of each engine component over a shared set of stores. The
/// service has no mutable state, so clones can serve concurrent requests
/// independently.
#[derive(Debug, Clone)]
pub struct AccessService {
    evaluator: PermissionEvaluator,
    complex: ComplexPermissionResolver,
    authorizer: UserManagementAuthorizer,
    effective: EffectivePermissionsAggregator,
}

impl AccessService {
    /// Create a service with the default configuration.
    pub fn new(stores: Stores) -> Self {
        Self::with_config(stores, AccessConfig::default())
    }

    /// Create a service configured from the environment.
    ///
    /// See [`AccessConfig::from_env`] for the variables read.
    pub fn from_env(stores: Stores) -> Result<Self, ConfigError> {
        let config = AccessConfig::from_env();
        config.validate()?;
        Ok(Self::with_config(stores, config))
    }

    /// Create a service with an explicit configuration.
    pub fn with_config(stores: Stores, config: AccessConfig) -> Self {
        let evaluator = PermissionEvaluator::new(stores.clone(), config.clone());
        Self {
            complex: ComplexPermissionResolver::with_evaluator(
                stores.clone(),
                evaluator.clone(),
                config.clone(),
            ),
            authorizer: UserManagementAuthorizer::new(stores.clone(), config.clone()),
            effective: EffectivePermissionsAggregator::new(stores, config),
            evaluator,
        }
    }

    /// See [`PermissionEvaluator::has_permission`].
    pub async fn has_permission(&self, ctx: &PermissionContext) -> AccessResult<Decision> {
        self.evaluator.has_permission(ctx).await
    }

    /// See [`ComplexPermissionResolver::check_complex_permissions`].
    pub async fn check_complex_permissions(
        &self,
        check: &ComplexPermissionCheck,
    ) -> AccessResult<ComplexPermissionResult> {
        self.complex.check_complex_permissions(check).await
    }

    /// See [`UserManagementAuthorizer::can_manage_user`].
    pub async fn can_manage_user(
        &self,
        manager_id: &str,
        target_user_id: &str,
        organization_id: &str,
    ) -> AccessResult<bool> {
        self.authorizer
            .can_manage_user(manager_id, target_user_id, organization_id)
            .await
    }

    /// See [`UserManagementAuthorizer::can_manage_user_with`].
    pub async fn can_manage_user_with(
        &self,
        manager_id: &str,
        target_user_id: &str,
        organization_id: &str,
        require_active_membership: bool,
    ) -> AccessResult<bool> {
        self.authorizer
            .can_manage_user_with(
                manager_id,
                target_user_id,
                organization_id,
                require_active_membership,
            )
            .await
    }

    /// See [`EffectivePermissionsAggregator::get_user_effective_permissions`].
    pub async fn get_user_effective_permissions(
        &self,
        user_id: &str,
    ) -> AccessResult<EffectivePermissions> {
        self.effective.get_user_effective_permissions(user_id).await
    }
}
