//! Batched permission checks
//!
//! Evaluates an ordered list of per-organization checks for one user under
//! an all-or-any policy.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use tenantguard_org::OrganizationRole;

use crate::config::AccessConfig;
use crate::context::PermissionContext;
use crate::error::{AccessError, AccessResult};
use crate::evaluator::PermissionEvaluator;
use crate::store::Stores;

/// One entry of a [`ComplexPermissionCheck`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizationCheck {
    /// Organization the check is scoped to
    pub organization_id: String,

    /// Role the caller expects to need. Informational only: the action
    /// check is what gets enforced.
    #[serde(default)]
    pub required_role: Option<OrganizationRole>,

    /// Action name
    #[serde(default = "default_action")]
    pub action: String,

    /// Resource type for the resource-specific check
    #[serde(default)]
    pub resource_type: Option<String>,

    /// Resource id for the resource-specific check
    #[serde(default)]
    pub resource_id: Option<String>,

    /// Only consider active memberships
    #[serde(default = "default_true")]
    pub require_active_membership: bool,
}

fn default_action() -> String {
    "read".to_string()
}

fn default_true() -> bool {
    true
}

impl OrganizationCheck {
    /// A check for `action` in `organization_id`.
    pub fn new(organization_id: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            organization_id: organization_id.into(),
            required_role: None,
            action: action.into(),
            resource_type: None,
            resource_id: None,
            require_active_membership: true,
        }
    }

    /// Record the role the caller expects to need.
    pub fn with_required_role(mut self, role: OrganizationRole) -> Self {
        self.required_role = Some(role);
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

    fn to_context(&self, user_id: &str) -> PermissionContext {
        PermissionContext {
            user_id: user_id.to_string(),
            organization_id: self.organization_id.clone(),
            target_user_id: None,
            resource_type: self.resource_type.clone(),
            resource_id: self.resource_id.clone(),
            action: self.action.clone(),
            require_active_membership: self.require_active_membership,
            require_direct_relationship: true,
        }
    }
}

/// A batch of checks for one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplexPermissionCheck {
    /// User being checked
    pub user_id: String,

    /// Checks, evaluated in order
    pub checks: Vec<OrganizationCheck>,

    /// Every check must pass (`true`) or at least one (`false`)
    pub require_all: bool,
}

/// Summary validation outcome of a batch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Mirrors `has_all_permissions`
    pub is_valid: bool,

    /// Set when the batch is not valid
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,

    /// Failure messages of the individual checks
    #[serde(default)]
    pub failed_checks: Vec<String>,
}

/// Outcome of a batch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplexPermissionResult {
    /// Whether the batch passed under its all-or-any policy
    pub has_all_permissions: bool,

    /// One message per failed check, in check order
    pub failed_permissions: Vec<String>,

    /// Validation summary
    pub validation_result: ValidationResult,
}

impl ComplexPermissionResult {
    fn user_unavailable() -> Self {
        let message = "User not found or inactive".to_string();
        Self {
            has_all_permissions: false,
            failed_permissions: vec![message.clone()],
            validation_result: ValidationResult {
                is_valid: false,
                reason: Some(message.clone()),
                failed_checks: vec![message],
            },
        }
    }

    fn passed() -> Self {
        Self {
            has_all_permissions: true,
            failed_permissions: Vec::new(),
            validation_result: ValidationResult {
                is_valid: true,
                reason: None,
                failed_checks: Vec::new(),
            },
        }
    }
}

/// Evaluates [`ComplexPermissionCheck`] batches.
#[derive(Debug, Clone)]
pub struct ComplexPermissionResolver {
    stores: Stores,
    evaluator: PermissionEvaluator,
    config: AccessConfig,
}

impl ComplexPermissionResolver {
    /// Create a resolver over the given stores.
    pub fn new(stores: Stores, config: AccessConfig) -> Self {
        let evaluator = PermissionEvaluator::new(stores.clone(), config.clone());
        Self::with_evaluator(stores, evaluator, config)
    }

    /// Create a resolver that shares an existing evaluator.
    pub fn with_evaluator(
        stores: Stores,
        evaluator: PermissionEvaluator,
        config: AccessConfig,
    ) -> Self {
        Self {
            stores,
            evaluator,
            config,
        }
    }

    /// Evaluate a batch.
    ///
    /// With `require_all = false` the batch passes when fewer checks failed
    /// than were submitted, so an empty batch never passes.
    ///
    /// # Errors
    ///
    /// [`AccessError::Validation`] when the batch exceeds
    /// [`AccessConfig::max_batch_checks`], and store failures.
    #[instrument(
        skip(self, check),
        fields(user_id = %check.user_id, checks = check.checks.len(), require_all = check.require_all)
    )]
    pub async fn check_complex_permissions(
        &self,
        check: &ComplexPermissionCheck,
    ) -> AccessResult<ComplexPermissionResult> {
        if let Some(max) = self.config.max_batch_checks {
            if check.checks.len() > max {
                warn!(max, "Complex permission batch too large");
                return Err(AccessError::validation(format!(
                    "At most {max} permission checks are allowed per request"
                )));
            }
        }

        let user = self.stores.users.find_by_id(&check.user_id).await?;
        let Some(user) = user.filter(|u| u.is_active) else {
            return Ok(ComplexPermissionResult::user_unavailable());
        };

        if user.is_super_admin() {
            return Ok(ComplexPermissionResult::passed());
        }

        let mut failed_permissions = Vec::new();
        let mut failed_checks = Vec::new();

        for entry in &check.checks {
            let decision = self
                .evaluator
                .has_permission(&entry.to_context(&check.user_id))
                .await?;

            if !decision.allowed {
                let message = format!(
                    "Permission check failed for organization {}: {}",
                    entry.organization_id,
                    decision.reason.as_deref().unwrap_or_default()
                );
                failed_permissions.push(message.clone());
                failed_checks.push(message);
            }
        }

        let has_all_permissions = if check.require_all {
            failed_permissions.is_empty()
        } else {
            failed_permissions.len() < check.checks.len()
        };

        if self.config.log_decisions {
            debug!(
                has_all_permissions,
                failed = failed_permissions.len(),
                "Complex permission check evaluated"
            );
        }

        Ok(ComplexPermissionResult {
            has_all_permissions,
            failed_permissions,
            validation_result: ValidationResult {
                is_valid: has_all_permissions,
                reason: (!has_all_permissions).then(|| "Some permission checks failed".to_string()),
                failed_checks,
            },
        })
    }
}
