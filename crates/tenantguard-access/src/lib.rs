//! # Tenantguard Access
//!
//! Permission resolution engine for organization-scoped actions.
//!
//! ## Overview
//!
//! The tenantguard-access crate handles:
//! - **Single checks**: `has_permission` resolves one query into an allow/deny [`Decision`]
//! - **Batched checks**: `check_complex_permissions` evaluates many checks under an all-or-any policy
//! - **User management**: `can_manage_user` applies the role hierarchy between two members
//! - **Effective permissions**: `get_user_effective_permissions` lists a user's organizations and actions
//!
//! ## Architecture
//!
//! ```text
//! Guard (HTTP layer)
//!   └─ AccessService
//!        ├─ PermissionEvaluator ──┬─ MembershipResolver ─→ MembershipStore
//!        │                        ├─ UserManagementAuthorizer
//!        │                        └─ ActionPolicy / RoleHierarchy
//!        ├─ ComplexPermissionResolver ─→ PermissionEvaluator
//!        └─ EffectivePermissionsAggregator ─→ ActionPolicy
//! ```
//!
//! The engine is stateless and only reads from its stores.
//!
//! ## Error Channels
//!
//! - Denials come back as `Ok(Decision { allowed: false, reason })`
//! - Caller misuse (empty ids for `can_manage_user`, unknown user for
//!   `get_user_effective_permissions`) is an [`AccessError::Validation`]
//! - Store failures surface unchanged as [`AccessError::Store`]
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use tenantguard_access::{AccessService, MemoryDirectory, PermissionContext, Stores};
//!
//! # async fn run() -> Result<(), tenantguard_access::AccessError> {
//! let directory = Arc::new(MemoryDirectory::new());
//! let service = AccessService::new(Stores::from_backend(directory));
//!
//! let ctx = PermissionContext::new("user-1", "org-1").with_action("delete");
//! let decision = service.has_permission(&ctx).await?;
//! if !decision.allowed {
//!     println!("denied: {}", decision.reason.unwrap_or_default());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Feature Flags
//!
//! - `memory` (default): In-memory store implementation

pub mod complex;
pub mod config;
pub mod context;
pub mod effective;
pub mod error;
pub mod evaluator;
pub mod management;
#[cfg(any(test, feature = "memory"))]
pub mod memory;
pub mod resolver;
pub mod service;
pub mod store;

// Re-export main types
pub use complex::{
    ComplexPermissionCheck, ComplexPermissionResolver, ComplexPermissionResult,
    OrganizationCheck, ValidationResult,
};
pub use config::{AccessConfig, ConfigError};
pub use context::{Decision, DenialReason, PermissionContext};
pub use effective::{EffectivePermissions, EffectivePermissionsAggregator, OrganizationPermissions};
pub use error::{AccessError, AccessResult, StoreError};
pub use evaluator::PermissionEvaluator;
pub use management::UserManagementAuthorizer;
#[cfg(any(test, feature = "memory"))]
pub use memory::MemoryDirectory;
pub use resolver::MembershipResolver;
pub use service::AccessService;
pub use store::{MembershipStore, OrganizationStore, StoreResult, Stores, UserStore};
