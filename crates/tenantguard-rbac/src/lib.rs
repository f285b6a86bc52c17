//! # Tenantguard RBAC
//!
//! Role-to-action mapping for organization-scoped permission checks.
//!
//! ## Overview
//!
//! The tenantguard-rbac crate handles:
//! - **Actions**: The unit of permission (`read`, `write`, `delete`, `manage`, `invite`)
//! - **Action Policy**: The fixed set of actions each organization role may perform
//! - **Resource Types**: Keys for the coarse resource-specific role checks
//!
//! ## Policy
//!
//! ```text
//! Owner  → read, write, delete, manage, invite
//! Editor → read, write, manage
//! Writer → read, write
//! ```
//!
//! The policy is monotonic in role rank: anything a lower role may do,
//! every higher role may do as well.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tenantguard_org::OrganizationRole;
//! use tenantguard_rbac::{Action, ActionPolicy};
//!
//! assert!(ActionPolicy::is_action_allowed(OrganizationRole::Editor, "manage"));
//! assert!(!ActionPolicy::is_action_allowed(OrganizationRole::Writer, "delete"));
//! assert!(ActionPolicy::allowed_actions(OrganizationRole::Owner).contains(Action::Invite));
//! ```

pub mod actions;
pub mod policy;
pub mod resources;

// Re-export main types for convenience
pub use actions::Action;
pub use policy::{ActionPolicy, ActionSet};
pub use resources::ResourceType;
