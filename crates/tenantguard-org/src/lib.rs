//! # Tenantguard Organization Model
//!
//! Read-only data model consumed by the tenantguard access engine.
//!
//! ## Overview
//!
//! The tenantguard-org crate defines:
//! - **Users**: Platform identities with an activity flag and a global role
//! - **Organizations**: Tenant boundaries that can be deactivated
//! - **Memberships**: The (user, organization, role, active) association
//! - **Roles**: The fixed `Owner > Editor > Writer` hierarchy
//!
//! ## Architecture
//!
//! ```text
//! User (GlobalRole: SuperAdmin | Admin | User)
//!   └─ Membership (OrganizationRole, is_active) ─→ Organization (is_active)
//! ```
//!
//! Records are created and mutated by collaborators outside this workspace.
//! The access engine only reads them.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tenantguard_org::{Membership, Organization, OrganizationRole, User};
//!
//! let org = Organization::new("Acme Corp", "acme-corp");
//! let user = User::new("writer@acme.test");
//! let membership = Membership::new(&user.id, &org.id, OrganizationRole::Writer)
//!     .with_user(user.clone())
//!     .with_organization(org.clone());
//!
//! assert!(membership.role.at_least(OrganizationRole::Writer));
//! ```

pub mod membership;
pub mod organization;
pub mod roles;
pub mod user;

// Re-export main types for convenience
pub use membership::Membership;
pub use organization::Organization;
pub use roles::{GlobalRole, OrganizationRole, RoleHierarchy};
pub use user::User;
