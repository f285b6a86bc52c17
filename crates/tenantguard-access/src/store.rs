//! Store collaborators
//!
//! The engine reads users, organizations and memberships through these
//! traits and never writes. Each call is expected to observe a consistent
//! snapshot on its own; the engine does not group calls into a transaction.

use async_trait::async_trait;
use std::sync::Arc;

use tenantguard_org::{Membership, Organization, User};

use crate::error::StoreError;

/// Result type for store calls.
pub type StoreResult<T> = Result<T, StoreError>;

/// Read access to platform users.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Find a user by id, active or not.
    async fn find_by_id(&self, id: &str) -> StoreResult<Option<User>>;
}

/// Read access to organizations.
#[async_trait]
pub trait OrganizationStore: Send + Sync {
    /// Find an organization by id, only if it is active.
    async fn find_active_by_id(&self, id: &str) -> StoreResult<Option<Organization>>;
}

/// Read access to memberships.
#[async_trait]
pub trait MembershipStore: Send + Sync {
    /// Find the membership for a (user, organization) pair.
    ///
    /// With `require_active` only an active membership is returned. The
    /// result is joined with its user and organization records.
    async fn find(
        &self,
        user_id: &str,
        organization_id: &str,
        require_active: bool,
    ) -> StoreResult<Option<Membership>>;

    /// All active memberships of a user, joined with their organizations.
    async fn find_all_active_for_user(&self, user_id: &str) -> StoreResult<Vec<Membership>>;
}

/// Store handles shared by every engine component.
#[derive(Clone)]
pub struct Stores {
    /// User lookups
    pub users: Arc<dyn UserStore>,
    /// Organization lookups
    pub organizations: Arc<dyn OrganizationStore>,
    /// Membership lookups
    pub memberships: Arc<dyn MembershipStore>,
}

impl std::fmt::Debug for Stores {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Stores").finish_non_exhaustive()
    }
}

impl Stores {
    /// Bundle three store handles.
    pub fn new(
        users: Arc<dyn UserStore>,
        organizations: Arc<dyn OrganizationStore>,
        memberships: Arc<dyn MembershipStore>,
    ) -> Self {
        Self {
            users,
            organizations,
            memberships,
        }
    }

    /// Use one backend for all three stores.
    pub fn from_backend<B>(backend: Arc<B>) -> Self
    where
        B: UserStore + OrganizationStore + MembershipStore + 'static,
    {
        Self {
            users: backend.clone(),
            organizations: backend.clone(),
            memberships: backend,
        }
    }
}
