//! In-memory store
//!
//! A single-process implementation of all three store traits. Suitable for
//! tests and for embedders that keep tenant data in memory; for shared
//! deployments, implement the traits over the real database.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use tenantguard_org::{Membership, Organization, User};

use crate::store::{MembershipStore, OrganizationStore, StoreResult, UserStore};

/// In-memory users, organizations and memberships.
///
/// Memberships are stored unjoined and joined with the current user and
/// organization records on every read.
///
/// # Examples
///
/// ```
/// use tenantguard_access::MemoryDirectory;
/// use tenantguard_org::{Membership, Organization, OrganizationRole, User};
///
/// # async fn demo() {
/// let dir = MemoryDirectory::new();
/// let org = Organization::with_id("org-1", "Acme", "acme");
/// let user = User::with_id("user-1", "a@acme.test");
/// dir.insert_organization(org).await;
/// dir.insert_user(user).await;
/// dir.insert_membership(Membership::new("user-1", "org-1", OrganizationRole::Owner)).await;
/// # }
/// ```
#[derive(Default)]
pub struct MemoryDirectory {
    users: Arc<RwLock<HashMap<String, User>>>,
    organizations: Arc<RwLock<HashMap<String, Organization>>>,
    memberships: Arc<RwLock<Vec<Membership>>>,
}

impl std::fmt::Debug for MemoryDirectory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryDirectory").finish_non_exhaustive()
    }
}

impl MemoryDirectory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a user.
    pub async fn insert_user(&self, user: User) {
        self.users.write().await.insert(user.id.clone(), user);
    }

    /// Insert or replace an organization.
    pub async fn insert_organization(&self, organization: Organization) {
        self.organizations
            .write()
            .await
            .insert(organization.id.clone(), organization);
    }

    /// Insert a membership. Joined records on the value are discarded.
    pub async fn insert_membership(&self, mut membership: Membership) {
        membership.user = None;
        membership.organization = None;
        self.memberships.write().await.push(membership);
    }

    async fn join(&self, mut membership: Membership) -> Membership {
        membership.user = self.users.read().await.get(&membership.user_id).cloned();
        membership.organization = self
            .organizations
            .read()
            .await
            .get(&membership.organization_id)
            .cloned();
        membership
    }
}

#[async_trait]
impl UserStore for MemoryDirectory {
    async fn find_by_id(&self, id: &str) -> StoreResult<Option<User>> {
        Ok(self.users.read().await.get(id).cloned())
    }
}

#[async_trait]
impl OrganizationStore for MemoryDirectory {
    async fn find_active_by_id(&self, id: &str) -> StoreResult<Option<Organization>> {
        Ok(self
            .organizations
            .read()
            .await
            .get(id)
            .filter(|org| org.is_active)
            .cloned())
    }
}

#[async_trait]
impl MembershipStore for MemoryDirectory {
    async fn find(
        &self,
        user_id: &str,
        organization_id: &str,
        require_active: bool,
    ) -> StoreResult<Option<Membership>> {
        let found = {
            let memberships = self.memberships.read().await;
            let mut candidates = memberships
                .iter()
                .filter(|m| m.user_id == user_id && m.organization_id == organization_id);
            if require_active {
                candidates.find(|m| m.is_active).cloned()
            } else {
                // Prefer the active row when both exist
                let all: Vec<&Membership> = candidates.collect();
                all.iter()
                    .find(|m| m.is_active)
                    .or_else(|| all.first())
                    .map(|m| (*m).clone())
            }
        };

        match found {
            Some(membership) => Ok(Some(self.join(membership).await)),
            None => Ok(None),
        }
    }

    async fn find_all_active_for_user(&self, user_id: &str) -> StoreResult<Vec<Membership>> {
        let active: Vec<Membership> = self
            .memberships
            .read()
            .await
            .iter()
            .filter(|m| m.user_id == user_id && m.is_active)
            .cloned()
            .collect();

        let mut joined = Vec::with_capacity(active.len());
        for membership in active {
            joined.push(self.join(membership).await);
        }
        Ok(joined)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tenantguard_org::OrganizationRole;

    async fn seeded() -> MemoryDirectory {
        let dir = MemoryDirectory::new();
        dir.insert_user(User::with_id("user-1", "a@acme.test")).await;
        dir.insert_organization(Organization::with_id("org-1", "Acme", "acme"))
            .await;
        dir.insert_organization(Organization::with_id("org-2", "Gone", "gone").inactive())
            .await;
        dir
    }

    #[tokio::test]
    async fn test_find_active_organization_only() {
        let dir = seeded().await;
        assert!(dir.find_active_by_id("org-1").await.unwrap().is_some());
        assert!(dir.find_active_by_id("org-2").await.unwrap().is_none());
        assert!(dir.find_active_by_id("org-3").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_find_membership_respects_activity_filter() {
        let dir = seeded().await;
        dir.insert_membership(Membership::new("user-1", "org-1", OrganizationRole::Editor).inactive())
            .await;

        assert!(dir.find("user-1", "org-1", true).await.unwrap().is_none());

        let found = dir.find("user-1", "org-1", false).await.unwrap().unwrap();
        assert!(!found.is_active);
        assert_eq!(found.user.as_ref().map(|u| u.id.as_str()), Some("user-1"));
        assert_eq!(
            found.organization.as_ref().map(|o| o.id.as_str()),
            Some("org-1")
        );
    }

    #[tokio::test]
    async fn test_find_prefers_active_row() {
        let dir = seeded().await;
        dir.insert_membership(Membership::new("user-1", "org-1", OrganizationRole::Writer).inactive())
            .await;
        dir.insert_membership(Membership::new("user-1", "org-1", OrganizationRole::Owner))
            .await;

        let found = dir.find("user-1", "org-1", false).await.unwrap().unwrap();
        assert_eq!(found.role, OrganizationRole::Owner);
    }

    #[tokio::test]
    async fn test_joins_reflect_current_records() {
        let dir = seeded().await;
        dir.insert_membership(Membership::new("user-1", "org-1", OrganizationRole::Owner))
            .await;
        dir.insert_user(User::with_id("user-1", "a@acme.test").inactive())
            .await;

        let found = dir.find("user-1", "org-1", true).await.unwrap().unwrap();
        assert!(!found.has_active_user());
    }

    #[tokio::test]
    async fn test_find_all_active_for_user() {
        let dir = seeded().await;
        dir.insert_membership(Membership::new("user-1", "org-1", OrganizationRole::Owner))
            .await;
        dir.insert_membership(Membership::new("user-1", "org-2", OrganizationRole::Writer))
            .await;
        dir.insert_membership(Membership::new("user-1", "org-3", OrganizationRole::Writer).inactive())
            .await;
        dir.insert_membership(Membership::new("user-2", "org-1", OrganizationRole::Writer))
            .await;

        let all = dir.find_all_active_for_user("user-1").await.unwrap();
        assert_eq!(all.len(), 2);
        // Inactive organizations are still joined; filtering is the caller's job
        assert!(all.iter().any(|m| m.organization_id == "org-2"
            && m.organization.as_ref().is_some_and(|o| !o.is_active)));
    }
}
