//! Membership resolution.

use std::sync::Arc;
use tracing::trace;

use tenantguard_org::Membership;

use crate::error::AccessResult;
use crate::store::MembershipStore;

/// Looks up the membership for a (user, organization) pair.
///
/// `require_active = false` lets callers tell "never was a member" apart
/// from "was removed": a removed member's inactive row is still returned.
#[derive(Clone)]
pub struct MembershipResolver {
    memberships: Arc<dyn MembershipStore>,
}

impl std::fmt::Debug for MembershipResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MembershipResolver").finish_non_exhaustive()
    }
}

impl MembershipResolver {
    /// Create a resolver over a membership store.
    pub fn new(memberships: Arc<dyn MembershipStore>) -> Self {
        Self { memberships }
    }

    /// Find the membership, honoring the activity filter.
    pub async fn find(
        &self,
        user_id: &str,
        organization_id: &str,
        require_active: bool,
    ) -> AccessResult<Option<Membership>> {
        let membership = self
            .memberships
            .find(user_id, organization_id, require_active)
            .await?;

        // Stores are trusted to filter, but an active-only query must never
        // surface an inactive row.
        let membership = membership.filter(|m| !require_active || m.is_active);

        trace!(
            user_id,
            organization_id,
            require_active,
            found = membership.is_some(),
            "Resolved membership"
        );
        Ok(membership)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use crate::store::StoreResult;
    use async_trait::async_trait;
    use tenantguard_org::OrganizationRole;

    /// Returns its single membership regardless of the filter.
    struct SloppyStore(Membership);

    #[async_trait]
    impl MembershipStore for SloppyStore {
        async fn find(&self, _: &str, _: &str, _: bool) -> StoreResult<Option<Membership>> {
            Ok(Some(self.0.clone()))
        }

        async fn find_all_active_for_user(&self, _: &str) -> StoreResult<Vec<Membership>> {
            Ok(vec![])
        }
    }

    struct DownStore;

    #[async_trait]
    impl MembershipStore for DownStore {
        async fn find(&self, _: &str, _: &str, _: bool) -> StoreResult<Option<Membership>> {
            Err(StoreError::Unavailable("down".into()))
        }

        async fn find_all_active_for_user(&self, _: &str) -> StoreResult<Vec<Membership>> {
            Err(StoreError::Unavailable("down".into()))
        }
    }

    #[tokio::test]
    async fn test_inactive_row_filtered_when_active_required() {
        let removed = Membership::new("u", "o", OrganizationRole::Owner).inactive();
        let resolver = MembershipResolver::new(Arc::new(SloppyStore(removed)));

        assert!(resolver.find("u", "o", true).await.unwrap().is_none());
        assert!(resolver.find("u", "o", false).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_store_errors_propagate() {
        let resolver = MembershipResolver::new(Arc::new(DownStore));
        let err = resolver.find("u", "o", true).await.unwrap_err();
        assert!(err.is_server_error());
    }
}
