//! End-to-end permission scenarios against the in-memory directory.

use async_trait::async_trait;
use std::sync::Arc;

use tenantguard_access::{
    AccessError, AccessService, ComplexPermissionCheck, Decision, MemoryDirectory,
    OrganizationCheck, PermissionContext, StoreError, StoreResult, Stores, UserStore,
};
use tenantguard_org::{GlobalRole, Membership, Organization, OrganizationRole, User};
use tenantguard_rbac::Action;

const NIL_ORG: &str = "00000000-0000-0000-0000-000000000000";

struct Fixture {
    directory: Arc<MemoryDirectory>,
    service: AccessService,
}

async fn fixture() -> Fixture {
    let directory = Arc::new(MemoryDirectory::new());

    directory
        .insert_organization(Organization::with_id("org-1", "Acme", "acme"))
        .await;
    directory
        .insert_organization(Organization::with_id("org-closed", "Closed", "closed").inactive())
        .await;

    for (id, role) in [
        ("owner-1", OrganizationRole::Owner),
        ("editor-1", OrganizationRole::Editor),
        ("writer-1", OrganizationRole::Writer),
    ] {
        directory
            .insert_user(User::with_id(id, format!("{id}@acme.test")))
            .await;
        directory
            .insert_membership(Membership::new(id, "org-1", role))
            .await;
        directory
            .insert_membership(Membership::new(id, "org-closed", role))
            .await;
    }

    directory
        .insert_user(
            User::with_id("root", "root@platform.test").with_global_role(GlobalRole::SuperAdmin),
        )
        .await;

    let service = AccessService::new(Stores::from_backend(directory.clone()));
    Fixture { directory, service }
}

fn check(org: &str, action: &str) -> OrganizationCheck {
    OrganizationCheck::new(org, action)
}

#[tokio::test]
async fn owner_may_delete() {
    let f = fixture().await;
    let ctx = PermissionContext::new("owner-1", "org-1").with_action("delete");
    assert_eq!(f.service.has_permission(&ctx).await.unwrap(), Decision::allow());
}

#[tokio::test]
async fn writer_may_not_delete() {
    let f = fixture().await;
    let ctx = PermissionContext::new("writer-1", "org-1").with_action("delete");
    let decision = f.service.has_permission(&ctx).await.unwrap();
    assert!(!decision.allowed);
    assert_eq!(decision.reason.as_deref(), Some("Insufficient role for action"));
}

#[tokio::test]
async fn empty_user_id_is_denied() {
    let f = fixture().await;
    let ctx = PermissionContext::new("", "org-1").with_action("read");
    let decision = f.service.has_permission(&ctx).await.unwrap();
    assert!(!decision.allowed);
    assert_eq!(
        decision.reason.as_deref(),
        Some("User ID and Organization ID are required")
    );
}

#[tokio::test]
async fn nonexistent_organization_is_denied() {
    let f = fixture().await;
    let ctx = PermissionContext::new("owner-1", NIL_ORG);
    let decision = f.service.has_permission(&ctx).await.unwrap();
    assert!(!decision.allowed);
    assert_eq!(decision.reason.as_deref(), Some("Organization not found"));
}

#[tokio::test]
async fn editor_may_manage_without_target() {
    let f = fixture().await;
    let ctx = PermissionContext::new("editor-1", "org-1").with_action("manage");
    assert!(f.service.has_permission(&ctx).await.unwrap().allowed);
}

#[tokio::test]
async fn writer_batch_passes_when_any_check_passes() {
    let f = fixture().await;
    let batch = ComplexPermissionCheck {
        user_id: "writer-1".to_string(),
        checks: vec![
            check("org-1", "read").with_required_role(OrganizationRole::Writer),
            check("org-1", "delete").with_required_role(OrganizationRole::Owner),
        ],
        require_all: false,
    };

    let result = f.service.check_complex_permissions(&batch).await.unwrap();
    assert!(result.has_all_permissions);
    assert_eq!(result.failed_permissions.len(), 1);
    assert!(result.validation_result.is_valid);

    let strict = ComplexPermissionCheck {
        require_all: true,
        ..batch
    };
    let result = f.service.check_complex_permissions(&strict).await.unwrap();
    assert!(!result.has_all_permissions);
    assert_eq!(
        result.validation_result.reason.as_deref(),
        Some("Some permission checks failed")
    );
}

#[tokio::test]
async fn superadmin_is_allowed_everywhere() {
    let f = fixture().await;
    for org in ["org-1", "org-closed", NIL_ORG] {
        for action in Action::all() {
            let ctx = PermissionContext::new("root", org)
                .with_action(action.as_str())
                .with_resource("organization", "somewhere-else")
                .with_target_user("owner-1");
            assert!(
                f.service.has_permission(&ctx).await.unwrap().allowed,
                "{org}/{action}"
            );
        }
    }
}

#[tokio::test]
async fn inactive_organization_denies_valid_members() {
    let f = fixture().await;
    for user in ["owner-1", "editor-1", "writer-1"] {
        let decision = f
            .service
            .has_permission(&PermissionContext::new(user, "org-closed"))
            .await
            .unwrap();
        assert_eq!(decision.reason.as_deref(), Some("Organization not found"));
    }
}

#[tokio::test]
async fn allowed_actions_are_monotonic_in_rank() {
    let f = fixture().await;
    let users = ["writer-1", "editor-1", "owner-1"];

    for action in Action::all() {
        let mut previous = false;
        for user in users {
            let ctx = PermissionContext::new(user, "org-1").with_action(action.as_str());
            let allowed = f.service.has_permission(&ctx).await.unwrap().allowed;
            assert!(!previous || allowed, "{user} lost {action}");
            previous = allowed;
        }
    }
}

#[tokio::test]
async fn inactive_membership_passes_lookup_when_not_required() {
    let f = fixture().await;
    f.directory
        .insert_user(User::with_id("former-1", "former@acme.test"))
        .await;
    f.directory
        .insert_membership(Membership::new("former-1", "org-1", OrganizationRole::Editor).inactive())
        .await;

    let ctx = PermissionContext::new("former-1", "org-1").with_action("manage");
    let decision = f.service.has_permission(&ctx).await.unwrap();
    assert_eq!(decision.reason.as_deref(), Some("Membership not found"));

    let decision = f
        .service
        .has_permission(&ctx.clone().allow_inactive_membership())
        .await
        .unwrap();
    assert!(decision.allowed);

    let decision = f
        .service
        .has_permission(&ctx.allow_inactive_membership().with_action("invite"))
        .await
        .unwrap();
    assert_eq!(decision.reason.as_deref(), Some("Insufficient role for action"));
}

#[tokio::test]
async fn user_management_follows_hierarchy() {
    let f = fixture().await;
    let s = &f.service;

    assert!(s.can_manage_user("owner-1", "owner-1", "org-1").await.unwrap());
    assert!(!s.can_manage_user("editor-1", "editor-1", "org-1").await.unwrap());
    assert!(s.can_manage_user("owner-1", "editor-1", "org-1").await.unwrap());
    assert!(!s.can_manage_user("editor-1", "owner-1", "org-1").await.unwrap());
}

#[tokio::test]
async fn user_management_rejects_empty_ids() {
    let f = fixture().await;
    let err = f
        .service
        .can_manage_user("owner-1", "", "org-1")
        .await
        .unwrap_err();
    assert!(matches!(err, AccessError::Validation(_)));
    assert_eq!(err.status_code(), 400);
}

#[tokio::test]
async fn effective_permissions_for_owner() {
    let f = fixture().await;
    let effective = f
        .service
        .get_user_effective_permissions("owner-1")
        .await
        .unwrap();

    // org-closed is filtered out
    assert_eq!(effective.total_organizations, 1);
    assert_eq!(effective.total_active_organizations, 1);
    let entry = &effective.organizations[0];
    assert_eq!(entry.organization_id, "org-1");
    assert_eq!(entry.organization_name, "Acme");
    assert_eq!(
        entry.permissions.to_strings(),
        vec!["read", "write", "delete", "manage", "invite"]
    );

    let json = serde_json::to_value(&effective).unwrap();
    assert_eq!(json["organizations"][0]["role"], "owner");
    assert_eq!(json["organizations"][0]["permissions"][4], "invite");
}

#[tokio::test]
async fn effective_permissions_for_unknown_user_is_an_error() {
    let f = fixture().await;
    let err = f
        .service
        .get_user_effective_permissions("nobody")
        .await
        .unwrap_err();
    assert!(matches!(err, AccessError::Validation(_)));
}

#[tokio::test]
async fn concurrent_checks_are_independent() {
    let f = fixture().await;
    let mut handles = Vec::new();

    for i in 0..32 {
        let service = f.service.clone();
        handles.push(tokio::spawn(async move {
            let (user, expected) = if i % 2 == 0 {
                ("owner-1", true)
            } else {
                ("writer-1", false)
            };
            let ctx = PermissionContext::new(user, "org-1").with_action("delete");
            let decision = service.has_permission(&ctx).await.unwrap();
            assert_eq!(decision.allowed, expected);
        }));
    }

    for handle in handles {
        handle.await.unwrap();
    }
}

struct UnreachableUsers;

#[async_trait]
impl UserStore for UnreachableUsers {
    async fn find_by_id(&self, _id: &str) -> StoreResult<Option<User>> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }
}

#[tokio::test]
async fn store_failures_reach_the_caller() {
    let f = fixture().await;
    let stores = Stores::new(
        Arc::new(UnreachableUsers),
        f.directory.clone(),
        f.directory.clone(),
    );
    let service = AccessService::new(stores);

    let err = service
        .has_permission(&PermissionContext::new("owner-1", "org-1"))
        .await
        .unwrap_err();
    assert!(err.is_server_error());
    assert_eq!(err.status_code(), 503);

    let batch = ComplexPermissionCheck {
        user_id: "owner-1".to_string(),
        checks: vec![check("org-1", "read")],
        require_all: true,
    };
    assert!(matches!(
        service.check_complex_permissions(&batch).await,
        Err(AccessError::Store(_))
    ));
}
