use chrono::Utc;
use serde::Serialize;

use crate::domains::auth::errors::AuthError;
use crate::domains::auth::models::Member;
use crate::domains::auth::phone::is_valid_member_phone;
use crate::domains::auth::token::verify_bearer;
use crate::kernel::ServerDeps;

/// Credential minted for a member
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DelegatedMember {
    pub token: String,
    pub project_name: String,
}

/// Mint a scoped member token on behalf of an authenticated coordinator.
///
/// The presented bearer must match the coordinator's current login token;
/// every authorization failure (unknown coordinator, coordinator without a
/// token, missing project binding, bearer mismatch) answers with the same
/// unauthorized error. Validation happens strictly before any store mutation:
/// a bad member phone or a duplicate member leaves no partial record behind.
pub async fn delegate_member(
    deps: &ServerDeps,
    coord_phone_number: &str,
    member_phone_number: &str,
    presented_token: Option<&str>,
) -> Result<DelegatedMember, AuthError> {
    let coordinator = deps
        .store
        .find_coordinator_by_phone(coord_phone_number)
        .await?
        .ok_or_else(AuthError::invalid_bearer)?;
    let expected_token = coordinator
        .token
        .as_deref()
        .ok_or_else(AuthError::invalid_bearer)?;

    let project_name = deps
        .store
        .find_project_by_coordinator_phone(coord_phone_number)
        .await?
        .ok_or_else(AuthError::invalid_bearer)?;

    verify_bearer(presented_token, expected_token)?;

    if !is_valid_member_phone(member_phone_number) {
        return Err(AuthError::BadRequest(
            "invalid member phone number".into(),
        ));
    }

    let _guard = deps.member_locks.lock(member_phone_number).await;

    if deps
        .store
        .find_member_by_phone(member_phone_number)
        .await?
        .is_some()
    {
        return Err(AuthError::BadRequest(
            "member phone number already registered".into(),
        ));
    }

    let token = deps.tokens.generate();
    let member = Member {
        phone_number: member_phone_number.to_string(),
        token: token.clone(),
        coordinator_phone: coord_phone_number.to_string(),
        project_name: project_name.clone(),
        created_at: Utc::now(),
    };
    deps.store.save_member(&member).await?;

    tracing::info!(
        coordinator_phone = coord_phone_number,
        member_phone = member_phone_number,
        project_name = %project_name,
        "member token delegated"
    );

    Ok(DelegatedMember {
        token,
        project_name,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::auth::actions::{login, register};
    use crate::kernel::test_dependencies::StaticProjectRegistry;
    use crate::kernel::InMemoryCredentialStore;
    use std::sync::Arc;

    /// Register + login a coordinator, returning deps and the session token
    async fn logged_in_coordinator(phone: &str, project: &str) -> (ServerDeps, String) {
        let registry = Arc::new(StaticProjectRegistry::new());
        let deps = ServerDeps::new(
            Arc::new(InMemoryCredentialStore::new()),
            registry.clone(),
        );
        register(&deps, phone, project).await.unwrap();
        registry.add_project(project);
        let grant = login(&deps, phone, project).await.unwrap();
        (deps, grant.token)
    }

    #[tokio::test]
    async fn test_delegation_chain() {
        let (deps, coord_token) = logged_in_coordinator("+15550001111", "Field1").await;

        let delegated =
            delegate_member(&deps, "+15550001111", "+15551234567", Some(&coord_token))
                .await
                .unwrap();
        assert_eq!(delegated.project_name, "Field1");
        assert_eq!(delegated.token.len(), 64);
        // Fresh token, not a reuse of the coordinator's
        assert_ne!(delegated.token, coord_token);

        let member = deps
            .store
            .find_member_by_phone("+15551234567")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(member.coordinator_phone, "+15550001111");
        assert_eq!(member.project_name, "Field1");
        assert_eq!(member.token, delegated.token);
    }

    #[tokio::test]
    async fn test_duplicate_member_phone_is_bad_request() {
        let (deps, coord_token) = logged_in_coordinator("+15550001111", "Field1").await;

        delegate_member(&deps, "+15550001111", "+15551234567", Some(&coord_token))
            .await
            .unwrap();
        let err = delegate_member(&deps, "+15550001111", "+15551234567", Some(&coord_token))
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::BadRequest(_)));
    }

    #[tokio::test]
    async fn test_bad_member_phone_leaves_no_record() {
        let (deps, coord_token) = logged_in_coordinator("+15550001111", "Field1").await;

        let err = delegate_member(&deps, "+15550001111", "abc", Some(&coord_token))
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::BadRequest(_)));
        assert!(deps
            .store
            .find_member_by_phone("abc")
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_wrong_bearer_is_unauthorized_and_creates_nothing() {
        let (deps, _coord_token) = logged_in_coordinator("+15550001111", "Field1").await;

        let err = delegate_member(
            &deps,
            "+15550001111",
            "+15551234567",
            Some("not-the-coordinator-token"),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AuthError::Unauthorized(_)));
        assert!(deps
            .store
            .find_member_by_phone("+15551234567")
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_missing_bearer_is_unauthorized() {
        let (deps, _coord_token) = logged_in_coordinator("+15550001111", "Field1").await;

        let err = delegate_member(&deps, "+15550001111", "+15551234567", None)
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::Unauthorized(_)));
    }

    #[tokio::test]
    async fn test_coordinator_without_login_cannot_delegate() {
        let registry = Arc::new(StaticProjectRegistry::new());
        let deps = ServerDeps::new(
            Arc::new(InMemoryCredentialStore::new()),
            registry.clone(),
        );
        // Registered but never logged in: no token to delegate under
        register(&deps, "+15550001111", "Field1").await.unwrap();

        let err = delegate_member(&deps, "+15550001111", "+15551234567", Some("anything"))
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::Unauthorized(_)));
    }

    #[tokio::test]
    async fn test_unknown_coordinator_is_unauthorized() {
        let registry = Arc::new(StaticProjectRegistry::new());
        let deps = ServerDeps::new(
            Arc::new(InMemoryCredentialStore::new()),
            registry,
        );

        let err = delegate_member(&deps, "+15550009999", "+15551234567", Some("anything"))
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::Unauthorized(_)));
    }

    #[tokio::test]
    async fn test_old_token_stops_working_after_relogin() {
        let (deps, first_token) = logged_in_coordinator("+15550001111", "Field1").await;
        let second = login(&deps, "+15550001111", "Field1").await.unwrap();

        let err = delegate_member(&deps, "+15550001111", "+15551234567", Some(&first_token))
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::Unauthorized(_)));

        delegate_member(&deps, "+15550001111", "+15551234567", Some(&second.token))
            .await
            .unwrap();
    }
}
