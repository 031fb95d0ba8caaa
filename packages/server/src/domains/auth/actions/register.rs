use serde::Serialize;

use crate::domains::auth::errors::AuthError;
use crate::domains::auth::models::Coordinator;
use crate::kernel::ServerDeps;

/// Persisted binding returned to the caller
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisteredCoordinator {
    pub phone_number: String,
    pub project_name: String,
}

/// Bind a coordinator phone number to a project name.
///
/// The project name arrives URL-encoded and is stored decoded. A prior
/// binding for the same phone number is deleted before the conflict check
/// runs, so a coordinator re-registering under a project name it already
/// holds does not conflict with itself; the ordering is policy, not an
/// accident.
pub async fn register(
    deps: &ServerDeps,
    phone_number: &str,
    project_name: &str,
) -> Result<RegisteredCoordinator, AuthError> {
    let decoded = urlencoding::decode(project_name)
        .map_err(|_| AuthError::BadRequest("project name is not valid percent-encoding".into()))?
        .into_owned();

    // Lock ordering is fixed (phone, then project) across disjoint lock maps
    let _phone_guard = deps.coordinator_locks.lock(phone_number).await;
    let _project_guard = deps.project_locks.lock(&decoded).await;

    if deps
        .store
        .find_coordinator_by_phone(phone_number)
        .await?
        .is_some()
    {
        deps.store.delete_coordinator_by_phone(phone_number).await?;
        tracing::info!(phone_number, "discarded prior coordinator binding");
    }

    // Uniqueness against the remaining stored coordinators and against the
    // external registry, both at this moment
    if deps
        .store
        .find_coordinator_by_project(&decoded)
        .await?
        .is_some()
        || deps.registry.has_project(&decoded).await?
    {
        return Err(AuthError::Conflict(format!(
            "project name already registered: {decoded}"
        )));
    }

    let coordinator = Coordinator::new(phone_number.to_string(), decoded);
    deps.store.save_coordinator(&coordinator).await?;
    tracing::info!(
        phone_number,
        project_name = %coordinator.project_name,
        "coordinator registered"
    );

    Ok(RegisteredCoordinator {
        phone_number: coordinator.phone_number,
        project_name: coordinator.project_name,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::test_dependencies::StaticProjectRegistry;
    use crate::kernel::InMemoryCredentialStore;
    use std::sync::Arc;

    fn deps_with_registry(registry: StaticProjectRegistry) -> ServerDeps {
        ServerDeps::new(Arc::new(InMemoryCredentialStore::new()), Arc::new(registry))
    }

    #[tokio::test]
    async fn test_register_decodes_project_name() {
        let deps = deps_with_registry(StaticProjectRegistry::new());

        let registered = register(&deps, "+15551230001", "River%20Survey")
            .await
            .unwrap();
        assert_eq!(registered.project_name, "River Survey");

        let stored = deps
            .store
            .find_coordinator_by_phone("+15551230001")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.project_name, "River Survey");
        assert!(stored.token.is_none());
    }

    #[tokio::test]
    async fn test_conflict_with_stored_coordinator() {
        let deps = deps_with_registry(StaticProjectRegistry::new());

        register(&deps, "+15551230001", "Shared").await.unwrap();
        let err = register(&deps, "+15551230002", "Shared").await.unwrap_err();
        assert!(matches!(err, AuthError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_conflict_with_external_registry() {
        let deps = deps_with_registry(StaticProjectRegistry::with_projects(&["Existing"]));

        let err = register(&deps, "+15551230001", "Existing").await.unwrap_err();
        assert!(matches!(err, AuthError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_reregistration_overrides_own_binding() {
        let deps = deps_with_registry(StaticProjectRegistry::new());

        register(&deps, "+15551230001", "Alpha").await.unwrap();
        register(&deps, "+15551230001", "Beta").await.unwrap();

        let stored = deps
            .store
            .find_coordinator_by_phone("+15551230001")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.project_name, "Beta");
        // The old name is free again
        assert!(deps
            .store
            .find_coordinator_by_project("Alpha")
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_concurrent_registration_has_single_winner() {
        let deps = deps_with_registry(StaticProjectRegistry::new());

        // Sixteen coordinators race for one project name; the project-name
        // lock serializes the check-then-create, so exactly one wins
        let mut handles = Vec::new();
        for i in 0..16 {
            let deps = deps.clone();
            handles.push(tokio::spawn(async move {
                let phone = format!("+1555000{i:04}");
                register(&deps, &phone, "Contested").await.is_ok()
            }));
        }

        let mut winners = 0;
        for handle in handles {
            if handle.await.unwrap() {
                winners += 1;
            }
        }
        assert_eq!(winners, 1);
        assert!(deps
            .store
            .find_coordinator_by_project("Contested")
            .await
            .unwrap()
            .is_some());
    }

    #[tokio::test]
    async fn test_reregistration_under_own_name_does_not_self_conflict() {
        let deps = deps_with_registry(StaticProjectRegistry::new());

        register(&deps, "+15551230001", "Alpha").await.unwrap();
        // Same phone, same project: the prior binding is discarded before
        // the conflict check, so this succeeds
        let registered = register(&deps, "+15551230001", "Alpha").await.unwrap();
        assert_eq!(registered.project_name, "Alpha");
    }
}
