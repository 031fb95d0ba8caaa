use serde::Serialize;

use crate::domains::auth::errors::AuthError;
use crate::kernel::ServerDeps;

#[derive(Debug, Clone, Serialize)]
pub struct UnregisterConfirmation {
    pub message: String,
}

/// Remove a coordinator binding.
///
/// Members delegated under this coordinator are left untouched; they keep a
/// `project_name` with no token-bearing coordinator behind it. Known
/// inconsistency, reproduced deliberately.
pub async fn unregister(
    deps: &ServerDeps,
    phone_number: &str,
) -> Result<UnregisterConfirmation, AuthError> {
    let _guard = deps.coordinator_locks.lock(phone_number).await;

    let deleted = deps.store.delete_coordinator_by_phone(phone_number).await?;
    if !deleted {
        return Err(AuthError::NotFound(
            "no coordinator registered for this phone number".into(),
        ));
    }

    tracing::info!(phone_number, "coordinator unregistered");
    Ok(UnregisterConfirmation {
        message: "coordinator unregistered".to_string(),
    })
}
