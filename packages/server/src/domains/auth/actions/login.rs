use anyhow::Context;
use chrono::Utc;
use serde::Serialize;

use crate::domains::auth::errors::AuthError;
use crate::kernel::ServerDeps;

/// Session grant returned to a logged-in coordinator
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginGrant {
    pub token: String,
    pub project_name: String,
}

/// Validate a coordinator's identity+project claim and mint a session token.
///
/// Both lookup failure and a project mismatch answer with the same vague
/// unauthorized message, so callers cannot probe which part was wrong. Each
/// successful login overwrites the stored token; the previous one stops
/// working.
pub async fn login(
    deps: &ServerDeps,
    phone_number: &str,
    project_name: &str,
) -> Result<LoginGrant, AuthError> {
    let _guard = deps.coordinator_locks.lock(phone_number).await;

    let mut coordinator = deps
        .store
        .find_coordinator_by_phone(phone_number)
        .await?
        .ok_or_else(AuthError::unauthorized)?;

    // Compared against the raw stored value, before any decoding
    if coordinator.project_name != project_name {
        return Err(AuthError::unauthorized());
    }

    // The stored name is run through the decoder once more before the
    // registry check. Stored names are already decoded, so this only matters
    // for names carrying literal percent sequences; source-exact behavior.
    let decoded = urlencoding::decode(&coordinator.project_name)
        .context("stored project name failed to decode")?
        .into_owned();

    if !deps.registry.has_project(&decoded).await? {
        return Err(AuthError::ProjectNotFound(format!(
            "project not found: {decoded}"
        )));
    }

    let token = deps.tokens.generate();
    coordinator.token = Some(token.clone());
    coordinator.created_at = Utc::now();
    deps.store.save_coordinator(&coordinator).await?;

    tracing::info!(
        phone_number,
        project_name = %coordinator.project_name,
        "coordinator logged in"
    );

    Ok(LoginGrant {
        token,
        project_name: coordinator.project_name,
    })
}
