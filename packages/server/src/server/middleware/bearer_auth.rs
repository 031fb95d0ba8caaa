use axum::{
    extract::{Extension, Request},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::domains::auth::{bearer_token, AuthError};
use crate::server::app::AppState;

/// Middleware guarding the server-secret routes.
///
/// Register, unregister, and coordinator login all require the shared server
/// bearer token. Member delegation is NOT behind this guard: its bearer is
/// the coordinator's own session token, verified inside the handler.
pub async fn server_auth_middleware(
    Extension(state): Extension<AppState>,
    request: Request,
    next: Next,
) -> Response {
    match bearer_token(request.headers()) {
        Some(token) if token == state.server_bearer_token => next.run(request).await,
        _ => AuthError::invalid_bearer().into_response(),
    }
}
