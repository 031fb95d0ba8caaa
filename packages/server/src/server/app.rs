//! Application setup and server configuration.

use std::sync::Arc;

use axum::{
    extract::Extension,
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        Method,
    },
    middleware,
    routing::{delete, get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::kernel::ServerDeps;
use crate::server::middleware::server_auth_middleware;
use crate::server::routes::{
    coordinator_login_handler, delegate_member_handler, health_handler, register_handler,
    unregister_handler,
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub deps: Arc<ServerDeps>,
    /// Shared secret for the admin auth routes
    pub server_bearer_token: String,
}

/// Build the Axum application router
///
/// The server-secret routes (register/unregister/coordinator login) sit
/// behind the bearer middleware; member delegation and the health check do
/// not, since delegation authenticates with the coordinator's own token.
pub fn build_app(deps: Arc<ServerDeps>, server_bearer_token: String) -> Router {
    let state = AppState {
        deps,
        server_bearer_token,
    };

    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE]);

    let admin_routes = Router::new()
        .route("/auth/register", post(register_handler))
        .route("/auth/unregister", delete(unregister_handler))
        .route("/auth/coordinator", post(coordinator_login_handler))
        .route_layer(middleware::from_fn(server_auth_middleware));

    Router::new()
        .route("/auth/member", post(delegate_member_handler))
        .route("/health", get(health_handler))
        .merge(admin_routes)
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(Extension(state)) // Shared state (must be outside middlewares that need it)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
