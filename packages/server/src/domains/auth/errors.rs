use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Credential and delegation failures
///
/// Every validation or state failure is raised at the point of detection and
/// propagates unhandled to the HTTP boundary; `IntoResponse` below is the
/// only place statuses are assigned. Nothing is retried or recovered
/// internally.
#[derive(Error, Debug)]
pub enum AuthError {
    /// Bad or missing bearer, or an identity/project mismatch. The message is
    /// deliberately non-specific so callers cannot probe which part failed.
    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    BadRequest(String),

    /// Project name already bound, locally or in the external registry
    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    NotFound(String),

    /// Coordinator's bound project vanished from the external registry
    #[error("{0}")]
    ProjectNotFound(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AuthError {
    pub fn unauthorized() -> Self {
        Self::Unauthorized("invalid phone number or project name".to_string())
    }

    pub fn invalid_bearer() -> Self {
        Self::Unauthorized("invalid bearer token".to_string())
    }

    fn status(&self) -> StatusCode {
        match self {
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::NotFound(_) | Self::ProjectNotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            Self::Unauthorized(_) => "UNAUTHORIZED",
            Self::BadRequest(_) => "BAD_REQUEST",
            Self::Conflict(_) => "CONFLICT",
            Self::NotFound(_) => "NOT_FOUND",
            Self::ProjectNotFound(_) => "PROJECT_NOT_FOUND",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        if let Self::Internal(error) = &self {
            // Unexpected failures are logged with the original error before
            // the response is produced; the body stays generic
            tracing::error!(error = %error, "internal error in auth flow");
        }

        let body = json!({
            "error": {
                "kind": self.kind(),
                "message": self.to_string(),
            }
        });
        (self.status(), Json(body)).into_response()
    }
}
