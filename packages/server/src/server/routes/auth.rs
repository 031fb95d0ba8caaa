use axum::{extract::Extension, http::HeaderMap, Json};
use serde::{Deserialize, Serialize};

use crate::domains::auth::actions::{
    delegate_member, login, register, unregister, LoginGrant, RegisteredCoordinator,
    UnregisterConfirmation,
};
use crate::domains::auth::{bearer_token, AuthError};
use crate::server::app::AppState;

/// Uniform success envelope: `{"data": ...}`
#[derive(Debug, Serialize)]
pub struct Data<T> {
    pub data: T,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub phone_number: String,
    pub project_name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnregisterRequest {
    pub phone_number: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub phone_number: String,
    pub project_name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DelegateMemberRequest {
    pub coord_phone_number: String,
    pub member_phone_number: String,
}

/// Member delegation exposes only the minted token
#[derive(Debug, Serialize)]
pub struct MemberTokenResponse {
    pub token: String,
}

/// POST /auth/register (server bearer)
pub async fn register_handler(
    Extension(state): Extension<AppState>,
    Json(body): Json<RegisterRequest>,
) -> Result<Json<Data<RegisteredCoordinator>>, AuthError> {
    let registered = register(&state.deps, &body.phone_number, &body.project_name).await?;
    Ok(Json(Data { data: registered }))
}

/// DELETE /auth/unregister (server bearer)
pub async fn unregister_handler(
    Extension(state): Extension<AppState>,
    Json(body): Json<UnregisterRequest>,
) -> Result<Json<Data<UnregisterConfirmation>>, AuthError> {
    let confirmation = unregister(&state.deps, &body.phone_number).await?;
    Ok(Json(Data { data: confirmation }))
}

/// POST /auth/coordinator (server bearer)
pub async fn coordinator_login_handler(
    Extension(state): Extension<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<Data<LoginGrant>>, AuthError> {
    let grant = login(&state.deps, &body.phone_number, &body.project_name).await?;
    Ok(Json(Data { data: grant }))
}

/// POST /auth/member (coordinator bearer, verified here rather than by the
/// server-secret middleware)
pub async fn delegate_member_handler(
    Extension(state): Extension<AppState>,
    headers: HeaderMap,
    Json(body): Json<DelegateMemberRequest>,
) -> Result<Json<Data<MemberTokenResponse>>, AuthError> {
    let presented = bearer_token(&headers);
    let delegated = delegate_member(
        &state.deps,
        &body.coord_phone_number,
        &body.member_phone_number,
        presented,
    )
    .await?;
    Ok(Json(Data {
        data: MemberTokenResponse {
            token: delegated.token,
        },
    }))
}
