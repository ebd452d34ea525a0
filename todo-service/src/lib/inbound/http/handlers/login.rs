use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiJson;
use crate::inbound::http::router::AppState;

pub async fn login(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<LoginRequest>,
) -> Result<(StatusCode, Json<LoginResponse>), ApiError> {
    let token = state.token_service.issue(&body.username).map_err(|e| {
        tracing::error!("Token signing failed: {}", e);
        ApiError::InternalServerError(e.to_string())
    })?;

    Ok((
        StatusCode::OK,
        Json(LoginResponse {
            token,
            message: "logged in".to_string(),
        }),
    ))
}

/// A missing username binds as empty rather than rejecting, so the
/// token is still issued for an anonymous claim.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub message: String,
}
