use std::sync::Arc;

use auth::TokenService;
use axum::extract::Request;
use axum::extract::State;
use axum::http::{self};
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;

use super::handlers::ApiError;

/// Extension type carrying the verified username into downstream handlers
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub username: String,
}

/// Request gate for the protected route group.
///
/// Extracts the bearer token, verifies it, and either attaches the username
/// to the request or rejects with a generic 401. Which sub-check failed is
/// logged but never echoed to the client.
pub async fn authenticate(
    State(tokens): State<Arc<TokenService>>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_token_from_header(&req)?;

    let claims = tokens.verify(token).map_err(|e| {
        tracing::warn!("Token verification failed: {}", e);
        unauthorized()
    })?;

    req.extensions_mut().insert(AuthenticatedUser {
        username: claims.user,
    });

    Ok(next.run(req).await)
}

fn extract_token_from_header(req: &Request) -> Result<&str, Response> {
    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .ok_or_else(|| {
            tracing::warn!("Missing Authorization header");
            unauthorized()
        })?;

    let auth_str = auth_header.to_str().map_err(|_| {
        tracing::warn!("Authorization header is not valid UTF-8");
        unauthorized()
    })?;

    auth_str.strip_prefix("Bearer ").ok_or_else(|| {
        tracing::warn!("Authorization header is not a Bearer token");
        unauthorized()
    })
}

fn unauthorized() -> Response {
    ApiError::Unauthorized("unauthorized".to_string()).into_response()
}
