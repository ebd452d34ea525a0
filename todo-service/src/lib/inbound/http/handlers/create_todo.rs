use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use super::ApiError;
use super::ApiJson;
use crate::domain::todo::models::Todo;
use crate::inbound::http::router::AppState;

pub async fn create_todo(
    State(state): State<AppState>,
    ApiJson(todo): ApiJson<Todo>,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    state
        .todo_service
        .create_todo(todo)
        .await
        .map(|created| (StatusCode::CREATED, Json(created)))
        .map_err(ApiError::from)
}
