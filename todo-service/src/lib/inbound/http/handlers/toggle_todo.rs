use axum::extract::Path;
use axum::extract::State;
use axum::Json;

use super::ApiError;
use crate::domain::todo::models::Todo;
use crate::inbound::http::router::AppState;

pub async fn toggle_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Todo>, ApiError> {
    state
        .todo_service
        .toggle_todo(&id)
        .await
        .map(Json)
        .map_err(ApiError::from)
}
