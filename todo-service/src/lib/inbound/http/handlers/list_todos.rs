use axum::extract::State;
use axum::Json;

use crate::domain::todo::models::Todo;
use crate::inbound::http::router::AppState;

pub async fn list_todos(State(state): State<AppState>) -> Json<Vec<Todo>> {
    Json(state.todo_service.list_todos().await)
}
