use axum::extract::State;
use axum::Json;

use super::ApiError;
use super::BookData;
use crate::inbound::http::router::AppState;

pub async fn list_books(State(state): State<AppState>) -> Result<Json<Vec<BookData>>, ApiError> {
    state
        .book_service
        .list_books()
        .await
        .map(|books| Json(books.iter().map(BookData::from).collect()))
        .map_err(ApiError::from)
}
