use axum::extract::Path;
use axum::extract::State;
use axum::Json;

use super::ApiError;
use super::BookData;
use crate::domain::book::models::BookId;
use crate::inbound::http::router::AppState;

pub async fn get_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<BookData>, ApiError> {
    let id = BookId::from_string(&id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state
        .book_service
        .get_book(&id)
        .await
        .map(|ref book| Json(book.into()))
        .map_err(ApiError::from)
}
