use axum::extract::Path;
use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use thiserror::Error;

use super::ApiError;
use super::ApiJson;
use super::BookData;
use crate::book::errors::AuthorError;
use crate::book::errors::BookTitleError;
use crate::domain::book::models::Author;
use crate::domain::book::models::BookId;
use crate::domain::book::models::BookTitle;
use crate::domain::book::models::UpdateBookCommand;
use crate::inbound::http::router::AppState;

pub async fn update_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(body): ApiJson<UpdateBookRequest>,
) -> Result<Json<BookData>, ApiError> {
    let id = BookId::from_string(&id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state
        .book_service
        .update_book(&id, body.try_into_command()?)
        .await
        .map(|ref book| Json(book.into()))
        .map_err(ApiError::from)
}

/// HTTP request body for a partial book update (raw JSON)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UpdateBookRequest {
    title: Option<String>,
    author: Option<String>,
}

#[derive(Debug, Clone, Error)]
enum ParseUpdateBookRequestError {
    #[error("Invalid title: {0}")]
    Title(#[from] BookTitleError),

    #[error("Invalid author: {0}")]
    Author(#[from] AuthorError),
}

impl UpdateBookRequest {
    fn try_into_command(self) -> Result<UpdateBookCommand, ParseUpdateBookRequestError> {
        let title = self.title.map(BookTitle::new).transpose()?;
        let author = self.author.map(Author::new).transpose()?;
        Ok(UpdateBookCommand { title, author })
    }
}

impl From<ParseUpdateBookRequestError> for ApiError {
    fn from(err: ParseUpdateBookRequestError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}
