use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use thiserror::Error;

use super::ApiError;
use super::ApiJson;
use super::BookData;
use crate::book::errors::AuthorError;
use crate::book::errors::BookTitleError;
use crate::domain::book::models::Author;
use crate::domain::book::models::BookTitle;
use crate::domain::book::models::CreateBookCommand;
use crate::inbound::http::router::AppState;

pub async fn create_book(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<CreateBookRequest>,
) -> Result<(StatusCode, Json<BookData>), ApiError> {
    state
        .book_service
        .create_book(body.try_into_command()?)
        .await
        .map(|ref book| (StatusCode::CREATED, Json(book.into())))
        .map_err(ApiError::from)
}

/// HTTP request body for creating a book (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateBookRequest {
    title: String,
    author: String,
}

#[derive(Debug, Clone, Error)]
enum ParseCreateBookRequestError {
    #[error("Invalid title: {0}")]
    Title(#[from] BookTitleError),

    #[error("Invalid author: {0}")]
    Author(#[from] AuthorError),
}

impl CreateBookRequest {
    fn try_into_command(self) -> Result<CreateBookCommand, ParseCreateBookRequestError> {
        let title = BookTitle::new(self.title)?;
        let author = Author::new(self.author)?;
        Ok(CreateBookCommand::new(title, author))
    }
}

impl From<ParseCreateBookRequestError> for ApiError {
    fn from(err: ParseCreateBookRequestError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}
