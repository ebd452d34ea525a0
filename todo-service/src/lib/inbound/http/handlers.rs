use axum::async_trait;
use axum::extract::FromRequest;
use axum::extract::Request;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::json;

use crate::book::errors::BookError;
use crate::book::models::Book;
use crate::todo::errors::TodoError;

pub mod create_book;
pub mod create_todo;
pub mod delete_book;
pub mod get_book;
pub mod get_todo;
pub mod list_books;
pub mod list_todos;
pub mod login;
pub mod toggle_todo;
pub mod update_book;

/// Errors a handler can surface to the client.
///
/// Every variant renders as `{"message": ...}` with the matching status code;
/// internal detail stays in the logs, not in the body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    BadRequest(String),
    Unauthorized(String),
    NotFound(String),
    Conflict(String),
    InternalServerError(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ApiError::InternalServerError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        (status, Json(json!({ "message": message }))).into_response()
    }
}

impl From<TodoError> for ApiError {
    fn from(err: TodoError) -> Self {
        match err {
            // The body never names the missing id
            TodoError::NotFound(_) => ApiError::NotFound("not found".to_string()),
            TodoError::AlreadyExists(_) => ApiError::Conflict(err.to_string()),
        }
    }
}

impl From<BookError> for ApiError {
    fn from(err: BookError) -> Self {
        match err {
            BookError::NotFound(_) => ApiError::NotFound("not found".to_string()),
            BookError::InvalidBookId(_)
            | BookError::InvalidTitle(_)
            | BookError::InvalidAuthor(_) => ApiError::BadRequest(err.to_string()),
            BookError::DatabaseError(_) => {
                tracing::error!("Book repository failure: {}", err);
                ApiError::InternalServerError("internal error".to_string())
            }
        }
    }
}

/// Wire representation of a catalog entry, shared by every book handler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookData {
    pub id: String,
    pub title: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Book> for BookData {
    fn from(book: &Book) -> Self {
        Self {
            id: book.id.to_string(),
            title: book.title.as_str().to_string(),
            author: book.author.as_str().to_string(),
            created_at: book.created_at,
        }
    }
}

/// JSON body extractor that rejects malformed input with a 400 JSON body.
///
/// `axum::Json` alone answers rejections with plain text; every user-visible
/// failure here must be a JSON object carrying a `message` field.
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

        Ok(ApiJson(value))
    }
}
