use thiserror::Error;

/// Error for BookId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BookIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error for BookTitle validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BookTitleError {
    #[error("Title must not be empty")]
    Empty,
}

/// Error for Author validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthorError {
    #[error("Author must not be empty")]
    Empty,
}

/// Top-level error for all book catalog operations
#[derive(Debug, Clone, Error)]
pub enum BookError {
    // Value object validation errors (automatically converted via #[from])
    #[error("Invalid book ID: {0}")]
    InvalidBookId(#[from] BookIdError),

    #[error("Invalid title: {0}")]
    InvalidTitle(#[from] BookTitleError),

    #[error("Invalid author: {0}")]
    InvalidAuthor(#[from] AuthorError),

    // Domain-level errors
    #[error("Book not found: {0}")]
    NotFound(String),

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),
}
