use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::book::errors::AuthorError;
use crate::book::errors::BookIdError;
use crate::book::errors::BookTitleError;

/// Book catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub id: BookId,
    pub title: BookTitle,
    pub author: Author,
    pub created_at: DateTime<Utc>,
}

/// Book unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BookId(pub Uuid);

impl BookId {
    /// Generate a new random book ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a book ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, BookIdError> {
        Uuid::parse_str(s)
            .map(BookId)
            .map_err(|e| BookIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for BookId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Book title value type
///
/// Ensures the title is non-blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookTitle(String);

impl BookTitle {
    /// Create a new valid book title.
    ///
    /// # Errors
    /// * `Empty` - Title is empty or whitespace only
    pub fn new(title: String) -> Result<Self, BookTitleError> {
        if title.trim().is_empty() {
            Err(BookTitleError::Empty)
        } else {
            Ok(Self(title))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BookTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Author name value type
///
/// Ensures the name is non-blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author(String);

impl Author {
    /// Create a new valid author name.
    ///
    /// # Errors
    /// * `Empty` - Name is empty or whitespace only
    pub fn new(author: String) -> Result<Self, AuthorError> {
        if author.trim().is_empty() {
            Err(AuthorError::Empty)
        } else {
            Ok(Self(author))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Author {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Command to create a new book with validated fields
#[derive(Debug)]
pub struct CreateBookCommand {
    pub title: BookTitle,
    pub author: Author,
}

impl CreateBookCommand {
    pub fn new(title: BookTitle, author: Author) -> Self {
        Self { title, author }
    }
}

/// Command to update an existing book with optional validated fields.
///
/// Only provided fields are updated.
#[derive(Debug, Default)]
pub struct UpdateBookCommand {
    pub title: Option<BookTitle>,
    pub author: Option<Author>,
}
