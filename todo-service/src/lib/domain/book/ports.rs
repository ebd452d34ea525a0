use async_trait::async_trait;

use crate::domain::book::errors::BookError;
use crate::domain::book::models::Book;
use crate::domain::book::models::BookId;
use crate::domain::book::models::CreateBookCommand;
use crate::domain::book::models::UpdateBookCommand;

/// Port for book catalog service operations.
#[async_trait]
pub trait BookServicePort: Send + Sync + 'static {
    /// List the full catalog.
    ///
    /// # Errors
    /// * `DatabaseError` - Storage operation failed
    async fn list_books(&self) -> Result<Vec<Book>, BookError>;

    /// Retrieve a book by id.
    ///
    /// # Errors
    /// * `NotFound` - No book with this id
    /// * `DatabaseError` - Storage operation failed
    async fn get_book(&self, id: &BookId) -> Result<Book, BookError>;

    /// Add a new book to the catalog.
    ///
    /// # Errors
    /// * `DatabaseError` - Storage operation failed
    async fn create_book(&self, command: CreateBookCommand) -> Result<Book, BookError>;

    /// Apply a partial update to an existing book.
    ///
    /// # Errors
    /// * `NotFound` - No book with this id
    /// * `DatabaseError` - Storage operation failed
    async fn update_book(
        &self,
        id: &BookId,
        command: UpdateBookCommand,
    ) -> Result<Book, BookError>;

    /// Remove a book from the catalog.
    ///
    /// # Errors
    /// * `NotFound` - No book with this id
    /// * `DatabaseError` - Storage operation failed
    async fn delete_book(&self, id: &BookId) -> Result<(), BookError>;
}

/// Persistence operations the book catalog requires from its storage backend.
///
/// The domain only consumes this interface; the concrete schema and query
/// engine live behind it in an outbound adapter.
#[async_trait]
pub trait BookRepository: Send + Sync + 'static {
    /// Retrieve all books from storage.
    ///
    /// # Errors
    /// * `DatabaseError` - Storage operation failed
    async fn find_all(&self) -> Result<Vec<Book>, BookError>;

    /// Retrieve a book by identifier.
    ///
    /// # Errors
    /// * `DatabaseError` - Storage operation failed
    async fn find_by_id(&self, id: &BookId) -> Result<Option<Book>, BookError>;

    /// Persist a new book to storage.
    ///
    /// # Errors
    /// * `DatabaseError` - Storage operation failed
    async fn create(&self, book: Book) -> Result<Book, BookError>;

    /// Update an existing book in storage.
    ///
    /// # Errors
    /// * `NotFound` - No book with this id
    /// * `DatabaseError` - Storage operation failed
    async fn update(&self, book: Book) -> Result<Book, BookError>;

    /// Remove a book from storage.
    ///
    /// # Errors
    /// * `NotFound` - No book with this id
    /// * `DatabaseError` - Storage operation failed
    async fn delete(&self, id: &BookId) -> Result<(), BookError>;
}
