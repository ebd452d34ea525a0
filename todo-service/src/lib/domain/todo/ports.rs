use async_trait::async_trait;

use crate::domain::todo::errors::TodoError;
use crate::domain::todo::models::Todo;

/// Port for todo domain service operations.
#[async_trait]
pub trait TodoServicePort: Send + Sync + 'static {
    /// List all todos in insertion order.
    async fn list_todos(&self) -> Vec<Todo>;

    /// Retrieve a todo by id.
    ///
    /// # Errors
    /// * `NotFound` - No todo with this id
    async fn get_todo(&self, id: &str) -> Result<Todo, TodoError>;

    /// Add a new todo with a caller-assigned id.
    ///
    /// # Errors
    /// * `AlreadyExists` - A todo with this id already exists
    async fn create_todo(&self, todo: Todo) -> Result<Todo, TodoError>;

    /// Flip the completion flag of a todo and return the updated entry.
    ///
    /// # Errors
    /// * `NotFound` - No todo with this id
    async fn toggle_todo(&self, id: &str) -> Result<Todo, TodoError>;
}
