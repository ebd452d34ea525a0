use async_trait::async_trait;

use crate::domain::store::MemoryStore;
use crate::domain::todo::errors::TodoError;
use crate::domain::todo::models::Todo;
use crate::domain::todo::ports::TodoServicePort;

/// Domain service for the todo collection.
///
/// Owns its in-memory store outright; handlers receive the service by
/// injection and never touch the collection directly.
pub struct TodoService {
    store: MemoryStore<Todo>,
}

impl TodoService {
    pub fn new(store: MemoryStore<Todo>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl TodoServicePort for TodoService {
    async fn list_todos(&self) -> Vec<Todo> {
        self.store.list().await
    }

    async fn get_todo(&self, id: &str) -> Result<Todo, TodoError> {
        Ok(self.store.get(id).await?)
    }

    async fn create_todo(&self, todo: Todo) -> Result<Todo, TodoError> {
        Ok(self.store.insert(todo).await?)
    }

    async fn toggle_todo(&self, id: &str) -> Result<Todo, TodoError> {
        Ok(self.store.update(id, |t| t.completed = !t.completed).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::todo::models::seed_todos;

    fn service() -> TodoService {
        TodoService::new(MemoryStore::with_entities(seed_todos()))
    }

    #[tokio::test]
    async fn test_list_returns_seed_in_order() {
        let todos = service().list_todos().await;

        let ids: Vec<&str> = todos.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }

    #[tokio::test]
    async fn test_get_by_id() {
        let todo = service().get_todo("1").await.expect("Todo missing");
        assert_eq!(todo, Todo::new("1", "Clean room"));
    }

    #[tokio::test]
    async fn test_get_unknown_id() {
        let result = service().get_todo("999").await;
        assert_eq!(result, Err(TodoError::NotFound("999".to_string())));
    }

    #[tokio::test]
    async fn test_create_rejects_duplicate_id() {
        let service = service();

        let result = service.create_todo(Todo::new("1", "Shadow entry")).await;
        assert_eq!(result, Err(TodoError::AlreadyExists("1".to_string())));
    }

    #[tokio::test]
    async fn test_toggle_twice_restores_original() {
        let service = service();
        let original = service.get_todo("2").await.unwrap();

        let toggled = service.toggle_todo("2").await.expect("Toggle failed");
        assert!(toggled.completed);

        let restored = service.toggle_todo("2").await.expect("Toggle failed");
        assert_eq!(restored, original);
    }
}
