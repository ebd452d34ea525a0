use std::sync::Arc;

use thiserror::Error;
use tokio::sync::RwLock;

/// A record that can live in a [`MemoryStore`], keyed by a unique string id.
pub trait Entity: Clone + Send + Sync + 'static {
    fn id(&self) -> &str;
}

/// Error type for store operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("No entity with id {0}")]
    NotFound(String),

    #[error("An entity with id {0} already exists")]
    Conflict(String),
}

/// In-memory ordered collection of entities keyed by id.
///
/// The store exclusively owns its collection; every access goes through these
/// operations, which serialize structural and per-entity mutations against
/// concurrent readers behind a single read-write lock. Readers never observe
/// a partially-applied insert or update. Insertion order is preserved for
/// listing.
///
/// Cloning the store clones a handle to the same shared collection.
#[derive(Debug)]
pub struct MemoryStore<T: Entity> {
    entities: Arc<RwLock<Vec<T>>>,
}

impl<T: Entity> Clone for MemoryStore<T> {
    fn clone(&self) -> Self {
        Self {
            entities: Arc::clone(&self.entities),
        }
    }
}

impl<T: Entity> Default for MemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> MemoryStore<T> {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            entities: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Create a store pre-populated with entities, preserving their order.
    pub fn with_entities(entities: Vec<T>) -> Self {
        Self {
            entities: Arc::new(RwLock::new(entities)),
        }
    }

    /// Snapshot of the current contents in insertion order.
    pub async fn list(&self) -> Vec<T> {
        self.entities.read().await.clone()
    }

    /// Retrieve the entity with the given id.
    ///
    /// # Errors
    /// * `NotFound` - No entity has this id
    pub async fn get(&self, id: &str) -> Result<T, StoreError> {
        self.entities
            .read()
            .await
            .iter()
            .find(|e| e.id() == id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    /// Append a new entity.
    ///
    /// # Errors
    /// * `Conflict` - An entity with the same id already exists
    pub async fn insert(&self, entity: T) -> Result<T, StoreError> {
        let mut entities = self.entities.write().await;

        if entities.iter().any(|e| e.id() == entity.id()) {
            return Err(StoreError::Conflict(entity.id().to_string()));
        }

        entities.push(entity.clone());
        Ok(entity)
    }

    /// Apply a mutation to the entity with the given id and return the
    /// updated value.
    ///
    /// The mutation runs under the write lock, so no concurrent reader can
    /// observe the entity mid-update.
    ///
    /// # Errors
    /// * `NotFound` - No entity has this id
    pub async fn update<F>(&self, id: &str, mutate: F) -> Result<T, StoreError>
    where
        F: FnOnce(&mut T),
    {
        let mut entities = self.entities.write().await;

        let entity = entities
            .iter_mut()
            .find(|e| e.id() == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        mutate(entity);
        Ok(entity.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Item {
        id: String,
        count: u32,
    }

    impl Entity for Item {
        fn id(&self) -> &str {
            &self.id
        }
    }

    fn item(id: &str, count: u32) -> Item {
        Item {
            id: id.to_string(),
            count,
        }
    }

    #[tokio::test]
    async fn test_insert_then_get_and_list() {
        let store = MemoryStore::new();

        let inserted = store.insert(item("1", 0)).await.expect("Insert failed");
        assert_eq!(inserted, item("1", 0));

        assert_eq!(store.get("1").await, Ok(item("1", 0)));
        assert_eq!(store.list().await, vec![item("1", 0)]);
    }

    #[tokio::test]
    async fn test_get_unknown_id_is_not_found() {
        let store = MemoryStore::<Item>::new();
        assert_eq!(
            store.get("missing").await,
            Err(StoreError::NotFound("missing".to_string()))
        );

        store.insert(item("1", 0)).await.expect("Insert failed");
        assert_eq!(
            store.get("missing").await,
            Err(StoreError::NotFound("missing".to_string()))
        );
    }

    #[tokio::test]
    async fn test_insert_duplicate_id_is_conflict() {
        let store = MemoryStore::new();
        store.insert(item("1", 0)).await.expect("Insert failed");

        let result = store.insert(item("1", 7)).await;
        assert_eq!(result, Err(StoreError::Conflict("1".to_string())));

        // Original entity is untouched
        assert_eq!(store.list().await, vec![item("1", 0)]);
    }

    #[tokio::test]
    async fn test_list_preserves_insertion_order() {
        let store = MemoryStore::with_entities(vec![item("b", 0), item("a", 0)]);
        store.insert(item("c", 0)).await.expect("Insert failed");

        let ids: Vec<String> = store.list().await.into_iter().map(|i| i.id).collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
    }

    #[tokio::test]
    async fn test_update_mutates_in_place() {
        let store = MemoryStore::with_entities(vec![item("1", 0)]);

        let updated = store
            .update("1", |i| i.count += 1)
            .await
            .expect("Update failed");
        assert_eq!(updated, item("1", 1));
        assert_eq!(store.get("1").await, Ok(item("1", 1)));
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_not_found() {
        let store = MemoryStore::with_entities(vec![item("1", 0)]);

        let result = store.update("2", |i| i.count += 1).await;
        assert_eq!(result, Err(StoreError::NotFound("2".to_string())));
    }

    #[tokio::test]
    async fn test_identity_update_leaves_list_unchanged() {
        let store = MemoryStore::with_entities(vec![item("1", 3), item("2", 5)]);
        let before = store.list().await;

        store.update("1", |_| {}).await.expect("Update failed");

        assert_eq!(store.list().await, before);
    }

    #[tokio::test]
    async fn test_concurrent_inserts_lose_no_writes() {
        let store = MemoryStore::new();

        let mut handles = Vec::new();
        for n in 0..50 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store.insert(item(&n.to_string(), n)).await
            }));
        }
        for handle in handles {
            handle.await.expect("Task panicked").expect("Insert failed");
        }

        let entries = store.list().await;
        assert_eq!(entries.len(), 50);

        let mut ids: Vec<u32> = entries.iter().map(|i| i.id.parse().unwrap()).collect();
        ids.sort_unstable();
        assert_eq!(ids, (0..50).collect::<Vec<u32>>());
    }
}
