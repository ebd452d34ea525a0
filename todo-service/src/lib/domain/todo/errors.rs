use thiserror::Error;

use crate::domain::store::StoreError;

/// Top-level error for todo operations
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TodoError {
    #[error("Todo not found: {0}")]
    NotFound(String),

    #[error("Todo already exists: {0}")]
    AlreadyExists(String),
}

impl From<StoreError> for TodoError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => TodoError::NotFound(id),
            StoreError::Conflict(id) => TodoError::AlreadyExists(id),
        }
    }
}
