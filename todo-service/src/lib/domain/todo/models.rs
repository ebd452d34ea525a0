use serde::Deserialize;
use serde::Serialize;

use crate::domain::store::Entity;

/// Todo entry.
///
/// The id is caller-assigned and doubles as the wire format, so the struct
/// serializes directly in responses. Missing fields in a request body default
/// rather than reject, matching the lenient binding clients already rely on.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Todo {
    pub id: String,
    pub title: String,
    pub completed: bool,
}

impl Todo {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            completed: false,
        }
    }
}

impl Entity for Todo {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Fixture entries loaded into the store at startup.
///
/// The todo collection is volatile, so every process starts from this set.
pub fn seed_todos() -> Vec<Todo> {
    vec![
        Todo::new("1", "Clean room"),
        Todo::new("2", "Record room"),
        Todo::new("3", "Read room"),
    ]
}
