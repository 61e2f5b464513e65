use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stored todo (business view).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: Uuid,
    pub owner: String,
    pub status: bool,
    pub category: String,
    pub body: String,
}

impl From<models::todo::Model> for Todo {
    fn from(m: models::todo::Model) -> Self {
        Self { id: m.id, owner: m.owner, status: m.status, category: m.category, body: m.body }
    }
}

/// Create input as it arrives on the wire.
///
/// Every field is optional so that a missing field reaches the validation
/// rules instead of failing deserialization. `status` is kept as a raw JSON
/// value so a non-boolean status is reported as a validation failure too.
/// Unknown keys (including a client supplied `id`/`_id`) are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewTodoPayload {
    #[serde(default)]
    pub owner: Option<String>,
    #[serde(default)]
    pub status: Option<serde_json::Value>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
}

/// Create input that passed every validation rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodo {
    pub owner: String,
    pub status: bool,
    pub category: String,
    pub body: String,
}

impl NewTodo {
    /// Attach the storage-assigned id.
    pub fn into_todo(self, id: Uuid) -> Todo {
        Todo { id, owner: self.owner, status: self.status, category: self.category, body: self.body }
    }
}

/// Result of a successful create.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedTodo {
    pub id: Uuid,
}
