//! The todo item entity

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A persisted todo item.
///
/// The id is assigned by the store on insert and never reused
/// within the table's lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Todo {
    pub id: i32,
    pub text: String,
    pub completed: bool,
}

/// Client-supplied todo fields, used by create and update.
///
/// Both fields are required; a body missing either one is rejected
/// during extraction, before any store access.
#[derive(Debug, Clone, Deserialize)]
pub struct TodoDraft {
    pub text: String,
    pub completed: bool,
}

impl TodoDraft {
    /// Merge the draft with a store-assigned (or caller-supplied) id.
    pub fn with_id(self, id: i32) -> Todo {
        Todo {
            id,
            text: self.text,
            completed: self.completed,
        }
    }
}
