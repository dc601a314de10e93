//! The todo record.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::TodoId;

/// A single todo item: an identified, optionally titled entry.
///
/// Both fields default when missing from a request body, so `{}` is
/// accepted and read as `{ "id": 0, "title": null }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Todo {
    /// Item identifier. Ignored on create; must match the path on update.
    #[serde(default)]
    #[schema(value_type = i64, example = 1)]
    pub id: TodoId,

    /// Free-text title.
    #[serde(default)]
    #[schema(example = "Pick up groceries")]
    pub title: Option<String>,
}

impl Todo {
    /// Creates a todo with the given id and title.
    #[must_use]
    pub fn new(id: TodoId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: Some(title.into()),
        }
    }

    /// Creates a todo with the given id and no title.
    #[must_use]
    pub const fn untitled(id: TodoId) -> Self {
        Self { id, title: None }
    }
}
