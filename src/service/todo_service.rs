//! Todo service: orchestrates store operations and logs mutations.

use std::sync::Arc;

use crate::domain::{Inserted, Todo, TodoId, TodoStore};
use crate::error::ApiError;

/// Orchestration layer for all todo operations.
///
/// Stateless coordinator over a shared [`TodoStore`]. Every mutation
/// follows the pattern: call the store → log the outcome → return.
#[derive(Debug, Clone)]
pub struct TodoService {
    store: Arc<TodoStore>,
}

impl TodoService {
    /// Creates a new `TodoService` over the given store.
    #[must_use]
    pub fn new(store: Arc<TodoStore>) -> Self {
        Self { store }
    }

    /// Returns a reference to the inner [`TodoStore`].
    #[must_use]
    pub fn store(&self) -> &Arc<TodoStore> {
        &self.store
    }

    /// Returns every stored item in ascending id order.
    pub async fn list_todos(&self) -> Vec<Todo> {
        self.store.list().await
    }

    /// Returns the item stored under `id`, if any.
    pub async fn get_todo(&self, id: TodoId) -> Option<Todo> {
        self.store.get(id).await
    }

    /// Creates a new item and returns the assigned id alongside the
    /// caller's unmodified input.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::IdSpaceExhausted`] if no id can be allocated.
    pub async fn create_todo(&self, todo: Todo) -> Result<Inserted, ApiError> {
        let inserted = self.store.insert(todo).await?;
        tracing::info!(todo_id = %inserted.id, "todo created");
        Ok(inserted)
    }

    /// Replaces the item stored under `id`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::IdMismatch`] or [`ApiError::TodoNotFound`] when
    /// the update is rejected.
    pub async fn update_todo(&self, id: TodoId, todo: Todo) -> Result<Todo, ApiError> {
        match self.store.replace(id, todo).await {
            Ok(updated) => {
                tracing::info!(todo_id = %id, "todo updated");
                Ok(updated)
            }
            Err(err) => {
                tracing::debug!(todo_id = %id, error = %err, "todo update rejected");
                Err(err)
            }
        }
    }

    /// Deletes the item stored under `id`. Absent ids are ignored.
    pub async fn delete_todo(&self, id: TodoId) {
        if self.store.delete(id).await {
            tracing::info!(todo_id = %id, "todo deleted");
        } else {
            tracing::debug!(todo_id = %id, "delete of absent todo ignored");
        }
    }
}
