//! In-memory todo storage.
//!
//! [`TodoStore`] keeps every item in a `BTreeMap` keyed by [`TodoId`]
//! behind a single [`tokio::sync::RwLock`]. Reads share the lock; each
//! mutation, including the id computation of [`TodoStore::insert`] and the
//! check-then-write of [`TodoStore::replace`], runs under one write guard.

use std::collections::BTreeMap;

use tokio::sync::RwLock;

use super::{Todo, TodoId};
use crate::error::ApiError;

/// Titles of the records a [`TodoStore::seeded`] store starts with, in id
/// order starting at 1.
pub const SEED_TITLES: [&str; 2] = ["Pick up groceries", "Finish invoice report"];

/// Result of [`TodoStore::insert`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inserted {
    /// Id assigned to the stored record.
    pub id: TodoId,
    /// The caller's input, returned unmodified.
    pub echo: Todo,
}

/// Process-wide collection of todo items.
#[derive(Debug)]
pub struct TodoStore {
    items: RwLock<BTreeMap<TodoId, Todo>>,
}

impl TodoStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: RwLock::new(BTreeMap::new()),
        }
    }

    /// Creates a store holding the sample records
    /// `{1: "Pick up groceries", 2: "Finish invoice report"}`.
    #[must_use]
    pub fn seeded() -> Self {
        let items = (1_i64..)
            .zip(SEED_TITLES)
            .map(|(raw, title)| {
                let id = TodoId::new(raw);
                (id, Todo::new(id, title))
            })
            .collect();
        Self {
            items: RwLock::new(items),
        }
    }

    /// Returns every record in ascending id order.
    pub async fn list(&self) -> Vec<Todo> {
        self.items.read().await.values().cloned().collect()
    }

    /// Returns the record with the given id, if any.
    pub async fn get(&self, id: TodoId) -> Option<Todo> {
        self.items.read().await.get(&id).cloned()
    }

    /// Stores a new untitled record under `max(existing ids) + 1`, or
    /// [`TodoId::FIRST`] when the store is empty.
    ///
    /// The id and title carried by `todo` are not stored; `todo` is handed
    /// back unchanged in [`Inserted::echo`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::IdSpaceExhausted`] if the next id would overflow.
    pub async fn insert(&self, todo: Todo) -> Result<Inserted, ApiError> {
        let mut map = self.items.write().await;
        let id = match map.last_key_value() {
            Some((max, _)) => max.next().ok_or(ApiError::IdSpaceExhausted)?,
            None => TodoId::FIRST,
        };
        map.insert(id, Todo::untitled(id));
        Ok(Inserted { id, echo: todo })
    }

    /// Overwrites the record stored under `id` with `todo`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::IdMismatch`] if `todo.id` differs from `id`, and
    /// [`ApiError::TodoNotFound`] if nothing is stored under `id`. The store
    /// is left untouched in both cases.
    pub async fn replace(&self, id: TodoId, todo: Todo) -> Result<Todo, ApiError> {
        if todo.id != id {
            return Err(ApiError::IdMismatch {
                path: id,
                body: todo.id,
            });
        }
        let mut map = self.items.write().await;
        let Some(slot) = map.get_mut(&id) else {
            return Err(ApiError::TodoNotFound(id));
        };
        slot.clone_from(&todo);
        Ok(todo)
    }

    /// Removes the record stored under `id`. Absent ids are a no-op.
    ///
    /// Returns `true` if a record was removed.
    pub async fn delete(&self, id: TodoId) -> bool {
        self.items.write().await.remove(&id).is_some()
    }

    /// Returns the number of stored records.
    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    /// Returns `true` if the store holds no records.
    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }
}

impl Default for TodoStore {
    fn default() -> Self {
        Self::new()
    }
}
