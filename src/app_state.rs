//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::domain::TodoStore;
use crate::service::TodoService;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Todo service for all business logic.
    pub todo_service: Arc<TodoService>,
}

impl AppState {
    /// Builds the state around the given store.
    #[must_use]
    pub fn new(store: Arc<TodoStore>) -> Self {
        Self {
            todo_service: Arc::new(TodoService::new(store)),
        }
    }
}
