//! Service layer: business logic orchestration.
//!
//! [`TodoService`] coordinates todo operations over the
//! [`super::domain::TodoStore`] and logs every mutation.

pub mod todo_service;

pub use todo_service::TodoService;
