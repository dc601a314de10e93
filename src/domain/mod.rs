//! Domain layer: the todo record, its identifier, and the in-memory store.

pub mod todo;
pub mod todo_id;
pub mod todo_store;

pub use todo::Todo;
pub use todo_id::TodoId;
pub use todo_store::{Inserted, TodoStore};
