//! # todo-gateway
//!
//! Sample CRUD REST API for a todo resource, with an OpenAPI document
//! generated from the handlers and an optional Swagger UI.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP)
//!     │
//!     ├── REST Handlers + OpenAPI (api/)
//!     │
//!     ├── TodoService (service/)
//!     │
//!     └── TodoStore (domain/, in-memory)
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod service;
