//! OpenAPI document generated from the handler annotations.

use axum::Json;
use utoipa::OpenApi;

use super::handlers::{system, todo_item};
use crate::domain::Todo;
use crate::error::{ErrorBody, ErrorResponse};

/// Path the OpenAPI JSON document is served from.
pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";

/// Path the Swagger UI is mounted at (feature `swagger-ui`).
pub const SWAGGER_UI_PATH: &str = "/swagger-ui";

/// OpenAPI description of every REST endpoint.
#[derive(Debug, OpenApi)]
#[openapi(
    info(
        title = "Todo Gateway API",
        description = "Sample CRUD API over an in-memory todo store."
    ),
    paths(
        todo_item::list_todos,
        todo_item::get_todo,
        todo_item::create_todo,
        todo_item::update_todo,
        todo_item::patch_todo,
        todo_item::delete_todo,
        system::health_handler,
    ),
    components(schemas(Todo, ErrorResponse, ErrorBody)),
    tags(
        (name = "TodoItem", description = "Todo item management"),
        (name = "System", description = "Service health"),
    )
)]
pub struct ApiDoc;

/// `GET /api-docs/openapi.json` — Serve the OpenAPI document.
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
