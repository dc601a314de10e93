//! Todo item CRUD handlers: list, get, create, update, delete.

use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use crate::app_state::AppState;
use crate::domain::{Todo, TodoId};
use crate::error::{ApiError, ErrorResponse};

/// Collection path of the todo resource.
pub const TODO_ITEM_PATH: &str = "/api/todoitem";

/// `GET /api/todoitem` — List all todo items.
#[utoipa::path(
    get,
    path = "/api/todoitem",
    tag = "TodoItem",
    summary = "List todo items",
    description = "Returns every stored todo item in ascending id order.",
    responses(
        (status = 200, description = "All todo items", body = Vec<Todo>),
    )
)]
pub async fn list_todos(State(state): State<AppState>) -> Json<Vec<Todo>> {
    Json(state.todo_service.list_todos().await)
}

/// `GET /api/todoitem/{id}` — Get a single todo item.
///
/// Answers `200` with `null` when nothing is stored under `id`.
#[utoipa::path(
    get,
    path = "/api/todoitem/{id}",
    tag = "TodoItem",
    summary = "Get a todo item",
    description = "Returns the todo item with the given id, or `null` if there is none.",
    params(
        ("id" = i64, Path, description = "Todo item id"),
    ),
    responses(
        (status = 200, description = "The todo item, or null", body = Todo),
    )
)]
pub async fn get_todo(
    State(state): State<AppState>,
    Path(id): Path<TodoId>,
) -> Json<Option<Todo>> {
    Json(state.todo_service.get_todo(id).await)
}

/// `POST /api/todoitem` — Create a todo item.
///
/// # Errors
///
/// Returns [`ApiError::IdSpaceExhausted`] if no id can be allocated.
#[utoipa::path(
    post,
    path = "/api/todoitem",
    tag = "TodoItem",
    summary = "Create a todo item",
    description = "Stores a new item under the next free id and echoes the request body. The assigned id is returned in the `Location` header; the body's id is ignored.",
    request_body = Todo,
    responses(
        (status = 201, description = "Item created; body echoes the request", body = Todo,
            headers(("Location" = String, description = "Path of the created item"))),
        (status = 500, description = "No id left to allocate", body = ErrorResponse),
    )
)]
pub async fn create_todo(
    State(state): State<AppState>,
    Json(todo): Json<Todo>,
) -> Result<impl IntoResponse, ApiError> {
    let inserted = state.todo_service.create_todo(todo).await?;
    let location = format!("{TODO_ITEM_PATH}/{}", inserted.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(inserted.echo),
    ))
}

/// `PUT /api/todoitem/{id}` — Replace a todo item.
///
/// # Errors
///
/// Returns [`ApiError::IdMismatch`] or [`ApiError::TodoNotFound`], both
/// answered with `404`.
#[utoipa::path(
    put,
    path = "/api/todoitem/{id}",
    tag = "TodoItem",
    summary = "Replace a todo item",
    description = "Overwrites the stored item. The body id must equal the path id.",
    params(
        ("id" = i64, Path, description = "Todo item id"),
    ),
    request_body = Todo,
    responses(
        (status = 200, description = "Updated item", body = Todo),
        (status = 404, description = "Id mismatch or item not found", body = ErrorResponse),
    )
)]
pub async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<TodoId>,
    Json(todo): Json<Todo>,
) -> Result<Json<Todo>, ApiError> {
    replace(&state, id, todo).await
}

/// `PATCH /api/todoitem/{id}` — Replace a todo item.
///
/// Identical to `PUT`: the whole record is overwritten.
///
/// # Errors
///
/// Returns [`ApiError::IdMismatch`] or [`ApiError::TodoNotFound`], both
/// answered with `404`.
#[utoipa::path(
    patch,
    path = "/api/todoitem/{id}",
    tag = "TodoItem",
    summary = "Replace a todo item",
    description = "Same full overwrite as PUT. The body id must equal the path id.",
    params(
        ("id" = i64, Path, description = "Todo item id"),
    ),
    request_body = Todo,
    responses(
        (status = 200, description = "Updated item", body = Todo),
        (status = 404, description = "Id mismatch or item not found", body = ErrorResponse),
    )
)]
pub async fn patch_todo(
    State(state): State<AppState>,
    Path(id): Path<TodoId>,
    Json(todo): Json<Todo>,
) -> Result<Json<Todo>, ApiError> {
    replace(&state, id, todo).await
}

/// `DELETE /api/todoitem/{id}` — Remove a todo item.
#[utoipa::path(
    delete,
    path = "/api/todoitem/{id}",
    tag = "TodoItem",
    summary = "Delete a todo item",
    description = "Removes the item if present. Deleting an absent id is a no-op.",
    params(
        ("id" = i64, Path, description = "Todo item id"),
    ),
    responses(
        (status = 204, description = "Item removed or already absent"),
    )
)]
pub async fn delete_todo(State(state): State<AppState>, Path(id): Path<TodoId>) -> StatusCode {
    state.todo_service.delete_todo(id).await;
    StatusCode::NO_CONTENT
}

async fn replace(state: &AppState, id: TodoId, todo: Todo) -> Result<Json<Todo>, ApiError> {
    state.todo_service.update_todo(id, todo).await.map(Json)
}

/// Todo item routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(TODO_ITEM_PATH, get(list_todos).post(create_todo))
        .route(
            "/api/todoitem/{id}",
            get(get_todo)
                .put(update_todo)
                .patch(patch_todo)
                .delete(delete_todo),
        )
}
