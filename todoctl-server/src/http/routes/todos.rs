//! Todo endpoints
//!
//! All paths carry a trailing slash, matching the published API contract.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Serialize;

use crate::db::TodoRepo;
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::{Page, PageParams, Todo, TodoDraft};

/// Delete confirmation response
#[derive(Serialize)]
pub struct DeleteResponse {
    pub message: String,
}

/// GET /todos/ - list todos with skip/take pagination
async fn list_todos(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PageParams>,
) -> Result<Json<Vec<Todo>>, ApiError> {
    let page = Page::from(params);
    let todos = TodoRepo::new(&state.pool).list(page).await?;
    Ok(Json(todos))
}

/// GET /todos/{id}/ - get a single todo
async fn get_todo(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<Todo>, ApiError> {
    let todo = TodoRepo::new(&state.pool).get(id).await?;
    Ok(Json(todo))
}

/// POST /todos/ - create a new todo
async fn create_todo(
    State(state): State<Arc<AppState>>,
    Json(draft): Json<TodoDraft>,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    let todo = TodoRepo::new(&state.pool).create(draft).await?;
    Ok((StatusCode::CREATED, Json(todo)))
}

/// PUT /todos/{id}/ - full overwrite of an existing todo
///
/// The update is unconditional; a missing id still reports success
/// with the payload merged with the given id.
async fn update_todo(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Json(draft): Json<TodoDraft>,
) -> Result<Json<Todo>, ApiError> {
    let todo = TodoRepo::new(&state.pool).update(id, draft).await?;
    Ok(Json(todo))
}

/// DELETE /todos/{id}/ - delete a todo
///
/// Returns a confirmation even when no row matched, mirroring update.
async fn delete_todo(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<DeleteResponse>, ApiError> {
    TodoRepo::new(&state.pool).delete(id).await?;
    Ok(Json(DeleteResponse {
        message: format!("Todo with id: {} deleted successfully!", id),
    }))
}

/// Todo routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/todos/", get(list_todos).post(create_todo))
        .route(
            "/todos/{id}/",
            get(get_todo).put(update_todo).delete(delete_todo),
        )
}
