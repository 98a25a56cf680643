//! Root endpoint

use axum::{routing::get, Json, Router};
use serde::Serialize;

/// Root response
#[derive(Serialize)]
pub struct HelloResponse {
    pub message: &'static str,
}

/// GET /
async fn hello() -> Json<HelloResponse> {
    Json(HelloResponse {
        message: "hello world",
    })
}

/// Root routes
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/", get(hello))
}
