pub mod chat;
pub mod dashboard;
pub mod project;

use axum::routing::{get, post};
use axum::Router;

use crate::state::AppState;

/// Build the full HTTP router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(dashboard::index))
        .route("/v1/chat", post(chat::chat))
        .route("/v1/project", get(project::project))
        .route("/v1/context", get(project::context))
        .route("/v1/health", get(health))
        .with_state(state)
}

async fn health() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({ "status": "ok" }))
}
