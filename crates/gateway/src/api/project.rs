//! Introspection endpoints: the record as JSON and the assembled context.

use axum::extract::State;
use axum::response::{IntoResponse, Json};

use crate::state::AppState;

/// `GET /v1/project` returns the record plus the computed financial view.
pub async fn project(State(state): State<AppState>) -> impl IntoResponse {
    let fin = &state.finances;
    Json(serde_json::json!({
        "record": &state.config.project,
        "finances": {
            "budget": fin.budget,
            "spent": fin.spent,
            "remaining": fin.remaining(),
            "overspent": fin.overspent(),
        },
    }))
}

/// `GET /v1/context` returns the exact context block sent with every prompt.
pub async fn context(State(state): State<AppState>) -> impl IntoResponse {
    state.context.as_str().to_owned()
}
