//! Chat API endpoint. `POST /v1/chat` runs one turn for a session.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json};
use serde::Deserialize;

use crate::runtime::run_turn;
use crate::state::AppState;

/// Session key used when the client does not name one.
const DEFAULT_SESSION: &str = "web:default";

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    /// Explicit session key. Each key gets its own independent transcript.
    #[serde(default)]
    pub session_key: Option<String>,
    /// User question text. Must be non-empty.
    pub message: String,
}

pub async fn chat(
    State(state): State<AppState>,
    Json(body): Json<ChatRequest>,
) -> impl IntoResponse {
    let message = body.message.trim();
    if message.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({ "error": "message must not be empty" })),
        )
            .into_response();
    }

    let session_key = body.session_key.as_deref().unwrap_or(DEFAULT_SESSION);
    let transcript = state.sessions.resolve_or_create(session_key);

    // Hold the session lock for the whole turn: one submission is fully
    // processed before the next one for the same session is accepted.
    let mut transcript = transcript.lock().await;
    let outcome = run_turn(
        state.provider.as_ref(),
        &state.config.llm,
        &state.context,
        &mut transcript,
        message,
    )
    .await;

    Json(serde_json::json!({
        "session_key": session_key,
        "reply": outcome.reply,
        "failed": outcome.failed,
        "turns": transcript.turns(),
    }))
    .into_response()
}
