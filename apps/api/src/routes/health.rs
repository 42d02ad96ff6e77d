use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /ping
/// Liveness probe. Ignores body and headers.
pub async fn ping_handler() -> &'static str {
    "pong"
}

/// GET /health
/// Returns a simple status object with service version.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "scouting-api",
        "llm_configured": state.config.openai_api_key.is_some(),
    }))
}
