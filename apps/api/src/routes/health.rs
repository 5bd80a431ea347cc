use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /
/// Static service descriptor listing the available endpoints.
pub async fn index_handler() -> Json<Value> {
    Json(json!({
        "status": "running",
        "message": "AI Networking Assistant Backend",
        "endpoints": ["/process-text", "/generate-advice", "/chat", "/health"]
    }))
}

/// GET /health
/// Liveness probe. `gemini_configured` only reflects that the credential is
/// present in the environment; the key is never validated against the API.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "gemini_configured": state.config.gemini_api_key.is_some()
    }))
}
