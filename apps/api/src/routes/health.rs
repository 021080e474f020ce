use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /api/health
/// Returns a simple status object with service version and the active email backend.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "OK",
        "message": "Internal mobility API is running",
        "version": env!("CARGO_PKG_VERSION"),
        "llmEnabled": state.config.llm_enabled(),
        "emailWriter": state.email_writer.backend(),
    }))
}
