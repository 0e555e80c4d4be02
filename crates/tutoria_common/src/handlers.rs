// --- File: crates/tutoria_common/src/handlers.rs ---

use axum::Json;
use serde_json::{json, Value};

/// Liveness probe. Unauthenticated by design.
pub async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
