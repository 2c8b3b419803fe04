use axum::Json;
use chrono::Utc;
use serde_json::{json, Value};

/// GET /api/health
/// Liveness probe. Does not touch the database or the model provider.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": Utc::now().to_rfc3339(),
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
