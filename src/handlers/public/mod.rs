// handlers/public/mod.rs - Public handlers (no authentication required)
//
// Security Level: None
// Routes: GET / (service info), GET /health (data-store ping)

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET / - service name, version and route overview
pub async fn root() -> Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    Json(json!({
        "name": "Blog API (Rust)",
        "version": version,
        "endpoints": {
            "health": "/health (public)",
            "blog": "/api/v1/blog, /api/v1/blog/bulk, /api/v1/blog/:id (bearer token)",
        }
    }))
}

/// GET /health - 200 when the data store answers, 503 otherwise
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let now = chrono::Utc::now();

    match state.store.health_check().await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({
                "status": "ok",
                "timestamp": now,
                "database": "ok"
            })),
        ),
        Err(e) => {
            tracing::warn!("Health check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "status": "degraded",
                    "timestamp": now,
                    "error": "database unavailable"
                })),
            )
        }
    }
}
