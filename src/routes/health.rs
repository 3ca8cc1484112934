use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(health_check))
        .route("/live", get(liveness))
        .route("/ready", get(readiness))
        .route("/metrics", get(metrics))
}

pub async fn health_check(State(state): State<AppState>) -> impl axum::response::IntoResponse {
    let engine = state.engine();
    Json(serde_json::json!({
        "status": "healthy",
        "uptimeSecs": state.uptime_secs(),
        "catalogItems": engine.catalog().len(),
        "rngSeeded": engine.is_seeded(),
        "engine": engine.config(),
    }))
}

pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// The catalog is loaded and validated before the listener binds, so a
/// serving process is always ready.
pub async fn readiness() -> StatusCode {
    StatusCode::OK
}

pub async fn metrics(State(state): State<AppState>) -> impl axum::response::IntoResponse {
    Json(serde_json::json!({
        "operations": state.engine().metrics_registry().snapshot(),
    }))
}
