pub mod health;
pub mod predict;
pub mod profile;
pub mod recommend;

use axum::extract::DefaultBodyLimit;
use axum::http::Uri;
use axum::routing::get;
use axum::{Json, Router};

use crate::middleware::request_id;
use crate::response::AppError;
use crate::state::AppState;

/// Maximum request body size: 1 MiB.
const MAX_BODY_SIZE: usize = 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .nest("/predict", predict::router())
        .nest("/profile", profile::router())
        .nest("/recommend", recommend::router())
        .layer(DefaultBodyLimit::max(MAX_BODY_SIZE));

    Router::new()
        .route("/", get(root))
        .merge(api_routes)
        .nest("/health", health::router())
        .fallback(not_found)
        .layer(axum::middleware::from_fn(request_id::request_id_middleware))
        .with_state(state)
}

async fn not_found(uri: Uri) -> AppError {
    AppError::not_found(&format!("No route for {}", uri.path()))
}

async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "message": "Gamification insights service is running",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
