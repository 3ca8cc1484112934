use std::collections::HashMap;

use axum::extract::State;
use axum::routing::post;
use axum::Router;
use serde::Deserialize;

use crate::constants::DEFAULT_RECOMMEND_COUNT;
use crate::extractors::JsonBody;
use crate::insights::config::RecommendStrategy;
use crate::insights::types::LearnerContext;
use crate::response::{ok, AppError};
use crate::state::AppState;
use crate::validation::{validate_count, validate_level, validate_user_id};

pub fn router() -> Router<AppState> {
    Router::new().route("/", post(get_recommendations))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendRequest {
    pub user_id: String,
    pub total_points: u64,
    pub level: u32,
    #[serde(default)]
    pub preferences: Option<HashMap<String, serde_json::Value>>,
    /// Overrides the configured strategy for this request.
    #[serde(default)]
    pub strategy: Option<RecommendStrategy>,
    /// Catalog strategy only.
    #[serde(default)]
    pub count: Option<usize>,
}

async fn get_recommendations(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<RecommendRequest>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    validate_user_id(&req.user_id).map_err(AppError::validation)?;
    validate_level(req.level).map_err(AppError::validation)?;
    let count = req.count.unwrap_or(DEFAULT_RECOMMEND_COUNT);
    validate_count(count).map_err(AppError::validation)?;

    let learner = LearnerContext {
        level: req.level,
        total_points: req.total_points,
        preferences: req.preferences.unwrap_or_default(),
    };
    let set = state.engine().recommend_with(req.strategy, &learner, count);
    tracing::debug!(
        user_id = %req.user_id,
        level = learner.level,
        total_points = learner.total_points,
        returned = set.len(),
        "Recommendations generated"
    );

    Ok(ok(set))
}
