use axum::extract::State;
use axum::routing::post;
use axum::Router;
use serde::{Deserialize, Serialize};

use crate::extractors::JsonBody;
use crate::insights::predictor;
use crate::insights::types::{PredictionResult, UserStats};
use crate::response::{ok, AppError};
use crate::state::AppState;
use crate::validation::{validate_user_id, validate_user_stats};

pub fn router() -> Router<AppState> {
    Router::new().route("/", post(predict_performance))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictRequest {
    pub user_id: String,
    pub quiz_id: String,
    pub user_stats: UserStats,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictResponse {
    #[serde(flatten)]
    pub prediction: PredictionResult,
    pub suggestions: Vec<String>,
}

async fn predict_performance(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<PredictRequest>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    validate_user_id(&req.user_id).map_err(AppError::validation)?;
    validate_user_stats(&req.user_stats).map_err(AppError::validation)?;

    let prediction = state.engine().predict(&req.user_stats);
    tracing::debug!(
        user_id = %req.user_id,
        quiz_id = %req.quiz_id,
        predicted_score = prediction.predicted_score,
        confidence = prediction.confidence,
        "Score predicted"
    );

    Ok(ok(PredictResponse {
        suggestions: predictor::suggestions(prediction.predicted_score),
        prediction,
    }))
}
