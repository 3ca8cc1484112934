use axum::extract::State;
use axum::routing::post;
use axum::Router;
use serde::Deserialize;

use crate::extractors::JsonBody;
use crate::insights::types::{ActivityRecord, QuizRecord};
use crate::response::{ok, AppError};
use crate::state::AppState;
use crate::validation::{validate_activity_data, validate_quiz_history, validate_user_id};

pub fn router() -> Router<AppState> {
    Router::new().route("/analyze", post(analyze_learner_profile))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRequest {
    pub user_id: String,
    pub quiz_history: Vec<QuizRecord>,
    pub activity_data: Vec<ActivityRecord>,
}

async fn analyze_learner_profile(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<ProfileRequest>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    validate_user_id(&req.user_id).map_err(AppError::validation)?;
    validate_quiz_history(&req.quiz_history).map_err(AppError::validation)?;
    validate_activity_data(&req.activity_data).map_err(AppError::validation)?;

    let profile = state.engine().analyze(&req.quiz_history, &req.activity_data);
    tracing::debug!(
        user_id = %req.user_id,
        quizzes = req.quiz_history.len(),
        activities = req.activity_data.len(),
        learning_style = ?profile.learning_style,
        engagement = ?profile.engagement_level,
        "Learner profile analyzed"
    );

    Ok(ok(profile))
}
