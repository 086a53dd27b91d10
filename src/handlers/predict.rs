// src/handlers/predict.rs

use axum::{
    Extension, Json,
    extract::{Form, State, rejection::FormRejection},
};
use validator::Validate;

use crate::{
    error::AppError,
    models::{report::PredictionReport, submission::PredictRequest},
    state::AppState,
    utils::session::CurrentUser,
};

/// Runs the prediction pipeline for one quiz attempt.
///
/// Classifies the attempt into a proficiency band, asks the coaching API
/// for a study plan (best-effort), pulls the topic's score history and
/// assembles the result view.
pub async fn predict(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    payload: Result<Form<PredictRequest>, FormRejection>,
) -> Result<Json<PredictionReport>, AppError> {
    let Form(payload) = payload.map_err(|e| AppError::BadRequest(e.to_string()))?;

    if let Err(validation_errors) = payload.validate() {
        return Err(AppError::BadRequest(validation_errors.to_string()));
    }

    let strength = state
        .model
        .classify(&payload.topic, payload.quiz_no, payload.time_taken)?;

    let study_plan = state
        .planner
        .generate_plan(strength, &payload.topic, payload.time_taken)
        .await;

    let history = state.history.for_topic(&payload.topic)?;

    Ok(Json(PredictionReport {
        user,
        topic: payload.topic,
        strength,
        badge_color: strength.badge_color().to_string(),
        study_plan,
        performance_data: history.scores,
        labels: history.quiz_numbers,
    }))
}
