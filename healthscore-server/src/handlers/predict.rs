//! Prediction handler

use axum::{extract::State, Json};

use healthscore_core::predict_health_score;

use crate::models::{PredictRequest, PredictResponse};
use crate::{AppResult, AppState};

/// Run the full pipeline for one request.
pub async fn predict(
    State(state): State<AppState>,
    Json(req): Json<PredictRequest>,
) -> AppResult<Json<PredictResponse>> {
    let input = req.validate()?;
    tracing::debug!("Validated input: {:?}", input.values);

    let prediction = predict_health_score(&state.store, &input)?;

    tracing::info!("Predicted health score: {:.2}", prediction.health_score);

    let [bmi, exercise_frequency, sleep_hours, smoking_status] = *input.as_array();
    Ok(Json(PredictResponse {
        bmi,
        exercise_frequency,
        sleep_hours,
        smoking_status,
        health_score: prediction.rounded_score(),
        message: "Prediction computed successfully.".to_string(),
    }))
}
