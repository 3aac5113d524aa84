//! Error handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use healthscore_core::PredictError;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug)]
pub enum AppError {
    /// Request failed validation; the message names the offending field.
    Validation(String),

    /// The pipeline failed after validation (transform or model error).
    Pipeline(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation(msg) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "error": msg }))).into_response()
            }
            AppError::Pipeline(msg) => {
                tracing::error!("Prediction pipeline error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({
                        "error": msg,
                        "message": "Internal server error while computing the prediction. Please try again.",
                    })),
                )
                    .into_response()
            }
        }
    }
}

impl From<PredictError> for AppError {
    fn from(err: PredictError) -> Self {
        match err {
            PredictError::Validation { .. } => AppError::Validation(err.to_string()),
            PredictError::Transform(_) | PredictError::Prediction(_) => {
                AppError::Pipeline(err.to_string())
            }
        }
    }
}
