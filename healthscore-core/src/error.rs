//! Per-request error taxonomy for the prediction pipeline.
//!
//! Startup-time artifact failures live in [`crate::artifacts::ArtifactError`];
//! this enum covers everything that can go wrong after the artifacts are
//! loaded. All variants terminate the request without a prediction.

#[derive(Debug, Clone)]
pub enum PredictError {
    /// Input failed validation. `field` names the offending input.
    Validation { field: String, reason: String },
    /// The scaler or the polynomial expansion failed.
    Transform(String),
    /// The regression model could not produce a score.
    Prediction(String),
}

impl PredictError {
    pub fn validation(field: &str, reason: impl Into<String>) -> Self {
        PredictError::Validation {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}

impl std::fmt::Display for PredictError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PredictError::Validation { field, reason } => {
                write!(f, "Field '{}': {}", field, reason)
            }
            PredictError::Transform(msg) => write!(f, "Transform error: {}", msg),
            PredictError::Prediction(msg) => write!(f, "Prediction error: {}", msg),
        }
    }
}

impl std::error::Error for PredictError {}
