//! Shared constants.

/// Artifact file names inside the artifact directory.
pub const SCALER_FILE: &str = "health_scaler.json";
pub const POLY_FILE: &str = "poly_features.json";
pub const MODEL_FILE: &str = "poly_model.json";

/// Default artifact directory, relative to the working directory.
pub const DEFAULT_ARTIFACT_DIR: &str = "artifacts";

/// Health score bounds. Raw model output is clipped to this closed interval.
pub const SCORE_MIN: f64 = 0.0;
pub const SCORE_MAX: f64 = 100.0;
