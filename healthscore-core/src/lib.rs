//! Health Score Prediction - Core Pipeline
//!
//! Shared library behind the `predict-health` CLI and the HTTP server:
//! fitted artifact loading, input validation, and the scale → expand →
//! predict → clip pipeline.
//!
//! The model itself is not trained here. Three pre-fitted objects (a
//! standard scaler, a polynomial expander, and a linear model over the
//! expanded terms) are deserialized from disk at startup and held as
//! read-only state for the lifetime of the process.

pub mod artifacts;
pub mod category;
pub mod constants;
pub mod error;
pub mod features;
pub mod pipeline;

// Re-export common types
pub use artifacts::{ArtifactError, ArtifactStore};
pub use category::ScoreCategory;
pub use error::PredictError;
pub use features::FeatureVector;
pub use pipeline::{predict_health_score, Prediction};
