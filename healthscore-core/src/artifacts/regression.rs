//! Fitted polynomial regression model.
//!
//! A linear model over the expanded terms: `coefficients · terms +
//! intercept`. The coefficient for a bias term, if the expander emits one,
//! is already folded into the serialized values.

use ndarray::{aview1, Array1};
use serde::{Deserialize, Serialize};

use super::store::ArtifactError;
use crate::error::PredictError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolyRegression {
    /// Number of expanded terms the model was fitted on.
    pub n_features: usize,
    pub coefficients: Vec<f64>,
    pub intercept: f64,
}

impl PolyRegression {
    /// Checks performed once at load time.
    pub(crate) fn validate(&self) -> Result<(), ArtifactError> {
        if self.coefficients.is_empty() {
            return Err(ArtifactError::Shape(
                "model has no coefficients".to_string(),
            ));
        }

        if self.coefficients.len() != self.n_features {
            return Err(ArtifactError::Shape(format!(
                "model declares {} features but carries {} coefficients",
                self.n_features,
                self.coefficients.len()
            )));
        }

        if !self.intercept.is_finite() || self.coefficients.iter().any(|c| !c.is_finite()) {
            return Err(ArtifactError::Shape(
                "model parameters must be finite".to_string(),
            ));
        }

        Ok(())
    }

    /// Raw (unclipped) score for one expanded row.
    pub fn predict(&self, expanded: &Array1<f64>) -> Result<f64, PredictError> {
        if expanded.len() != self.coefficients.len() {
            return Err(PredictError::Prediction(format!(
                "model expects {} terms, got {}",
                self.coefficients.len(),
                expanded.len()
            )));
        }

        let raw = aview1(&self.coefficients).dot(expanded) + self.intercept;
        if !raw.is_finite() {
            return Err(PredictError::Prediction(
                "model produced a non-finite score".to_string(),
            ));
        }

        Ok(raw)
    }
}
