//! Standard scaler artifact.
//!
//! Per-feature `mean` and `scale` learned at fit time. Applies
//! `(x - mean) / scale` element-wise; transform only, never refit.

use ndarray::Array1;
use serde::{Deserialize, Serialize};

use super::store::ArtifactError;
use crate::error::PredictError;
use crate::features::layout::{validate_layout, FEATURE_COUNT};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandardScaler {
    pub feature_version: u8,
    pub layout_hash: u32,
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

impl StandardScaler {
    /// Checks performed once at load time.
    pub(crate) fn validate(&self) -> Result<(), ArtifactError> {
        validate_layout(self.feature_version, self.layout_hash)?;

        if self.mean.len() != FEATURE_COUNT || self.scale.len() != FEATURE_COUNT {
            return Err(ArtifactError::Shape(format!(
                "scaler has {} mean / {} scale entries, layout has {} features",
                self.mean.len(),
                self.scale.len(),
                FEATURE_COUNT
            )));
        }

        if self.scale.iter().any(|s| !s.is_finite() || *s <= 0.0) {
            return Err(ArtifactError::Shape(
                "scaler scale entries must be finite and positive".to_string(),
            ));
        }

        Ok(())
    }

    /// Apply the learned normalization to a raw input row.
    pub fn transform(&self, values: &[f64; FEATURE_COUNT]) -> Result<Array1<f64>, PredictError> {
        if self.mean.len() != FEATURE_COUNT || self.scale.len() != FEATURE_COUNT {
            return Err(PredictError::Transform(format!(
                "scaler expects {} features, artifact carries {}",
                FEATURE_COUNT,
                self.mean.len()
            )));
        }

        let mut scaled = Array1::zeros(FEATURE_COUNT);
        for i in 0..FEATURE_COUNT {
            scaled[i] = (values[i] - self.mean[i]) / self.scale[i];
        }

        Ok(scaled)
    }
}
