//! Feature Vector - validated model input.
//!
//! A `FeatureVector` always holds exactly [`FEATURE_COUNT`] values in
//! layout order. Construction goes through the validated paths below, so
//! downstream transforms never see a malformed row.

use serde::{Deserialize, Serialize};

use super::layout::{feature_index, FEATURE_COUNT, FEATURE_LAYOUT};
use crate::error::PredictError;

/// Raw input features in layout order (BMI, Exercise_Frequency,
/// Sleep_Hours, Smoking_Status).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    pub values: [f64; FEATURE_COUNT],
}

impl FeatureVector {
    pub fn new(bmi: f64, exercise_frequency: f64, sleep_hours: f64, smoking_status: f64) -> Self {
        Self {
            values: [bmi, exercise_frequency, sleep_hours, smoking_status],
        }
    }

    pub fn from_values(values: [f64; FEATURE_COUNT]) -> Self {
        Self { values }
    }

    /// Parse the CLI `--data` payload: four numeric tokens separated by
    /// whitespace or commas, in layout order.
    pub fn from_tokens(data: &str) -> Result<Self, PredictError> {
        let tokens: Vec<&str> = data
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|t| !t.is_empty())
            .collect();

        if tokens.len() != FEATURE_COUNT {
            return Err(PredictError::validation(
                "data",
                format!(
                    "expected {} numeric values, got {}",
                    FEATURE_COUNT,
                    tokens.len()
                ),
            ));
        }

        let mut values = [0.0f64; FEATURE_COUNT];
        for (i, token) in tokens.iter().enumerate() {
            values[i] = token.parse().map_err(|_| {
                PredictError::validation(
                    FEATURE_LAYOUT[i],
                    format!("'{}' is not a valid number", token),
                )
            })?;
        }

        Ok(Self { values })
    }

    pub fn as_array(&self) -> &[f64; FEATURE_COUNT] {
        &self.values
    }

    /// Get feature by name.
    pub fn get_by_name(&self, name: &str) -> Option<f64> {
        feature_index(name).map(|i| self.values[i])
    }
}
