//! Prediction pipeline - scale, expand, predict, clip.
//!
//! Pure function of the input given a fixed [`ArtifactStore`]; repeating a
//! request against the same store yields the identical score.

use ndarray::Array1;

use crate::artifacts::ArtifactStore;
use crate::constants::{SCORE_MAX, SCORE_MIN};
use crate::error::PredictError;
use crate::features::FeatureVector;

/// Full output of one pipeline run, intermediates included so the CLI can
/// print them as diagnostics.
#[derive(Debug, Clone)]
pub struct Prediction {
    /// Input after the fitted scaler.
    pub scaled: Array1<f64>,
    /// Scaled input after polynomial expansion.
    pub expanded: Array1<f64>,
    /// Raw model output before clipping.
    pub raw_score: f64,
    /// Final score, clipped to [SCORE_MIN, SCORE_MAX].
    pub health_score: f64,
}

impl Prediction {
    /// Score rounded to 2 decimals for presentation.
    pub fn rounded_score(&self) -> f64 {
        (self.health_score * 100.0).round() / 100.0
    }
}

/// Run the fitted transforms in training order over a validated input.
pub fn predict_health_score(
    store: &ArtifactStore,
    input: &FeatureVector,
) -> Result<Prediction, PredictError> {
    let scaled = store.scaler.transform(input.as_array())?;
    let expanded = store.poly.transform(&scaled)?;
    let raw_score = store.model.predict(&expanded)?;
    let health_score = raw_score.clamp(SCORE_MIN, SCORE_MAX);

    Ok(Prediction {
        scaled,
        expanded,
        raw_score,
        health_score,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifacts::{PolyRegression, PolynomialExpander, StandardScaler};
    use crate::features::layout::{layout_hash, FEATURE_COUNT, FEATURE_VERSION};
    use std::path::PathBuf;

    /// Store whose score is just `gain * BMI + offset`.
    fn linear_store(gain: f64, offset: f64) -> ArtifactStore {
        let scaler = StandardScaler {
            feature_version: FEATURE_VERSION,
            layout_hash: layout_hash(),
            mean: vec![0.0; FEATURE_COUNT],
            scale: vec![1.0; FEATURE_COUNT],
        };
        let poly = PolynomialExpander {
            feature_version: FEATURE_VERSION,
            layout_hash: layout_hash(),
            degree: 1,
            include_bias: false,
            powers: vec![
                vec![1, 0, 0, 0],
                vec![0, 1, 0, 0],
                vec![0, 0, 1, 0],
                vec![0, 0, 0, 1],
            ],
        };
        let model = PolyRegression {
            n_features: 4,
            coefficients: vec![gain, 0.0, 0.0, 0.0],
            intercept: offset,
        };
        ArtifactStore::from_parts(scaler, poly, model, PathBuf::from(".")).unwrap()
    }

    #[test]
    fn score_is_clipped_to_upper_bound() {
        let store = linear_store(10.0, 0.0);
        let input = FeatureVector::new(50.0, 0.0, 0.0, 0.0);
        let p = predict_health_score(&store, &input).unwrap();
        assert_eq!(p.raw_score, 500.0);
        assert_eq!(p.health_score, SCORE_MAX);
    }

    #[test]
    fn score_is_clipped_to_lower_bound() {
        let store = linear_store(10.0, 0.0);
        let input = FeatureVector::new(-50.0, 0.0, 0.0, 0.0);
        let p = predict_health_score(&store, &input).unwrap();
        assert_eq!(p.raw_score, -500.0);
        assert_eq!(p.health_score, SCORE_MIN);
    }

    #[test]
    fn in_range_score_is_untouched() {
        let store = linear_store(1.0, 40.0);
        let input = FeatureVector::new(25.0, 0.0, 0.0, 0.0);
        let p = predict_health_score(&store, &input).unwrap();
        assert_eq!(p.health_score, 65.0);
        assert_eq!(p.raw_score, p.health_score);
    }

    #[test]
    fn rounded_score_has_two_decimals() {
        let store = linear_store(1.0, 0.123456);
        let input = FeatureVector::new(70.0, 0.0, 0.0, 0.0);
        let p = predict_health_score(&store, &input).unwrap();
        assert_eq!(p.rounded_score(), 70.12);
    }

    #[test]
    fn prediction_is_idempotent() {
        let store = linear_store(2.5, 7.0);
        let input = FeatureVector::new(20.0, 3.0, 6.5, 1.0);
        let a = predict_health_score(&store, &input).unwrap();
        let b = predict_health_score(&store, &input).unwrap();
        assert_eq!(a.health_score, b.health_score);
        assert_eq!(a.scaled, b.scaled);
        assert_eq!(a.expanded, b.expanded);
    }

    #[test]
    fn intermediates_are_exposed() {
        let store = linear_store(1.0, 0.0);
        let input = FeatureVector::new(1.0, 2.0, 3.0, 4.0);
        let p = predict_health_score(&store, &input).unwrap();
        assert_eq!(p.scaled.to_vec(), vec![1.0, 2.0, 3.0, 4.0]);
        assert_eq!(p.expanded.len(), store.poly.output_arity());
    }
}
