//! Polynomial feature expansion artifact.
//!
//! The fitted expander is shipped as an explicit exponent matrix: one row
//! per output term, one exponent per input feature. Term `t` of the output
//! is the product of the scaled inputs raised to row `t`'s exponents, which
//! reproduces the expansion the model was trained on without re-deriving
//! the combinatorics at runtime.

use ndarray::Array1;
use serde::{Deserialize, Serialize};

use super::store::ArtifactError;
use crate::error::PredictError;
use crate::features::layout::{validate_layout, FEATURE_COUNT};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolynomialExpander {
    pub feature_version: u8,
    pub layout_hash: u32,
    pub degree: u8,
    pub include_bias: bool,
    /// Exponent matrix: `powers[t][i]` is the exponent of feature `i` in
    /// output term `t`.
    pub powers: Vec<Vec<u8>>,
}

impl PolynomialExpander {
    /// Number of terms the expansion produces.
    pub fn output_arity(&self) -> usize {
        self.powers.len()
    }

    /// Checks performed once at load time.
    pub(crate) fn validate(&self) -> Result<(), ArtifactError> {
        validate_layout(self.feature_version, self.layout_hash)?;

        if self.powers.is_empty() {
            return Err(ArtifactError::Shape(
                "expander has an empty power matrix".to_string(),
            ));
        }

        for (t, row) in self.powers.iter().enumerate() {
            if row.len() != FEATURE_COUNT {
                return Err(ArtifactError::Shape(format!(
                    "power row {} has {} exponents, layout has {} features",
                    t,
                    row.len(),
                    FEATURE_COUNT
                )));
            }
            let total: u32 = row.iter().map(|&p| p as u32).sum();
            if total > self.degree as u32 {
                return Err(ArtifactError::Shape(format!(
                    "power row {} has total degree {}, expander degree is {}",
                    t, total, self.degree
                )));
            }
        }

        Ok(())
    }

    /// Expand a scaled input row into polynomial terms.
    pub fn transform(&self, scaled: &Array1<f64>) -> Result<Array1<f64>, PredictError> {
        let arity = scaled.len();
        let mut expanded = Array1::zeros(self.powers.len());

        for (t, row) in self.powers.iter().enumerate() {
            if row.len() != arity {
                return Err(PredictError::Transform(format!(
                    "power row {} has {} exponents, input has {} features",
                    t,
                    row.len(),
                    arity
                )));
            }

            let mut term = 1.0;
            for (i, &p) in row.iter().enumerate() {
                if p > 0 {
                    term *= scaled[i].powi(p as i32);
                }
            }
            expanded[t] = term;
        }

        Ok(expanded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::layout::{layout_hash, FEATURE_VERSION};
    use ndarray::array;

    fn degree_two_expander() -> PolynomialExpander {
        PolynomialExpander {
            feature_version: FEATURE_VERSION,
            layout_hash: layout_hash(),
            degree: 2,
            include_bias: true,
            powers: vec![
                vec![0, 0, 0, 0],
                vec![1, 0, 0, 0],
                vec![0, 1, 0, 0],
                vec![2, 0, 0, 0],
                vec![1, 0, 0, 1],
            ],
        }
    }

    #[test]
    fn expansion_matches_exponent_matrix() {
        let poly = degree_two_expander();
        let expanded = poly.transform(&array![2.0, 3.0, 5.0, 7.0]).unwrap();
        // bias, x0, x1, x0^2, x0*x3
        assert_eq!(expanded.to_vec(), vec![1.0, 2.0, 3.0, 4.0, 14.0]);
    }

    #[test]
    fn output_arity_is_row_count() {
        assert_eq!(degree_two_expander().output_arity(), 5);
    }

    #[test]
    fn transform_rejects_arity_mismatch() {
        let poly = degree_two_expander();
        let err = poly.transform(&array![1.0, 2.0]).unwrap_err();
        assert!(matches!(err, PredictError::Transform(_)));
    }

    #[test]
    fn validate_rejects_row_above_degree() {
        let mut poly = degree_two_expander();
        poly.powers.push(vec![2, 1, 0, 0]);
        assert!(poly.validate().is_err());
    }

    #[test]
    fn validate_rejects_short_row() {
        let mut poly = degree_two_expander();
        poly.powers.push(vec![1, 0]);
        assert!(poly.validate().is_err());
    }
}
