//! Root handler

/// Static confirmation that the API is up.
pub async fn home() -> &'static str {
    "Health Score Prediction API - Polynomial Regression"
}
