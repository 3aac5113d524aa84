//! Artifacts Module - Pre-fitted Pipeline Objects
//!
//! The scaler, polynomial expander, and regression model are fitted
//! elsewhere and shipped as JSON files. This module only deserializes,
//! validates, and applies them; nothing here fits or adapts parameters.

pub mod poly;
pub mod regression;
pub mod scaler;
pub mod store;

// Re-export common types
pub use poly::PolynomialExpander;
pub use regression::PolyRegression;
pub use scaler::StandardScaler;
pub use store::{ArtifactError, ArtifactMetadata, ArtifactStore};
