//! Features Module - Input Layout and Validation
//!
//! The feature layout is the contract the bundled artifacts were fitted
//! against; everything downstream assumes the order defined in `layout`.

pub mod layout;
pub mod vector;

// Re-export common types
pub use layout::{FEATURE_COUNT, FEATURE_LAYOUT, FEATURE_VERSION};
pub use vector::FeatureVector;
