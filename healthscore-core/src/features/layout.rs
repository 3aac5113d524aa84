//! Feature Layout - Centralized Feature Definition
//!
//! The column order below is the order the scaler and polynomial expander
//! were fitted on. Reordering silently produces wrong predictions (the
//! transforms validate shape, not semantic identity), so every artifact
//! file embeds the version and hash defined here and the loader rejects
//! anything that does not match.
//!
//! Rules:
//! 1. Add feature → increment FEATURE_VERSION
//! 2. Change order → increment FEATURE_VERSION
//! 3. Remove feature → increment FEATURE_VERSION

use crc32fast::Hasher;

/// Current feature layout version.
/// MUST be incremented when the layout changes.
pub const FEATURE_VERSION: u8 = 1;

/// Feature names in the exact order they appear in the input vector.
/// This is the SINGLE SOURCE OF TRUTH for feature layout.
pub const FEATURE_LAYOUT: &[&str] = &[
    "BMI",                // 0: body mass index
    "Exercise_Frequency", // 1: exercise sessions per week
    "Sleep_Hours",        // 2: average hours of sleep per night
    "Smoking_Status",     // 3: smoking flag (0/1)
];

/// Total number of input features.
/// IMPORTANT: Must match FEATURE_LAYOUT.len()!
pub const FEATURE_COUNT: usize = 4;

/// Compute CRC32 hash of the feature layout.
/// Used to detect layout mismatches against serialized artifacts.
pub fn compute_layout_hash() -> u32 {
    let mut hasher = Hasher::new();

    // Include version in hash
    hasher.update(&[FEATURE_VERSION]);

    // Hash all feature names in order
    for name in FEATURE_LAYOUT {
        hasher.update(name.as_bytes());
        hasher.update(&[0]); // Separator
    }

    hasher.finalize()
}

/// Get layout hash.
pub fn layout_hash() -> u32 {
    // Inputs are const, so this is effectively a fixed value
    compute_layout_hash()
}

/// Error when an artifact's embedded layout doesn't match this build.
#[derive(Debug, Clone)]
pub struct LayoutMismatchError {
    pub expected_version: u8,
    pub expected_hash: u32,
    pub actual_version: u8,
    pub actual_hash: u32,
}

impl std::fmt::Display for LayoutMismatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Feature layout mismatch: expected v{} (hash: {:08x}), got v{} (hash: {:08x})",
            self.expected_version,
            self.expected_hash,
            self.actual_version,
            self.actual_hash
        )
    }
}

impl std::error::Error for LayoutMismatchError {}

/// Validate that serialized layout metadata matches the current layout.
pub fn validate_layout(incoming_version: u8, incoming_hash: u32) -> Result<(), LayoutMismatchError> {
    let current_hash = layout_hash();

    if incoming_version != FEATURE_VERSION || incoming_hash != current_hash {
        return Err(LayoutMismatchError {
            expected_version: FEATURE_VERSION,
            expected_hash: current_hash,
            actual_version: incoming_version,
            actual_hash: incoming_hash,
        });
    }

    Ok(())
}

/// Get feature index by name (O(n) but features are few).
pub fn feature_index(name: &str) -> Option<usize> {
    FEATURE_LAYOUT.iter().position(|&n| n == name)
}

/// Get feature name by index.
pub fn feature_name(index: usize) -> Option<&'static str> {
    FEATURE_LAYOUT.get(index).copied()
}
