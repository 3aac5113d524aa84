//! Score category - fixed threshold buckets for the CLI report.
//!
//! Plain threshold classification over the clipped score, nothing learned.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreCategory {
    SangatBaik,
    Baik,
    Cukup,
    Buruk,
}

impl ScoreCategory {
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            ScoreCategory::SangatBaik
        } else if score >= 60.0 {
            ScoreCategory::Baik
        } else if score >= 40.0 {
            ScoreCategory::Cukup
        } else {
            ScoreCategory::Buruk
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScoreCategory::SangatBaik => "Sangat Baik",
            ScoreCategory::Baik => "Baik",
            ScoreCategory::Cukup => "Cukup",
            ScoreCategory::Buruk => "Buruk",
        }
    }
}

impl std::fmt::Display for ScoreCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_are_inclusive_at_the_bottom() {
        assert_eq!(ScoreCategory::from_score(80.0), ScoreCategory::SangatBaik);
        assert_eq!(ScoreCategory::from_score(79.99), ScoreCategory::Baik);
        assert_eq!(ScoreCategory::from_score(60.0), ScoreCategory::Baik);
        assert_eq!(ScoreCategory::from_score(59.99), ScoreCategory::Cukup);
        assert_eq!(ScoreCategory::from_score(40.0), ScoreCategory::Cukup);
        assert_eq!(ScoreCategory::from_score(39.99), ScoreCategory::Buruk);
    }

    #[test]
    fn bounds_fall_into_outer_buckets() {
        assert_eq!(ScoreCategory::from_score(100.0), ScoreCategory::SangatBaik);
        assert_eq!(ScoreCategory::from_score(0.0), ScoreCategory::Buruk);
    }

    #[test]
    fn labels() {
        assert_eq!(ScoreCategory::SangatBaik.to_string(), "Sangat Baik");
        assert_eq!(ScoreCategory::Buruk.label(), "Buruk");
    }
}
