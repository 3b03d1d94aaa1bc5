//! Recommendation tunables.

use serde::{Deserialize, Serialize};

use super::defaults;

/// Configuration for recommendation queries.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct RecommendConfig {
    /// Number of recommendations returned. Default: 10.
    pub top_n: Option<usize>,
    /// Minimum co-rating count for a title to be compared. Default: 8.
    pub min_ratings: Option<usize>,
    /// Minimum itemset support for rule mining. Default: 0.05.
    pub min_support: Option<f64>,
    /// Minimum rule lift. Default: 2.0.
    pub min_lift: Option<f64>,
}

impl RecommendConfig {
    /// Returns the effective result size, defaulting to 10.
    pub fn effective_top_n(&self) -> usize {
        self.top_n.unwrap_or(defaults::DEFAULT_TOP_N)
    }

    /// Returns the effective co-rating threshold, defaulting to 8.
    pub fn effective_min_ratings(&self) -> usize {
        self.min_ratings.unwrap_or(defaults::DEFAULT_MIN_RATINGS)
    }

    /// Returns the effective minimum support, defaulting to 0.05.
    pub fn effective_min_support(&self) -> f64 {
        self.min_support.unwrap_or(defaults::DEFAULT_MIN_SUPPORT)
    }

    /// Returns the effective minimum lift, defaulting to 2.0.
    pub fn effective_min_lift(&self) -> f64 {
        self.min_lift.unwrap_or(defaults::DEFAULT_MIN_LIFT)
    }
}
