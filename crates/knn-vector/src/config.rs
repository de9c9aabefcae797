//! Index configuration.

use serde::{Deserialize, Serialize};

/// Brute-force index configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    /// Reject NaN/infinite coordinates at build and query time.
    /// When false, non-finite inputs flow through to the metric and
    /// produce NaN distances.
    /// Default: false
    pub reject_non_finite: bool,
}

impl IndexConfig {
    /// Create a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether non-finite coordinates are rejected.
    pub fn with_reject_non_finite(mut self, reject: bool) -> Self {
        self.reject_non_finite = reject;
        self
    }
}
