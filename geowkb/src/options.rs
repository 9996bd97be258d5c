//! Reader configuration.

use serde::{Deserialize, Serialize};

/// Default limit of sub-geometry nesting.
pub const DEFAULT_MAX_NESTING_DEPTH: usize = 32;

/// Options controlling how untrusted WKB is decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WkbReadOptions {
    /// Reject a point or ring count as soon as it is read if the points it claims cannot fit into the rest of the
    /// buffer. When disabled, the same input still fails with a bounds error, but only when the first missing point
    /// is read.
    pub reject_oversized_counts: bool,
    /// Maximum nesting level of sub-geometries in multi-geometries and collections. The top level geometry has
    /// level `0`.
    pub max_nesting_depth: usize,
}

impl Default for WkbReadOptions {
    fn default() -> Self {
        Self {
            reject_oversized_counts: true,
            max_nesting_depth: DEFAULT_MAX_NESTING_DEPTH,
        }
    }
}

impl WkbReadOptions {
    /// Sets [`WkbReadOptions::reject_oversized_counts`].
    pub fn with_reject_oversized_counts(mut self, value: bool) -> Self {
        self.reject_oversized_counts = value;
        self
    }

    /// Sets [`WkbReadOptions::max_nesting_depth`].
    pub fn with_max_nesting_depth(mut self, value: usize) -> Self {
        self.max_nesting_depth = value;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_partial() {
        let options: WkbReadOptions = serde_json::from_str(r#"{"max_nesting_depth": 4}"#).unwrap();
        assert_eq!(
            options,
            WkbReadOptions::default().with_max_nesting_depth(4)
        );
        assert!(options.reject_oversized_counts);
    }
}
