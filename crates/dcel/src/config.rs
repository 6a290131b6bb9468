//! Construction options for [`Dcel`](crate::Dcel)
//!
//! Serializable so hosts can keep the options next to their other mesh
//! pipeline settings.

use serde::{Deserialize, Serialize};

/// Default for [`BuildConfig::validate_input`]
pub const DEFAULT_VALIDATE_INPUT: bool = true;

/// Default for [`BuildConfig::twin_lookup`]
pub const DEFAULT_TWIN_LOOKUP: TwinLookup = TwinLookup::EdgeMap;

/// How construction finds the pending boundary twin a triangle edge claims
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TwinLookup {
    /// Scan every pending half-edge. O(pending) per triangle edge.
    LinearScan,
    /// Hash map keyed by directed `(origin, destination)` vertex pair.
    EdgeMap,
}

impl Default for TwinLookup {
    fn default() -> Self {
        DEFAULT_TWIN_LOOKUP
    }
}

/// Options for building a [`Dcel`](crate::Dcel) from indexed triangles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Strategy used to match triangle edges against pending twins
    pub twin_lookup: TwinLookup,
    /// Reject malformed index buffers with an error instead of trusting them.
    ///
    /// When disabled, out-of-range indices panic and non-manifold or
    /// inconsistently wound input produces an unspecified graph.
    pub validate_input: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            twin_lookup: DEFAULT_TWIN_LOOKUP,
            validate_input: DEFAULT_VALIDATE_INPUT,
        }
    }
}

impl BuildConfig {
    /// Config using the given twin lookup strategy and default checks
    pub fn with_twin_lookup(twin_lookup: TwinLookup) -> Self {
        Self {
            twin_lookup,
            ..Self::default()
        }
    }

    /// Config that trusts its input (no validation pass)
    pub fn trusted() -> Self {
        Self {
            validate_input: false,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BuildConfig::default();
        assert_eq!(config.twin_lookup, TwinLookup::EdgeMap);
        assert!(config.validate_input);
    }

    #[test]
    fn test_trusted_config_skips_validation() {
        let config = BuildConfig::trusted();
        assert!(!config.validate_input);
        assert_eq!(config.twin_lookup, DEFAULT_TWIN_LOOKUP);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: BuildConfig =
            serde_json::from_str(r#"{ "twin_lookup": "linear_scan" }"#).unwrap();
        assert_eq!(config.twin_lookup, TwinLookup::LinearScan);
        assert_eq!(config.validate_input, DEFAULT_VALIDATE_INPUT);
    }
}
