// src/config.rs v2
//! Pipeline configuration with optional JSON file overrides

use crate::error::{Result, RouteError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default spatial deduplication epsilon in decimal degrees.
/// ~1e-5 deg is about 1.1 m at the equator: filters GPS jitter while
/// preserving any meaningful movement.
pub const DEFAULT_SPATIAL_EPSILON: f64 = 1e-5;

/// NMEA reports speed over ground in knots; convert to m/s.
pub const DEFAULT_KNOTS_TO_MPS: f64 = 0.514444;

/// Tunable thresholds threaded into the pipeline.
///
/// Kept as explicit values rather than compiled-in globals so runs (and
/// tests) can vary them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub spatial_epsilon: f64,
    pub knots_to_mps: f64,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            spatial_epsilon: DEFAULT_SPATIAL_EPSILON,
            knots_to_mps: DEFAULT_KNOTS_TO_MPS,
        }
    }
}

impl PipelineConfig {
    /// Load configuration from a JSON file; missing keys fall back to the
    /// built-in defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| RouteError::Config(format!("Failed to read config file: {}", e)))?;

        let config: Self = serde_json::from_str(&contents)
            .map_err(|e| RouteError::Config(format!("Failed to parse config file: {}", e)))?;

        Ok(config)
    }
}
