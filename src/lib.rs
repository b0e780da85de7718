// src/lib.rs
//! NMEA Route Extractor Library
//!
//! Offline post-processing of NMEA-0183 tracklogs: two-pass $GPRMC
//! validation, temporal and spatial deduplication, and route output.

pub mod config;
pub mod dedup;
pub mod display;
pub mod error;
pub mod gps;
pub mod map;
pub mod pipeline;

// Re-export main types for convenience
pub use config::PipelineConfig;
pub use error::{Result, RouteError};
pub use gps::data::FixRecord;
pub use pipeline::{build_route, LineOutcome, RouteReport, RunStats};
