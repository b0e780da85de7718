// src/error.rs
//! Error types for the route extractor

use std::fmt;

pub type Result<T> = std::result::Result<T, RouteError>;

/// Fatal, run-level errors.
///
/// Per-sentence problems never show up here; those are counted outcomes
/// in the pipeline, not errors.
#[derive(Debug)]
pub enum RouteError {
    Io(std::io::Error),
    Json(serde_json::Error),
    Config(String),
    Other(String),
}

impl fmt::Display for RouteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteError::Io(e) => write!(f, "IO error: {}", e),
            RouteError::Json(e) => write!(f, "JSON error: {}", e),
            RouteError::Config(msg) => write!(f, "Config error: {}", msg),
            RouteError::Other(msg) => write!(f, "Error: {}", msg),
        }
    }
}

impl std::error::Error for RouteError {}

impl From<std::io::Error> for RouteError {
    fn from(error: std::io::Error) -> Self {
        RouteError::Io(error)
    }
}

impl From<serde_json::Error> for RouteError {
    fn from(error: serde_json::Error) -> Self {
        RouteError::Json(error)
    }
}

impl From<anyhow::Error> for RouteError {
    fn from(error: anyhow::Error) -> Self {
        RouteError::Other(error.to_string())
    }
}
