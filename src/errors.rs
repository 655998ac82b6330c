//! Error types for the status dashboard

use std::fmt;

pub type Result<T> = std::result::Result<T, DashboardError>;

#[derive(Debug)]
pub enum DashboardError {
    /// Configuration error
    Config(String),

    /// Requested service is not in the registry
    UnknownService(String),

    /// Unrecognized sampling resolution token
    InvalidResolution(String),

    /// Unrecognized status token
    InvalidStatus(String),

    /// Non-positive sampling interval or lookback window
    InvalidWindow(String),

    /// JSON serialization/deserialization failed
    Json(serde_json::Error),
}

impl fmt::Display for DashboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DashboardError::Config(msg) => write!(f, "Configuration error: {}", msg),
            DashboardError::UnknownService(name) => write!(f, "Unknown service: {}", name),
            DashboardError::InvalidResolution(token) => {
                write!(f, "Invalid resolution: {}", token)
            }
            DashboardError::InvalidStatus(token) => write!(f, "Invalid status: {}", token),
            DashboardError::InvalidWindow(msg) => write!(f, "Invalid window: {}", msg),
            DashboardError::Json(err) => write!(f, "JSON error: {}", err),
        }
    }
}

impl std::error::Error for DashboardError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DashboardError::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for DashboardError {
    fn from(err: serde_json::Error) -> Self {
        DashboardError::Json(err)
    }
}
