//! Configuration for the status dashboard

use serde::{Deserialize, Serialize};
use std::env;

use crate::errors::{DashboardError, Result};
use crate::registry::DEFAULT_SERVICES;
use crate::status::Resolution;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Ordered list of service names shown on the dashboard
    pub service_names: Vec<String>,

    /// Total lookback window covered by each generated history, in hours
    pub history_window_hours: i64,

    /// Rolling uptime windows rendered per service, in hours
    pub uptime_window_hours: Vec<i64>,

    /// Sampling resolution used when the viewer has not picked one
    pub default_resolution: Resolution,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            service_names: DEFAULT_SERVICES.iter().map(|s| s.to_string()).collect(),
            history_window_hours: 72,
            uptime_window_hours: vec![24, 168, 720],
            default_resolution: Resolution::FifteenMinutes,
        }
    }
}

impl Config {
    /// Load configuration from environment variables, starting from the
    /// defaults. Unparsable resolutions and windows are errors rather than
    /// silent fallbacks.
    pub fn from_env() -> Result<Self> {
        let mut config = Config::default();

        if let Ok(names) = env::var("SERVICE_NAMES") {
            config.service_names = names
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
        }

        if let Ok(hours) = env::var("HISTORY_WINDOW_HOURS") {
            config.history_window_hours = hours.parse().map_err(|_| {
                DashboardError::Config(format!("invalid HISTORY_WINDOW_HOURS: {}", hours))
            })?;
        }

        if let Ok(windows) = env::var("UPTIME_WINDOW_HOURS") {
            config.uptime_window_hours = windows
                .split(',')
                .map(|s| {
                    s.trim().parse().map_err(|_| {
                        DashboardError::Config(format!("invalid UPTIME_WINDOW_HOURS: {}", windows))
                    })
                })
                .collect::<Result<Vec<i64>>>()?;
        }

        if let Ok(resolution) = env::var("DEFAULT_RESOLUTION") {
            config.default_resolution = resolution.parse()?;
        }

        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.service_names.is_empty() {
            return Err("at least one service name must be configured".to_string());
        }

        if self.history_window_hours <= 0 {
            return Err("history_window_hours must be greater than 0".to_string());
        }

        if self.uptime_window_hours.is_empty() {
            return Err("at least one uptime window must be configured".to_string());
        }

        if self.uptime_window_hours.iter().any(|&hours| hours <= 0) {
            return Err("uptime windows must be greater than 0".to_string());
        }

        Ok(())
    }
}
