//! Rolling uptime computation and severity classification

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::{DashboardError, Result};
use crate::status::HistorySample;

/// Uptime over a lookback window.
///
/// A window longer than the available history (or an empty history) yields
/// `InsufficientData` rather than a division-by-zero artifact.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Uptime {
    /// Percentage of in-window samples that were online, 0-100.
    Measured(u8),
    /// The window contained no samples.
    InsufficientData,
}

impl Uptime {
    /// Integer percentage; insufficient data reads as 0.
    pub fn percent(&self) -> u8 {
        match self {
            Uptime::Measured(pct) => *pct,
            Uptime::InsufficientData => 0,
        }
    }

    pub fn is_measured(&self) -> bool {
        matches!(self, Uptime::Measured(_))
    }

    pub fn severity(&self) -> Severity {
        Severity::classify(f64::from(self.percent()).clamp(0.0, 100.0))
    }
}

impl fmt::Display for Uptime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Uptime::Measured(pct) => write!(f, "{}%", pct),
            Uptime::InsufficientData => write!(f, "n/a"),
        }
    }
}

/// Compute the uptime percentage over the trailing `window_hours` before
/// `now`: the share of in-window samples whose status is online, rounded to
/// the nearest integer (half away from zero).
pub fn compute(
    history: &[HistorySample],
    window_hours: i64,
    now: DateTime<Utc>,
) -> Result<Uptime> {
    if window_hours <= 0 {
        return Err(DashboardError::InvalidWindow(format!(
            "uptime window must be positive, got {}h",
            window_hours
        )));
    }

    let since = now - Duration::hours(window_hours);
    let mut total = 0u32;
    let mut online = 0u32;

    for sample in history.iter().filter(|s| s.timestamp >= since) {
        total += 1;
        if sample.status.is_online() {
            online += 1;
        }
    }

    if total == 0 {
        return Ok(Uptime::InsufficientData);
    }

    let pct = (f64::from(online) * 100.0 / f64::from(total)).round() as u8;
    Ok(Uptime::Measured(pct))
}

/// Coarse tier for color-coding an uptime percentage.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Healthy,
    Warning,
    Critical,
}

impl Severity {
    /// Classify a percentage. Callers clamp to `[0, 100]` first.
    pub fn classify(pct: f64) -> Self {
        if pct >= 99.9 {
            Severity::Healthy
        } else if pct >= 98.0 {
            Severity::Warning
        } else {
            Severity::Critical
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Healthy => write!(f, "healthy"),
            Severity::Warning => write!(f, "warning"),
            Severity::Critical => write!(f, "critical"),
        }
    }
}
