//! Status data model: health states, timestamped samples, sampling resolutions

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::{DashboardError, Result};

/// Observed health state of a service.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Online,
    Degraded,
    Offline,
}

impl Status {
    /// Display rank for sorting by severity. Offline outranks degraded,
    /// degraded outranks online.
    pub fn severity_rank(&self) -> u8 {
        match self {
            Status::Offline => 2,
            Status::Degraded => 1,
            Status::Online => 0,
        }
    }

    pub fn is_online(&self) -> bool {
        matches!(self, Status::Online)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Online => write!(f, "online"),
            Status::Degraded => write!(f, "degraded"),
            Status::Offline => write!(f, "offline"),
        }
    }
}

impl FromStr for Status {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "online" => Ok(Status::Online),
            "degraded" => Ok(Status::Degraded),
            "offline" => Ok(Status::Offline),
            other => Err(DashboardError::InvalidStatus(other.to_string())),
        }
    }
}

/// One timestamped status observation. Immutable once created.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct HistorySample {
    pub timestamp: DateTime<Utc>,
    pub status: Status,
}

impl HistorySample {
    pub fn new(timestamp: DateTime<Utc>, status: Status) -> Self {
        Self { timestamp, status }
    }
}

/// Sampling interval between consecutive history cells, selectable by the
/// viewer. Affects generation density only.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Resolution {
    #[serde(rename = "15min")]
    FifteenMinutes,
    #[serde(rename = "1hr")]
    OneHour,
}

impl Resolution {
    /// Spacing between consecutive samples in milliseconds.
    pub fn interval_ms(&self) -> i64 {
        match self {
            Resolution::FifteenMinutes => 15 * 60 * 1000,
            Resolution::OneHour => 60 * 60 * 1000,
        }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resolution::FifteenMinutes => write!(f, "15min"),
            Resolution::OneHour => write!(f, "1hr"),
        }
    }
}

impl FromStr for Resolution {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "15min" => Ok(Resolution::FifteenMinutes),
            "1hr" => Ok(Resolution::OneHour),
            other => Err(DashboardError::InvalidResolution(other.to_string())),
        }
    }
}

/// A named service with its current status and observed history.
///
/// The history is ordered oldest-to-newest; the current status is the
/// newest sample's status.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Service {
    pub name: String,
    pub status: Status,
    pub history: Vec<HistorySample>,
}

impl Service {
    /// Build a service from its generated history, deriving the current
    /// status from the newest sample.
    pub fn from_history(name: impl Into<String>, history: Vec<HistorySample>) -> Result<Self> {
        let name = name.into();
        let status = history
            .last()
            .map(|sample| sample.status)
            .ok_or_else(|| {
                DashboardError::InvalidWindow(format!(
                    "service '{}' has an empty history window",
                    name
                ))
            })?;

        Ok(Self {
            name,
            status,
            history,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_status_round_trip() {
        for token in ["online", "degraded", "offline"] {
            let status: Status = token.parse().unwrap();
            assert_eq!(status.to_string(), token);
        }
    }

    #[test]
    fn test_status_rejects_unknown_token() {
        let err = "unknown".parse::<Status>().unwrap_err();
        assert!(matches!(err, DashboardError::InvalidStatus(_)));
    }

    #[test]
    fn test_status_severity_ordering() {
        assert!(Status::Offline.severity_rank() > Status::Degraded.severity_rank());
        assert!(Status::Degraded.severity_rank() > Status::Online.severity_rank());
    }

    #[test]
    fn test_resolution_intervals() {
        assert_eq!(Resolution::FifteenMinutes.interval_ms(), 900_000);
        assert_eq!(Resolution::OneHour.interval_ms(), 3_600_000);
    }

    #[test]
    fn test_resolution_round_trip() {
        assert_eq!("15min".parse::<Resolution>().unwrap(), Resolution::FifteenMinutes);
        assert_eq!("1hr".parse::<Resolution>().unwrap(), Resolution::OneHour);
        assert_eq!(Resolution::FifteenMinutes.to_string(), "15min");
        assert_eq!(Resolution::OneHour.to_string(), "1hr");
    }

    #[test]
    fn test_resolution_rejects_unknown_token() {
        let err = "30min".parse::<Resolution>().unwrap_err();
        assert!(matches!(err, DashboardError::InvalidResolution(_)));
    }

    #[test]
    fn test_service_status_derived_from_newest_sample() {
        let t0 = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        let t1 = Utc.with_ymd_and_hms(2026, 1, 1, 1, 0, 0).unwrap();
        let history = vec![
            HistorySample::new(t0, Status::Online),
            HistorySample::new(t1, Status::Degraded),
        ];

        let service = Service::from_history("Discovery", history).unwrap();
        assert_eq!(service.status, Status::Degraded);
        assert_eq!(service.history.len(), 2);
    }

    #[test]
    fn test_service_rejects_empty_history() {
        let err = Service::from_history("Discovery", Vec::new()).unwrap_err();
        assert!(matches!(err, DashboardError::InvalidWindow(_)));
    }
}
