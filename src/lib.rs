//! Service Status Dashboard Library
//!
//! This library renders a service-status dashboard for a fixed set of named
//! services: a time-bucketed health history grid plus rolling uptime
//! percentages over 24h/7d/30d windows. Histories are synthesized from a
//! fixed categorical distribution; there is no real backend.

pub mod cache;
pub mod config;
pub mod dashboard;
pub mod errors;
pub mod generator;
pub mod registry;
pub mod render;
pub mod status;
pub mod uptime;

pub use cache::{CacheStats, HistoryCache};
pub use config::Config;
pub use dashboard::{Dashboard, DashboardSnapshot, ServiceReport, UptimeWindow};
pub use errors::{DashboardError, Result};
pub use registry::ServiceRegistry;
pub use status::{HistorySample, Resolution, Service, Status};
pub use uptime::{Severity, Uptime};
