//! Dashboard snapshot assembly
//!
//! Ties the registry, history cache, and uptime calculator together: one
//! report per registered service, each carrying the history grid and the
//! rolling uptime figures.

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::cache::{CacheStats, HistoryCache};
use crate::config::Config;
use crate::errors::{DashboardError, Result};
use crate::registry::ServiceRegistry;
use crate::status::{Resolution, Service};
use crate::uptime::{self, Severity, Uptime};

/// One rolling uptime figure with its display tier.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct UptimeWindow {
    pub window_hours: i64,
    pub uptime: Uptime,
    pub severity: Severity,
}

/// Everything the view needs for one service block.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ServiceReport {
    #[serde(flatten)]
    pub service: Service,
    pub resolution: Resolution,
    pub uptimes: Vec<UptimeWindow>,
}

/// A full dashboard render: every registered service, in registry order.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct DashboardSnapshot {
    pub generated_at: DateTime<Utc>,
    pub services: Vec<ServiceReport>,
}

pub struct Dashboard {
    config: Config,
    registry: ServiceRegistry,
    cache: HistoryCache,
}

impl Dashboard {
    /// Create a dashboard from validated configuration.
    pub fn new(config: Config) -> Result<Self> {
        config.validate().map_err(DashboardError::Config)?;

        let registry = ServiceRegistry::new(config.service_names.clone())?;
        let cache = HistoryCache::new(config.history_window_hours);

        Ok(Self {
            config,
            registry,
            cache,
        })
    }

    pub fn registry(&self) -> &ServiceRegistry {
        &self.registry
    }

    /// Build the report for one registered service at the given resolution.
    /// Unknown names fail fast.
    pub fn service_report(
        &self,
        name: &str,
        resolution: Resolution,
        now: DateTime<Utc>,
        rng: &mut impl Rng,
    ) -> Result<ServiceReport> {
        let name = self.registry.lookup(name)?.to_string();
        let history = self.cache.get_or_generate(&name, resolution, now, rng)?;
        let service = Service::from_history(name, history)?;

        let uptimes = self
            .config
            .uptime_window_hours
            .iter()
            .map(|&window_hours| {
                let uptime = uptime::compute(&service.history, window_hours, now)?;
                Ok(UptimeWindow {
                    window_hours,
                    uptime,
                    severity: uptime.severity(),
                })
            })
            .collect::<Result<Vec<UptimeWindow>>>()?;

        Ok(ServiceReport {
            service,
            resolution,
            uptimes,
        })
    }

    /// Build reports for every registered service, in registry order.
    pub fn snapshot(
        &self,
        resolution: Resolution,
        now: DateTime<Utc>,
        rng: &mut impl Rng,
    ) -> Result<DashboardSnapshot> {
        let services = self
            .registry
            .names()
            .iter()
            .map(|name| self.service_report(name, resolution, now, rng))
            .collect::<Result<Vec<ServiceReport>>>()?;

        info!(
            "assembled snapshot of {} services at {} resolution",
            services.len(),
            resolution
        );

        Ok(DashboardSnapshot {
            generated_at: now,
            services,
        })
    }

    /// Drop one service's cached history so the next report regenerates it.
    pub fn refresh(&self, name: &str) -> Result<usize> {
        let name = self.registry.lookup(name)?;
        Ok(self.cache.invalidate_service(name))
    }

    /// Drop every cached history.
    pub fn refresh_all(&self) {
        self.cache.clear();
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }
}
