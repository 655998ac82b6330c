//! Memoized history cache
//!
//! Generated histories are cached per (service, resolution) and replaced
//! only on explicit invalidation, so repeated renders repaint the same data.

use chrono::{DateTime, Utc};
use rand::Rng;
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::debug;

use crate::errors::Result;
use crate::generator;
use crate::status::{HistorySample, Resolution};

/// Cache observability counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub entries: usize,
}

/// History cache keyed by (service name, resolution).
pub struct HistoryCache {
    entries: Mutex<HashMap<(String, Resolution), Vec<HistorySample>>>,
    window_hours: i64,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl HistoryCache {
    /// Create a cache whose generated histories cover `window_hours`.
    pub fn new(window_hours: i64) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            window_hours,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Return the cached history for the key, generating and storing it on
    /// first access.
    pub fn get_or_generate(
        &self,
        service: &str,
        resolution: Resolution,
        now: DateTime<Utc>,
        rng: &mut impl Rng,
    ) -> Result<Vec<HistorySample>> {
        let key = (service.to_string(), resolution);
        let mut entries = self.entries.lock().unwrap();

        if let Some(history) = entries.get(&key) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return Ok(history.clone());
        }

        let history = generator::generate(now, resolution.interval_ms(), self.window_hours, rng)?;
        self.misses.fetch_add(1, Ordering::Relaxed);
        debug!(
            "cached {} samples for service '{}' at {} resolution",
            history.len(),
            service,
            resolution
        );

        entries.insert(key, history.clone());
        Ok(history)
    }

    /// Drop one cached history. Returns whether an entry existed.
    pub fn invalidate(&self, service: &str, resolution: Resolution) -> bool {
        let mut entries = self.entries.lock().unwrap();
        entries.remove(&(service.to_string(), resolution)).is_some()
    }

    /// Drop every cached history for a service, at any resolution. Returns
    /// the number of entries removed.
    pub fn invalidate_service(&self, service: &str) -> usize {
        let mut entries = self.entries.lock().unwrap();
        let before = entries.len();
        entries.retain(|(name, _), _| name != service);
        before - entries.len()
    }

    /// Drop all cached histories.
    pub fn clear(&self) {
        let mut entries = self.entries.lock().unwrap();
        entries.clear();
        debug!("cleared history cache");
    }

    pub fn stats(&self) -> CacheStats {
        let entries = self.entries.lock().unwrap();
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries: entries.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_second_get_is_a_hit() {
        let cache = HistoryCache::new(72);
        let now = Utc::now();
        let mut rng = StdRng::seed_from_u64(1);

        let first = cache
            .get_or_generate("Discovery", Resolution::OneHour, now, &mut rng)
            .unwrap();
        let second = cache
            .get_or_generate("Discovery", Resolution::OneHour, now, &mut rng)
            .unwrap();

        assert_eq!(first, second);
        let stats = cache.stats();
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.entries, 1);
    }

    #[test]
    fn test_resolutions_cache_independently() {
        let cache = HistoryCache::new(72);
        let now = Utc::now();
        let mut rng = StdRng::seed_from_u64(1);

        let hourly = cache
            .get_or_generate("Discovery", Resolution::OneHour, now, &mut rng)
            .unwrap();
        let quarter_hourly = cache
            .get_or_generate("Discovery", Resolution::FifteenMinutes, now, &mut rng)
            .unwrap();

        assert_eq!(hourly.len(), 72);
        assert_eq!(quarter_hourly.len(), 288);
        assert_eq!(cache.stats().entries, 2);
    }

    #[test]
    fn test_invalidate_forces_regeneration() {
        let cache = HistoryCache::new(72);
        let now = Utc::now();
        let mut rng = StdRng::seed_from_u64(1);

        cache
            .get_or_generate("Discovery", Resolution::OneHour, now, &mut rng)
            .unwrap();
        assert!(cache.invalidate("Discovery", Resolution::OneHour));
        assert!(!cache.invalidate("Discovery", Resolution::OneHour));

        cache
            .get_or_generate("Discovery", Resolution::OneHour, now, &mut rng)
            .unwrap();
        assert_eq!(cache.stats().misses, 2);
    }

    #[test]
    fn test_invalidate_service_drops_all_resolutions() {
        let cache = HistoryCache::new(72);
        let now = Utc::now();
        let mut rng = StdRng::seed_from_u64(1);

        for resolution in [Resolution::OneHour, Resolution::FifteenMinutes] {
            cache
                .get_or_generate("Discovery", resolution, now, &mut rng)
                .unwrap();
            cache
                .get_or_generate("Catalyst", resolution, now, &mut rng)
                .unwrap();
        }

        assert_eq!(cache.invalidate_service("Discovery"), 2);
        let stats = cache.stats();
        assert_eq!(stats.entries, 2);

        cache.clear();
        assert_eq!(cache.stats().entries, 0);
    }
}
