//! Synthetic history generation
//!
//! There is no real backend; each service's history is drawn from a fixed
//! categorical distribution at render time. The random source is injected so
//! callers control reproducibility.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use tracing::debug;

use crate::errors::{DashboardError, Result};
use crate::status::{HistorySample, Status};

/// Draws below this value are online (92% of the mass).
const ONLINE_CEILING: f64 = 0.92;

/// Draws below this value (and above the online ceiling) are degraded (5%);
/// the remaining 3% are offline.
const DEGRADED_CEILING: f64 = 0.97;

/// Map a uniform draw in `[0, 1)` onto a status.
pub fn status_from_draw(draw: f64) -> Status {
    if draw < ONLINE_CEILING {
        Status::Online
    } else if draw < DEGRADED_CEILING {
        Status::Degraded
    } else {
        Status::Offline
    }
}

/// Generate a synthetic history covering `window_hours` before `now`,
/// sampled every `interval_ms`.
///
/// The sample count is the window length divided by the interval, truncated
/// toward zero. Samples are returned oldest-first with fixed spacing; the
/// newest sample's timestamp is exactly `now`.
pub fn generate(
    now: DateTime<Utc>,
    interval_ms: i64,
    window_hours: i64,
    rng: &mut impl Rng,
) -> Result<Vec<HistorySample>> {
    if interval_ms <= 0 {
        return Err(DashboardError::InvalidWindow(format!(
            "sampling interval must be positive, got {}ms",
            interval_ms
        )));
    }
    if window_hours <= 0 {
        return Err(DashboardError::InvalidWindow(format!(
            "lookback window must be positive, got {}h",
            window_hours
        )));
    }

    let total = window_hours * 3_600_000 / interval_ms;
    let mut samples = Vec::with_capacity(total as usize);

    for i in (0..total).rev() {
        let timestamp = now - Duration::milliseconds(i * interval_ms);
        let status = status_from_draw(rng.random::<f64>());
        samples.push(HistorySample::new(timestamp, status));
    }

    debug!(
        "generated {} samples at {}ms spacing over {}h",
        samples.len(),
        interval_ms,
        window_hours
    );

    Ok(samples)
}
