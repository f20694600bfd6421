pub mod pressure;
pub mod tide;

use chrono::{DateTime, TimeDelta, Utc};
use tidewise_core::WindowRequest;

/// Instants on a fixed cadence (aligned to the Unix epoch) inside the window.
pub fn grid(req: WindowRequest, step: TimeDelta) -> impl Iterator<Item = DateTime<Utc>> {
    let step_s = step.num_seconds().max(1);
    let start = req.start.timestamp();
    let first = start.div_euclid(step_s) * step_s
        + if start.rem_euclid(step_s) == 0 { 0 } else { step_s };
    let end = req.end.timestamp();
    (0..)
        .map(move |k| first + k * step_s)
        .take_while(move |s| *s <= end)
        .filter_map(|s| DateTime::from_timestamp(s, 0))
}

/// Seconds since the fixture epoch (2024-01-01T00:00:00Z).
#[allow(clippy::cast_precision_loss)]
pub fn since_epoch(ts: DateTime<Utc>) -> f64 {
    (ts.timestamp() - 1_704_067_200) as f64
}
