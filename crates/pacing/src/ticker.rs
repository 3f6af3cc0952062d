//! Periodic timer shared by paced components.

use std::time::Duration;

use tokio::time::{Instant, Interval, MissedTickBehavior, interval_at};

/// Shortest period accepted; tokio rejects zero-length intervals.
pub const MIN_PERIOD: Duration = Duration::from_millis(1);

/// Interval whose first tick fires one `period` from now.
///
/// Missed ticks are delayed rather than bursted, so consecutive ticks are
/// always at least `period` apart. A zero period is raised to
/// [`MIN_PERIOD`].
///
/// Must be called from within a tokio runtime.
pub fn periodic(period: Duration) -> Interval {
    let period = period.max(MIN_PERIOD);
    let mut interval = interval_at(Instant::now() + period, period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    interval
}
