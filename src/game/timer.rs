use std::time::Duration;
use tokio::time::{Instant, Interval, MissedTickBehavior, interval_at};

/// A periodic tick registration.
///
/// Owning the value is owning the registration: dropping it cancels all
/// future ticks, and replacing it reschedules from now.
#[derive(Debug)]
pub struct TickTimer {
    period: Duration,
    first_tick: Instant,
    /// Built on the first wait, since an `Interval` needs a running runtime
    interval: Option<Interval>,
}

impl TickTimer {
    /// Schedule ticks every `period`, the first one a full period from now
    pub fn start(period: Duration) -> Self {
        Self {
            period,
            first_tick: Instant::now() + period,
            interval: None,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Wait for the next tick.
    ///
    /// Cancel safe. An overdue tick fires at once and the schedule restarts
    /// from there rather than firing a burst.
    pub async fn wait(&mut self) {
        let (first_tick, period) = (self.first_tick, self.period);
        let interval = self.interval.get_or_insert_with(|| {
            let mut interval = interval_at(first_tick, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            interval
        });

        interval.tick().await;
    }
}
