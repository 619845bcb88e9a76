use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;

/// Wall clock in microseconds that never repeats or goes backwards
///
/// Two calls on the same clock always return strictly increasing values,
/// even when the system clock stalls or steps back.
#[derive(Debug, Default)]
pub struct MonotonicClock {
    last_micros: AtomicI64,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now_micros(&self) -> i64 {
        let now = Utc::now().timestamp_micros();
        let next = |last: i64| if now > last { now } else { last + 1 };

        let previous = match self
            .last_micros
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| Some(next(last)))
        {
            Ok(previous) | Err(previous) => previous,
        };

        next(previous)
    }
}
