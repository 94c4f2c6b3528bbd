use std::time::{Duration, Instant};

/// Default interval between checks of a late-bound value
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(200);
/// Default upper bound on the total wait
pub const DEFAULT_POLL_CEILING: Duration = Duration::from_secs(3);

const MIN_INTERVAL: Duration = Duration::from_millis(1);

/// Interval and ceiling for a bounded poll
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollSettings {
    interval: Duration,
    ceiling: Duration,
}

impl PollSettings {
    pub fn new(interval: Duration, ceiling: Duration) -> Self {
        Self { interval, ceiling }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn ceiling(&self) -> Duration {
        self.ceiling
    }
}

impl Default for PollSettings {
    fn default() -> Self {
        Self::new(DEFAULT_POLL_INTERVAL, DEFAULT_POLL_CEILING)
    }
}

/// Calls `probe` until it yields a value or `ceiling` has elapsed.
///
/// Sleeps `interval` between attempts (shortened so the last attempt lands on
/// the ceiling). Returns `None` on timeout; never waits past the ceiling
/// plus one probe call.
pub fn poll_until<T, F>(mut probe: F, interval: Duration, ceiling: Duration) -> Option<T>
where
    F: FnMut() -> Option<T>,
{
    let interval = interval.max(MIN_INTERVAL);
    let started = Instant::now();

    loop {
        if let Some(value) = probe() {
            return Some(value);
        }
        let elapsed = started.elapsed();
        if elapsed >= ceiling {
            return None;
        }
        std::thread::sleep(interval.min(ceiling - elapsed));
    }
}

/// `poll_until` with the interval and ceiling taken from `settings`.
pub fn poll_with<T, F>(probe: F, settings: PollSettings) -> Option<T>
where
    F: FnMut() -> Option<T>,
{
    poll_until(probe, settings.interval(), settings.ceiling())
}
