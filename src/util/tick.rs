//! Fixed-step scheduling.
//!
//! The engine's follow smoothing and steering integration are tuned for
//! a fixed 16 ms step. `FixedTicker` converts wall-clock progress into a
//! whole number of such steps, so a host render loop at any frame rate
//! drives the simulation at the cadence it was tuned for. Tests bypass
//! it and call the engine's `tick` with synthetic instants directly.

use web_time::{Duration, Instant};

/// Upper bound on catch-up steps per call. A long stall (debugger,
/// backgrounded app) resynchronizes instead of replaying the backlog.
const MAX_CATCH_UP_STEPS: u32 = 8;

/// Converts elapsed wall time into fixed simulation steps.
#[derive(Debug, Clone, Copy)]
pub struct FixedTicker {
    interval: Duration,
    last: Option<Instant>,
}

impl FixedTicker {
    /// The reference 16 ms step shared by camera follow and steering.
    pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(16);

    /// Create a ticker with the given step interval.
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last: None,
        }
    }

    /// The configured step interval.
    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Number of fixed steps to run for wall-clock time `now`.
    ///
    /// The first call anchors the timeline and returns 0. Later calls
    /// return the number of whole intervals elapsed, carrying any
    /// fractional remainder forward; if more than
    /// [`MAX_CATCH_UP_STEPS`] are owed, the backlog is dropped and the
    /// timeline re-anchored at `now`.
    pub fn advance(&mut self, now: Instant) -> u32 {
        let Some(last) = self.last else {
            self.last = Some(now);
            return 0;
        };
        if self.interval.is_zero() {
            self.last = Some(now);
            return 1;
        }
        let elapsed = now.saturating_duration_since(last);
        let steps = (elapsed.as_nanos() / self.interval.as_nanos()) as u64;
        if steps > u64::from(MAX_CATCH_UP_STEPS) {
            self.last = Some(now);
            return MAX_CATCH_UP_STEPS;
        }
        let steps = steps as u32;
        self.last = Some(last + self.interval * steps);
        steps
    }
}

impl Default for FixedTicker {
    fn default() -> Self {
        Self::new(Self::DEFAULT_INTERVAL)
    }
}
