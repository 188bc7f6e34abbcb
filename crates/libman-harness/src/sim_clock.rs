//! Controllable clock for deterministic loan dates.

use std::{cell::Cell, rc::Rc};

use chrono::{DateTime, FixedOffset, TimeDelta};
use libman_core::Clock;

/// 2018-11-05T09:00:00Z, a Monday.
pub const DEFAULT_EPOCH_SECS: i64 = 1_541_408_400;

/// Clock that only moves when told to.
///
/// Clones share the same time, so a test can hand one to the runtime and
/// keep another to advance.
#[derive(Debug, Clone)]
pub struct FixedClock {
    now: Rc<Cell<DateTime<FixedOffset>>>,
}

impl Default for FixedClock {
    fn default() -> Self {
        Self::from_timestamp(DEFAULT_EPOCH_SECS)
    }
}

impl FixedClock {
    /// Clock stopped at `now`.
    pub fn new(now: DateTime<FixedOffset>) -> Self {
        Self { now: Rc::new(Cell::new(now)) }
    }

    /// Clock stopped at `secs` since the epoch, in UTC.
    ///
    /// Out-of-range values fall back to the epoch itself.
    pub fn from_timestamp(secs: i64) -> Self {
        Self::new(DateTime::from_timestamp(secs, 0).unwrap_or_default().fixed_offset())
    }

    /// Jump to `now`.
    pub fn set(&self, now: DateTime<FixedOffset>) {
        self.now.set(now);
    }

    /// Move forward by `delta`.
    pub fn advance(&self, delta: TimeDelta) {
        self.now.set(self.now.get() + delta);
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.now.get()
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Datelike, Weekday};
    use libman_core::Borrow;

    use super::*;

    #[test]
    fn default_is_a_monday() {
        assert_eq!(FixedClock::default().now().weekday(), Weekday::Mon);
    }

    #[test]
    fn clones_share_time() {
        let clock = FixedClock::default();
        let handle = clock.clone();
        handle.advance(TimeDelta::days(4));
        assert_eq!(clock.now().weekday(), Weekday::Fri);
    }

    #[test]
    fn set_moves_loans_onto_a_friday() {
        let clock = FixedClock::default();
        let friday = clock.now() + TimeDelta::days(4);
        clock.set(friday);
        assert_eq!(Borrow::due_date(clock.now()) - friday, TimeDelta::days(31));
    }
}
