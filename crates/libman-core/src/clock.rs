//! Wall-clock abstraction.
//!
//! Loans are stamped through a [`Clock`] so tests can pin the current time
//! and exercise the due-date rule deterministically.

use chrono::{DateTime, FixedOffset, Local};

/// Source of the current local time.
///
/// # Invariants
///
/// - The returned offset is the one dates are displayed in.
pub trait Clock {
    /// Current time with its UTC offset.
    fn now(&self) -> DateTime<FixedOffset>;
}

/// Production clock backed by the system's local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }
}
