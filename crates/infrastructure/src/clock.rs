//! System clock adapter

use application::ClockPort;
use domain::CalendarDate;

/// Clock backed by the host's local calendar date
///
/// No timezone handling beyond the host's own local date; each request
/// reads the clock once, so a date rollover mid-request cannot split a
/// single calculation across two days.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    /// Create a new system clock
    pub const fn new() -> Self {
        Self
    }
}

impl ClockPort for SystemClock {
    fn today(&self) -> CalendarDate {
        CalendarDate::from(chrono::Local::now().date_naive())
    }
}
