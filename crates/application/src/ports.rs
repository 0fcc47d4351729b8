//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! the outside world. Adapters in the infrastructure layer implement them.

use domain::CalendarDate;

/// Source of the current calendar date
///
/// Keeping "today" behind a port makes the age calculation deterministic
/// under test: hand the service a fixed date instead of the wall clock.
pub trait ClockPort: Send + Sync {
    /// The current calendar date
    fn today(&self) -> CalendarDate;
}
