//! Value Objects - Immutable, identity-less domain primitives

mod calendar_date;

pub use calendar_date::{CalendarDate, days_in_month, is_leap_year};
