//! Domain layer for the age calculator API
//!
//! Contains the core business logic: the calendar date value object, the
//! date-of-birth validator, the anniversary-based age calculator, and
//! domain errors. This layer knows nothing about HTTP or configuration.

pub mod age;
pub mod entities;
pub mod errors;
pub mod validation;
pub mod value_objects;

pub use age::calculate;
pub use entities::AgeBreakdown;
pub use errors::DomainError;
pub use validation::validate_date_of_birth;
pub use value_objects::{CalendarDate, days_in_month, is_leap_year};
