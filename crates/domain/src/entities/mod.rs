//! Entities - Request-scoped computation results

mod age_breakdown;

pub use age_breakdown::AgeBreakdown;
