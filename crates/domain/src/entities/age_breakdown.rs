//! Computed age breakdown

use serde::{Deserialize, Serialize};

/// The full age decomposition for one date of birth
///
/// Constructed fresh per request by [`crate::age::calculate`], consumed by
/// the caller and discarded; it has no identity beyond the response it
/// serializes into. Serde field names are the JSON wire contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeBreakdown {
    /// Whole years of age
    pub years: i64,
    /// Months since the last birthday anniversary, 0..=11
    pub months: i64,
    /// Days past the last whole month
    pub days: i64,
    /// `years * 12 + months`
    pub total_months: i64,
    /// Elapsed calendar days since birth
    pub total_days: i64,
    /// Next birthday label, e.g. `"June 15, 2025 (365 days)"`
    pub next_birthday: String,
    /// Birth date label, e.g. `"June 15, 1990"`
    pub dob: String,
}
