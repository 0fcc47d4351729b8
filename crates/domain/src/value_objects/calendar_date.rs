//! Calendar date value object with explicit calendar arithmetic
//!
//! A plain (year, month, day) triple on the proleptic Gregorian calendar,
//! with no time-of-day or timezone component. The helpers the age
//! calculator needs (leap years, month lengths, whole-day differences,
//! anniversary projection) live here as pure functions so invalid
//! constructions are avoided by explicit clamping instead of
//! catch-and-retry.
//!
//! # Examples
//!
//! ```
//! use domain::CalendarDate;
//!
//! let date = CalendarDate::new(1990, 6, 15).unwrap();
//! assert_eq!(date.to_string(), "1990-06-15");
//! assert_eq!(date.long_format(), "June 15, 1990");
//!
//! // Impossible dates are rejected
//! assert!(CalendarDate::new(2023, 2, 29).is_err());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// English month names, indexed by `month - 1`
const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Cumulative days before the first of each month in a non-leap year
const DAYS_BEFORE_MONTH: [i64; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// A validated Gregorian calendar date
///
/// Field order matters: the derived `Ord` compares (year, month, day)
/// lexicographically, which is chronological order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CalendarDate {
    year: i32,
    month: u32,
    day: u32,
}

impl CalendarDate {
    /// Create a new calendar date, rejecting impossible month/day values
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidValue`] if the month is outside
    /// 1..=12 or the day does not exist in that month (leap years
    /// included).
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, DomainError> {
        if !(1..=12).contains(&month) {
            return Err(DomainError::InvalidValue);
        }
        if day < 1 || day > days_in_month(year, month) {
            return Err(DomainError::InvalidValue);
        }
        Ok(Self { year, month, day })
    }

    /// Year component
    pub const fn year(self) -> i32 {
        self.year
    }

    /// Month component, 1..=12
    pub const fn month(self) -> u32 {
        self.month
    }

    /// Day-of-month component
    pub const fn day(self) -> u32 {
        self.day
    }

    /// Project this date's month/day anniversary onto `year`
    ///
    /// A Feb 29 anniversary collapses to Feb 28 in non-leap years,
    /// never rolls to Mar 1. This is observable product behavior and
    /// must stay that way.
    pub fn anniversary_in(self, year: i32) -> Self {
        if self.month == 2 && self.day == 29 && !is_leap_year(year) {
            Self {
                year,
                month: 2,
                day: 28,
            }
        } else {
            Self { year, ..self }
        }
    }

    /// Whole days elapsed since `earlier` (negative if `earlier` is later)
    pub fn days_since(self, earlier: Self) -> i64 {
        self.ordinal() - earlier.ordinal()
    }

    /// Long-form label, e.g. `"June 15, 1990"`
    ///
    /// The day is zero padded (`"March 05, 2024"`), matching the
    /// `%B %d, %Y` strftime format of the original service.
    pub fn long_format(self) -> String {
        format!(
            "{} {:02}, {}",
            MONTH_NAMES[self.month as usize - 1],
            self.day,
            self.year
        )
    }

    /// Day count since the proleptic Gregorian epoch (0001-01-01 = day 1)
    fn ordinal(self) -> i64 {
        days_before_year(self.year) + self.day_of_year()
    }

    /// 1-based day within the year
    fn day_of_year(self) -> i64 {
        let mut doy = DAYS_BEFORE_MONTH[self.month as usize - 1] + i64::from(self.day);
        if self.month > 2 && is_leap_year(self.year) {
            doy += 1;
        }
        doy
    }
}

impl fmt::Display for CalendarDate {
    /// ISO `YYYY-MM-DD`, zero padded
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl From<chrono::NaiveDate> for CalendarDate {
    /// Infallible: chrono only hands out valid calendar dates
    fn from(date: chrono::NaiveDate) -> Self {
        use chrono::Datelike;
        Self {
            year: date.year(),
            month: date.month(),
            day: date.day(),
        }
    }
}

/// Gregorian leap-year rule: divisible by 4, except centuries unless
/// divisible by 400
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Number of days in `month` of `year`
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        },
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// Days in all years strictly before `year`
fn days_before_year(year: i32) -> i64 {
    let y = i64::from(year) - 1;
    y * 365 + y / 4 - y / 100 + y / 400
}
