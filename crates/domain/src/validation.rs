//! Date-of-birth validation
//!
//! Checks run in a fixed order and short-circuit with distinct messages:
//! empty input, malformed format, impossible date, future date, pre-1900.
//! Callers rely on that order, so keep it.

use crate::{errors::DomainError, value_objects::CalendarDate};

/// Earliest accepted birth year
const MIN_YEAR: i32 = 1900;

/// Parse and validate a raw date-of-birth string against `today`
///
/// Accepts strict `YYYY-MM-DD` only (no alternate separators, no extra
/// characters). Leading and trailing whitespace is ignored.
///
/// # Errors
///
/// Returns the first failing [`DomainError`] in check order.
pub fn validate_date_of_birth(
    input: &str,
    today: CalendarDate,
) -> Result<CalendarDate, DomainError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(DomainError::MissingInput);
    }

    let (year, month, day) = parse_iso_shape(trimmed).ok_or(DomainError::MalformedFormat)?;

    let dob = CalendarDate::new(year, month, day)?;

    if dob > today {
        return Err(DomainError::FutureDate);
    }

    if dob.year() < MIN_YEAR {
        return Err(DomainError::TooOld);
    }

    Ok(dob)
}

/// Accept exactly `\d{4}-\d{2}-\d{2}` and split it into numeric parts
fn parse_iso_shape(s: &str) -> Option<(i32, u32, u32)> {
    let bytes = s.as_bytes();
    if bytes.len() != 10 {
        return None;
    }
    let shape_ok = bytes.iter().enumerate().all(|(i, b)| {
        if i == 4 || i == 7 {
            *b == b'-'
        } else {
            b.is_ascii_digit()
        }
    });
    if !shape_ok {
        return None;
    }

    // All-ASCII verified above, so byte-range slicing is safe
    let year = s[0..4].parse().ok()?;
    let month = s[5..7].parse().ok()?;
    let day = s[8..10].parse().ok()?;
    Some((year, month, day))
}
