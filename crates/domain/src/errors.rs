//! Domain-level errors

use thiserror::Error;

/// Validation errors for a submitted date of birth
///
/// The `Display` strings are the exact messages surfaced to API clients,
/// so changing them is a breaking change to the wire contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Input was empty after trimming
    #[error("Date of birth is required")]
    MissingInput,

    /// Input did not match the strict `YYYY-MM-DD` shape
    #[error("Invalid date format. Use YYYY-MM-DD")]
    MalformedFormat,

    /// The digits did not form a real calendar date
    #[error("Invalid date value")]
    InvalidValue,

    /// Date of birth lies after today's date
    #[error("Date of birth cannot be in the future")]
    FutureDate,

    /// Date of birth is before the supported range
    #[error("Date of birth must be after 1900")]
    TooOld,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_input_message() {
        assert_eq!(
            DomainError::MissingInput.to_string(),
            "Date of birth is required"
        );
    }

    #[test]
    fn malformed_format_message() {
        assert_eq!(
            DomainError::MalformedFormat.to_string(),
            "Invalid date format. Use YYYY-MM-DD"
        );
    }

    #[test]
    fn invalid_value_message() {
        assert_eq!(DomainError::InvalidValue.to_string(), "Invalid date value");
    }

    #[test]
    fn future_date_message() {
        assert_eq!(
            DomainError::FutureDate.to_string(),
            "Date of birth cannot be in the future"
        );
    }

    #[test]
    fn too_old_message() {
        assert_eq!(
            DomainError::TooOld.to_string(),
            "Date of birth must be after 1900"
        );
    }
}
