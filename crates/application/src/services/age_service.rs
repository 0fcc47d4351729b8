//! Age service - validates a date of birth and computes the breakdown

use std::{fmt, sync::Arc};

use domain::{AgeBreakdown, calculate, validate_date_of_birth};
use tracing::{debug, instrument};

use crate::{error::ApplicationError, ports::ClockPort};

/// Service turning a raw date-of-birth string into an age breakdown
///
/// Stateless apart from the injected clock; safe to share across
/// concurrent requests.
pub struct AgeService {
    clock: Arc<dyn ClockPort>,
}

impl fmt::Debug for AgeService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AgeService").finish_non_exhaustive()
    }
}

impl AgeService {
    /// Create a new age service
    pub fn new(clock: Arc<dyn ClockPort>) -> Self {
        Self { clock }
    }

    /// Validate `raw_dob` against today's date and compute the breakdown
    ///
    /// # Errors
    ///
    /// Returns [`ApplicationError::Domain`] with the first failing
    /// validation check; the calculation itself cannot fail.
    #[instrument(skip(self, raw_dob), fields(input_len = raw_dob.len()))]
    pub fn breakdown(&self, raw_dob: &str) -> Result<AgeBreakdown, ApplicationError> {
        let today = self.clock.today();
        let dob = validate_date_of_birth(raw_dob, today)?;

        let breakdown = calculate(dob, today);

        debug!(
            %dob,
            %today,
            years = breakdown.years,
            months = breakdown.months,
            days = breakdown.days,
            "Age breakdown computed"
        );

        Ok(breakdown)
    }
}
