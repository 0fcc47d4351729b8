//! Anniversary-based age calculation
//!
//! A total pure function over its validated input domain: callers
//! guarantee `dob <= today` (the validator rejects future dates), so
//! there is no error path here.

use crate::{
    entities::AgeBreakdown,
    value_objects::{CalendarDate, days_in_month},
};

/// Compute the full age breakdown for `dob` as of `today`
///
/// Years count completed birthday anniversaries; months and days are the
/// remainder since the last anniversary. Feb 29 anniversaries collapse to
/// Feb 28 in non-leap years for both the last and the next birthday. A
/// birthday falling on `today` counts as occurred, so the countdown
/// always targets a strictly future date.
pub fn calculate(dob: CalendarDate, today: CalendarDate) -> AgeBreakdown {
    let mut years = i64::from(today.year() - dob.year());
    if (today.month(), today.day()) < (dob.month(), dob.day()) {
        years -= 1;
    }

    let birthday_this_year = dob.anniversary_in(today.year());
    let last_birthday = if birthday_this_year <= today {
        birthday_this_year
    } else {
        dob.anniversary_in(today.year() - 1)
    };

    let mut months = i64::from(today.month()) - i64::from(last_birthday.month());
    let mut days = i64::from(today.day()) - i64::from(last_birthday.day());

    if days < 0 {
        months -= 1;
        // Borrow from the calendar month immediately preceding today
        let (prev_year, prev_month) = if today.month() == 1 {
            (today.year() - 1, 12)
        } else {
            (today.year(), today.month() - 1)
        };
        days += i64::from(days_in_month(prev_year, prev_month));
    }

    if months < 0 {
        months += 12;
    }

    let total_months = years * 12 + months;
    let total_days = today.days_since(dob);

    let next_birthday = if birthday_this_year <= today {
        dob.anniversary_in(today.year() + 1)
    } else {
        birthday_this_year
    };
    let days_until_birthday = next_birthday.days_since(today);

    AgeBreakdown {
        years,
        months,
        days,
        total_months,
        total_days,
        next_birthday: format!(
            "{} ({days_until_birthday} days)",
            next_birthday.long_format()
        ),
        dob: dob.long_format(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> CalendarDate {
        CalendarDate::new(year, month, day).unwrap()
    }

    #[test]
    fn birthday_exactly_today() {
        let result = calculate(date(1990, 6, 15), date(2024, 6, 15));
        assert_eq!(result.years, 34);
        assert_eq!(result.months, 0);
        assert_eq!(result.days, 0);
        assert_eq!(result.total_months, 408);
        // 2025 is not a leap year, 365 days to the next anniversary
        assert_eq!(result.next_birthday, "June 15, 2025 (365 days)");
        assert_eq!(result.dob, "June 15, 1990");
    }

    #[test]
    fn birthday_not_yet_occurred_this_year() {
        let result = calculate(date(1990, 6, 15), date(2024, 6, 14));
        assert_eq!(result.years, 33);
        assert_eq!(result.months, 11);
        assert_eq!(result.days, 30);
        assert_eq!(result.total_months, 407);
        assert_eq!(result.next_birthday, "June 15, 2024 (1 days)");
    }

    #[test]
    fn birthday_occurred_this_year() {
        let result = calculate(date(1990, 6, 15), date(2024, 9, 20));
        assert_eq!(result.years, 34);
        assert_eq!(result.months, 3);
        assert_eq!(result.days, 5);
        assert_eq!(result.total_months, 411);
    }

    #[test]
    fn day_borrow_from_previous_month() {
        // Last birthday Dec 20, 2023; remainder borrows 31 days from December
        let result = calculate(date(1990, 12, 20), date(2024, 1, 5));
        assert_eq!(result.years, 33);
        assert_eq!(result.months, 0);
        assert_eq!(result.days, 16);
        assert_eq!(result.total_months, 396);
    }

    #[test]
    fn day_borrow_uses_leap_february() {
        // Borrowing across March 1 in a leap year counts 29 days
        let result = calculate(date(1990, 2, 10), date(2024, 3, 5));
        assert_eq!(result.years, 34);
        assert_eq!(result.months, 0);
        assert_eq!(result.days, 24);
    }

    #[test]
    fn leap_day_birthday_in_non_leap_year() {
        // Last birthday resolves to Feb 28, never Mar 1
        let result = calculate(date(2000, 2, 29), date(2023, 3, 1));
        assert_eq!(result.years, 23);
        assert_eq!(result.months, 0);
        assert_eq!(result.days, 1);
        assert_eq!(result.total_months, 276);
        // Next anniversary is the real Feb 29 in 2024
        assert_eq!(result.next_birthday, "February 29, 2024 (365 days)");
    }

    #[test]
    fn leap_day_birthday_before_clamped_anniversary() {
        // Feb 27, 2023: this year's clamped anniversary (Feb 28) is ahead
        let result = calculate(date(2000, 2, 29), date(2023, 2, 27));
        assert_eq!(result.years, 22);
        assert_eq!(result.next_birthday, "February 28, 2023 (1 days)");
    }

    #[test]
    fn leap_day_birthday_on_clamped_anniversary() {
        // The year decrement compares raw month/day, so Feb 28 still counts
        // as "not yet 29" even though the clamped anniversary has occurred.
        let result = calculate(date(2000, 2, 29), date(2023, 2, 28));
        assert_eq!(result.years, 22);
        assert_eq!(result.months, 0);
        assert_eq!(result.days, 0);
        assert_eq!(result.total_months, 264);
    }

    #[test]
    fn newborn_today() {
        let result = calculate(date(2024, 6, 15), date(2024, 6, 15));
        assert_eq!(result.years, 0);
        assert_eq!(result.months, 0);
        assert_eq!(result.days, 0);
        assert_eq!(result.total_months, 0);
        assert_eq!(result.total_days, 0);
        assert_eq!(result.next_birthday, "June 15, 2025 (365 days)");
    }

    #[test]
    fn countdown_is_366_across_a_leap_day() {
        // Birthday today, July 2023: the year to July 2024 spans Feb 29
        let result = calculate(date(1990, 7, 1), date(2023, 7, 1));
        assert_eq!(result.next_birthday, "July 01, 2024 (366 days)");
    }

    #[test]
    fn total_days_counts_elapsed_calendar_days() {
        let result = calculate(date(2024, 6, 10), date(2024, 6, 15));
        assert_eq!(result.total_days, 5);

        let result = calculate(date(2023, 6, 15), date(2024, 6, 15));
        // Spans Feb 29, 2024
        assert_eq!(result.total_days, 366);
    }

    #[test]
    fn total_months_derived_from_years_and_months() {
        let result = calculate(date(1990, 6, 15), date(2024, 1, 5));
        assert_eq!(result.total_months, result.years * 12 + result.months);
    }

    #[test]
    fn end_of_month_birthday_borrowing_past_february() {
        // Jan 31 anniversary checked on Mar 1: the borrow takes February's
        // 28 days, fewer than the deficit, so the remainder goes negative.
        // Observable behavior of the original service, kept as-is.
        let result = calculate(date(1990, 1, 31), date(2023, 3, 1));
        assert_eq!(result.years, 33);
        assert_eq!(result.months, 1);
        assert_eq!(result.days, -2);
        assert_eq!(result.total_months, 397);
    }
}
