//! Attained age from a date of birth

use chrono::{Datelike, NaiveDate};

use crate::error::{QuoteError, QuoteResult};

/// Date format of the DOB form field
pub const DOB_FORMAT: &str = "%Y-%m-%d";

/// Age in whole years on `as_of`.
///
/// Calendar-year difference, less one when the birthday has not come round
/// yet in the `as_of` year. A birthday falling on `as_of` counts as turned.
/// A Feb 29 birthday is only reached on Mar 1 in common years.
pub fn age_from_dob(dob: NaiveDate, as_of: NaiveDate) -> i32 {
    let mut age = as_of.year() - dob.year();
    if (as_of.month(), as_of.day()) < (dob.month(), dob.day()) {
        age -= 1;
    }
    age
}

/// Parse a DOB field value. Empty or malformed input yields `None`.
pub fn parse_dob(value: &str, format: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(value, format).ok()
}

/// Parse a valuation date supplied on the command line or in a request.
/// Unlike a DOB edit, a bad date here is an error.
pub fn parse_as_of(value: &str, format: &str) -> QuoteResult<NaiveDate> {
    parse_dob(value, format).ok_or_else(|| QuoteError::InvalidDate {
        value: value.to_string(),
        format: format.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_birthday_passed() {
        assert_eq!(age_from_dob(date(1990, 3, 15), date(2024, 6, 1)), 34);
    }

    #[test]
    fn test_birthday_not_yet() {
        assert_eq!(age_from_dob(date(1990, 9, 15), date(2024, 6, 1)), 33);
        // Same month, earlier day
        assert_eq!(age_from_dob(date(1990, 6, 2), date(2024, 6, 1)), 33);
    }

    #[test]
    fn test_birthday_today_counts() {
        assert_eq!(age_from_dob(date(2000, 10, 16), date(2026, 10, 16)), 26);
        assert_eq!(age_from_dob(date(2000, 10, 17), date(2026, 10, 16)), 25);
    }

    #[test]
    fn test_leap_day_birthday() {
        assert_eq!(age_from_dob(date(2004, 2, 29), date(2025, 2, 28)), 20);
        assert_eq!(age_from_dob(date(2004, 2, 29), date(2025, 3, 1)), 21);
        assert_eq!(age_from_dob(date(2004, 2, 29), date(2028, 2, 29)), 24);
    }

    #[test]
    fn test_born_on_as_of() {
        assert_eq!(age_from_dob(date(2026, 1, 1), date(2026, 1, 1)), 0);
    }

    #[test]
    fn test_idempotent() {
        let dob = date(1985, 12, 31);
        let as_of = date(2026, 10, 16);
        let first = age_from_dob(dob, as_of);
        assert_eq!(age_from_dob(dob, as_of), first);
        assert_eq!(first, 40);
    }

    #[test]
    fn test_parse_dob() {
        assert_eq!(parse_dob("1990-03-15", DOB_FORMAT), Some(date(1990, 3, 15)));
        assert_eq!(parse_dob(" 1990-03-15 ", DOB_FORMAT), Some(date(1990, 3, 15)));
        assert_eq!(parse_dob("", DOB_FORMAT), None);
        assert_eq!(parse_dob("1990-13-01", DOB_FORMAT), None);
        assert_eq!(parse_dob("15/03/1990", DOB_FORMAT), None);
        assert_eq!(parse_dob("15/03/1990", "%d/%m/%Y"), Some(date(1990, 3, 15)));
    }

    #[test]
    fn test_parse_as_of() {
        assert_eq!(parse_as_of("2026-10-16", DOB_FORMAT).unwrap(), date(2026, 10, 16));
        let err = parse_as_of("tomorrow", DOB_FORMAT).unwrap_err();
        assert!(matches!(err, QuoteError::InvalidDate { .. }));
    }
}
