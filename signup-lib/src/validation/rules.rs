//! Format rules for email addresses and dates of birth

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

/// Word characters, optionally joined by single dots or hyphens, an `@`, then a
/// domain ending in at least one suffix of two or more word characters.
/// `\w` is ASCII-only.
pub const EMAIL_PATTERN: &str = r"(?-u)^\w+(?:[.-]?\w+)*@\w+(?:[.-]?\w+)*(?:\.\w\w+)+$";

/// Four digits, two digits, two digits, separated by hyphens.
pub const DATE_PATTERN: &str = r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$";

/// Smallest year that round-trips through date construction.
const MIN_YEAR: i32 = 100;

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("email pattern compiles"));

static DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(DATE_PATTERN).expect("date pattern compiles"));

/// Check an email address against [`EMAIL_PATTERN`].
pub fn is_valid_email(email: &str) -> bool {
    EMAIL.is_match(email)
}

/// Check that a date is written as `YYYY-MM-DD`.
pub fn is_date_format(date: &str) -> bool {
    DATE.is_match(date)
}

/// Parse a `YYYY-MM-DD` date of birth into a calendar date.
///
/// Returns `None` when the text is not in the expected format or when the
/// year, month and day do not name a real day (`2023-02-30`, month `13`).
/// Years `0000` to `0099` are rejected: two-digit years read back as 19xx, so
/// they never survive the year/month/day round trip.
pub fn parse_date_of_birth(date: &str) -> Option<NaiveDate> {
    if !is_date_format(date) {
        return None;
    }

    let mut parts = date.splitn(3, '-');
    let year: i32 = parts.next()?.parse().ok()?;
    let month: u32 = parts.next()?.parse().ok()?;
    let day: u32 = parts.next()?.parse().ok()?;

    if year < MIN_YEAR {
        return None;
    }

    NaiveDate::from_ymd_opt(year, month, day)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        for email in [
            "a@b.com",
            "first.last@mail.example.org",
            "a-b@c-d.io",
            "user_1@domain.co.uk",
        ] {
            assert!(is_valid_email(email), "{email} should be valid");
        }
    }

    #[test]
    fn test_invalid_emails() {
        for email in [
            "not-an-email",
            "a@b",
            "a@b.c",
            "@b.com",
            "a@.com",
            "a..b@c.com",
            "a@b.com ",
            "é@b.com",
            "a b@c.com",
        ] {
            assert!(!is_valid_email(email), "{email} should be invalid");
        }
    }

    #[test]
    fn test_date_format() {
        assert!(is_date_format("1990-05-14"));
        assert!(!is_date_format("1990-5-14"));
        assert!(!is_date_format("1990/05/14"));
        assert!(!is_date_format("90-05-14"));
        assert!(!is_date_format("1990-05-14\n"));
        // Non-ASCII digits are not digits here.
        assert!(!is_date_format("١٩٩٠-05-14"));
    }

    #[test]
    fn test_parse_date_of_birth() {
        assert_eq!(
            parse_date_of_birth("1990-05-14"),
            NaiveDate::from_ymd_opt(1990, 5, 14)
        );
        assert!(parse_date_of_birth("2024-02-29").is_some());
        assert!(parse_date_of_birth("0100-01-01").is_some());
        assert!(parse_date_of_birth("2023-02-29").is_none());
        assert!(parse_date_of_birth("2023-02-30").is_none());
        assert!(parse_date_of_birth("1990-13-01").is_none());
        assert!(parse_date_of_birth("1990-00-10").is_none());
        assert!(parse_date_of_birth("1990-04-31").is_none());
        assert!(parse_date_of_birth("1990-05-00").is_none());
        assert!(parse_date_of_birth("not-a-date").is_none());
    }

    #[test]
    fn test_two_digit_years_rejected() {
        assert!(parse_date_of_birth("0000-01-01").is_none());
        assert!(parse_date_of_birth("0001-01-01").is_none());
        assert!(parse_date_of_birth("0099-12-31").is_none());
        assert!(parse_date_of_birth("0100-01-01").is_some());
    }
}
