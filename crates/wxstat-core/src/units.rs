//! Unit conversion and display formatting
//!
//! Temperatures arrive in Fahrenheit and are reported in Celsius with one
//! decimal place. Dates arrive as ISO-8601 strings and are reported long-form.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::{SummaryError, SummaryResult};

/// Suffix appended to every rendered temperature
pub const DEGREE_CELSIUS: &str = "\u{00B0}C";

/// Display layout for dates, e.g. `Tuesday 06 July 2021`
pub const DISPLAY_DATE_FORMAT: &str = "%A %d %B %Y";

/// Length of the `YYYY-MM-DD` prefix every accepted input starts with
const CALENDAR_DATE_LEN: usize = 10;

/// Date-time layouts with a UTC offset, checked after RFC 3339
const OFFSET_DATE_TIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M%:z",
    "%Y-%m-%d %H:%M%:z",
    "%Y-%m-%dT%H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M:%S%.f%:z",
];

/// Date-time layouts without an offset
const NAIVE_DATE_TIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
];

/// Round to `places` decimal places, ties to even on the exact binary value
///
/// Precision formatting is exact, so formatting and reading back gives the
/// same result as decimal rounding of the stored value.
pub fn round_to(value: f64, places: usize) -> f64 {
    format!("{value:.places$}").parse().unwrap_or(value)
}

/// Convert Fahrenheit to Celsius, rounded to one decimal place
pub fn fahrenheit_to_celsius(fahrenheit: impl Into<f64>) -> f64 {
    round_to((fahrenheit.into() - 32.0) * 5.0 / 9.0, 1)
}

/// Render a Celsius value with its unit, e.g. `20.0°C`
///
/// Whole numbers keep a trailing `.0`; anything else uses the shortest
/// representation that round-trips.
pub fn format_temperature(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.1}{DEGREE_CELSIUS}")
    } else {
        format!("{value}{DEGREE_CELSIUS}")
    }
}

fn invalid_date(input: &str, reason: impl Into<String>) -> SummaryError {
    SummaryError::InvalidDate {
        input: input.to_string(),
        reason: reason.into(),
    }
}

/// `DDDD-DD-DD` with ASCII digits, nothing more lenient
fn has_calendar_date_prefix(bytes: &[u8]) -> bool {
    bytes.len() >= CALENDAR_DATE_LEN
        && bytes[..CALENDAR_DATE_LEN]
            .iter()
            .enumerate()
            .all(|(i, b)| match i {
                4 | 7 => *b == b'-',
                _ => b.is_ascii_digit(),
            })
}

/// `T` or space, then `HH:MM` with two-digit fields
fn has_time_prefix(bytes: &[u8]) -> bool {
    bytes.len() >= 6
        && matches!(bytes[0], b'T' | b' ')
        && bytes[1..6]
            .iter()
            .enumerate()
            .all(|(i, b)| if i == 2 { *b == b':' } else { b.is_ascii_digit() })
}

fn is_valid_date_time(input: &str) -> bool {
    DateTime::parse_from_rfc3339(input).is_ok()
        || OFFSET_DATE_TIME_FORMATS
            .iter()
            .any(|format| DateTime::parse_from_str(input, format).is_ok())
        || NAIVE_DATE_TIME_FORMATS
            .iter()
            .any(|format| NaiveDateTime::parse_from_str(input, format).is_ok())
}

/// Parse the calendar date out of an ISO-8601 date or date-time
///
/// Accepts `YYYY-MM-DD`, optionally followed by `T` (or a space) and
/// `HH:MM`, `HH:MM:SS` or `HH:MM:SS.fff`, optionally followed by `Z` or a
/// `+HH:MM` offset. Offsets are not applied: `2021-07-02T07:00:00+08:00` is
/// 2 July. Surrounding whitespace is rejected.
pub fn parse_iso_date(input: &str) -> SummaryResult<NaiveDate> {
    let bytes = input.as_bytes();
    if !has_calendar_date_prefix(bytes) {
        return Err(invalid_date(input, "expected a YYYY-MM-DD date"));
    }

    // The prefix is ASCII, so this slice is on a char boundary.
    let date = NaiveDate::parse_from_str(&input[..CALENDAR_DATE_LEN], "%Y-%m-%d")
        .map_err(|e| invalid_date(input, e.to_string()))?;

    let time = &bytes[CALENDAR_DATE_LEN..];
    if time.is_empty() || (has_time_prefix(time) && is_valid_date_time(input)) {
        Ok(date)
    } else {
        Err(invalid_date(input, "expected a time of day like T07:00 after the date"))
    }
}

/// Render an ISO-8601 date long-form, e.g. `Tuesday 06 July 2021`
pub fn format_date(input: &str) -> SummaryResult<String> {
    Ok(parse_iso_date(input)?.format(DISPLAY_DATE_FORMAT).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fahrenheit_to_celsius() {
        assert_eq!(fahrenheit_to_celsius(32), 0.0);
        assert_eq!(fahrenheit_to_celsius(212), 100.0);
        assert_eq!(fahrenheit_to_celsius(49), 9.4);
        assert_eq!(fahrenheit_to_celsius(25), -3.9);
        assert_eq!(fahrenheit_to_celsius(-40), -40.0);
        // Means are fractional Fahrenheit
        assert_eq!(fahrenheit_to_celsius(7.5), -13.6);
    }

    #[test]
    fn test_exact_half_celsius_rounds_to_even() {
        // Mean of lows 50, 52, 53, 54 is 52.25F, exactly 11.25C
        assert_eq!(fahrenheit_to_celsius(52.25), 11.2);
        assert_eq!(fahrenheit_to_celsius(52.75), 11.5);
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(0.25, 1), 0.2);
        assert_eq!(round_to(-0.25, 1), -0.2);
        assert_eq!(round_to(11.75, 1), 11.8);
        assert_eq!(round_to(9.4444, 1), 9.4);
        assert_eq!(round_to(12.345, 0), 12.0);
        // 0.35 is stored just below the half and 2.675 just below 2.675
        assert_eq!(round_to(0.35, 1), 0.3);
        assert_eq!(round_to(2.675, 2), 2.67);
    }

    #[test]
    fn test_format_temperature() {
        assert_eq!(format_temperature(20.0), "20.0°C");
        assert_eq!(format_temperature(0.0), "0.0°C");
        assert_eq!(format_temperature(-3.9), "-3.9°C");
        assert_eq!(format_temperature(20.25), "20.25°C");
        assert_eq!(format_temperature(100.0), "100.0°C");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2021-07-06").unwrap(), "Tuesday 06 July 2021");
        assert_eq!(format_date("2021-07-01").unwrap(), "Thursday 01 July 2021");
        assert_eq!(format_date("1999-12-31").unwrap(), "Friday 31 December 1999");
    }

    #[test]
    fn test_format_date_time_forms() {
        assert_eq!(
            format_date("2021-07-02T07:00:00+08:00").unwrap(),
            "Friday 02 July 2021"
        );
        assert_eq!(
            format_date("2021-07-02T23:30:00Z").unwrap(),
            "Friday 02 July 2021"
        );
        assert_eq!(
            format_date("2021-07-02T07:00:00").unwrap(),
            "Friday 02 July 2021"
        );
        assert_eq!(
            format_date("2021-07-02 07:00:00.250").unwrap(),
            "Friday 02 July 2021"
        );
    }

    #[test]
    fn test_format_date_minute_precision() {
        for input in [
            "2021-07-02T07:00+08:00",
            "2021-07-02T07:00",
            "2021-07-02 07:00",
        ] {
            assert_eq!(format_date(input).unwrap(), "Friday 02 July 2021", "{input}");
        }
    }

    #[test]
    fn test_format_date_invalid() {
        for input in [
            "",
            "not a date",
            "2021-02-30",
            "06/07/2021",
            "2021-07-02T25:00:00",
            "2021-7-6",
            "+2021-07-06",
            " 2021-07-06",
            "2021-07-06 ",
            "2021-07-02T7:00",
            "2021-07-02Tnoon",
        ] {
            let err = format_date(input).unwrap_err();
            match err {
                SummaryError::InvalidDate { input: rejected, .. } => assert_eq!(rejected, input),
                other => panic!("unexpected error for {input:?}: {other}"),
            }
        }
    }

    #[test]
    fn test_converters_are_repeatable() {
        assert_eq!(fahrenheit_to_celsius(67), fahrenheit_to_celsius(67));
        assert_eq!(format_date("2021-07-06").unwrap(), format_date("2021-07-06").unwrap());
    }
}
