//! Timestamp resolution for export lines.
//!
//! The DATE part of a line is three numbers separated by `/`, `-` or `.`,
//! in whatever order the exporting phone's locale uses. Ambiguous orders are
//! read day-first:
//!
//! | Input | Read as |
//! |-------|---------|
//! | `1/2/20` | 1 Feb 2020 |
//! | `15.01.24` | 15 Jan 2024 |
//! | `01-15-2024` | 15 Jan 2024 (day-first impossible) |
//! | `2024-01-15` | 15 Jan 2024 (year first) |
//!
//! The TIME part is `H:MM` or `H:MM:SS`, optionally followed by `AM`/`PM`.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};

/// Two-digit years below this pivot are 20xx, the rest 19xx (same window as
/// chrono's `%y`).
const TWO_DIGIT_YEAR_PIVOT: i32 = 69;

fn is_date_separator(c: char) -> bool {
    matches!(c, '/' | '-' | '.')
}

/// Expands a year field to four digits.
fn expand_year(value: u32, digits: usize) -> Option<i32> {
    let value = i32::try_from(value).ok()?;
    if digits > 2 {
        return Some(value);
    }
    if value < TWO_DIGIT_YEAR_PIVOT {
        Some(2000 + value)
    } else {
        Some(1900 + value)
    }
}

/// Resolves a DATE string such as `15/01/2024` or `1.2.20`.
pub fn parse_date(date: &str) -> Option<NaiveDate> {
    let fields: Vec<&str> = date
        .trim_matches(is_date_separator)
        .split(is_date_separator)
        .collect();
    let [a, b, c] = fields.as_slice() else {
        return None;
    };
    let na = a.parse::<u32>().ok()?;
    let nb = b.parse::<u32>().ok()?;
    let nc = c.parse::<u32>().ok()?;

    // Year first: 2024-01-15
    if a.len() > 2 || na > 31 {
        let year = expand_year(na, a.len())?;
        return NaiveDate::from_ymd_opt(year, nb, nc);
    }

    let year = expand_year(nc, c.len())?;
    let (day, month) = if nb > 12 && na <= 12 { (nb, na) } else { (na, nb) };
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Resolves a TIME string such as `10:30`, `10:30:45` or `1:05 PM`.
pub fn parse_time(time: &str) -> Option<NaiveTime> {
    let time = time.trim();
    let (clock, pm) = if let Some(rest) = time.strip_suffix("PM") {
        (rest, Some(true))
    } else if let Some(rest) = time.strip_suffix("AM") {
        (rest, Some(false))
    } else {
        (time, None)
    };
    // The TIME capture is greedy and may swallow the colon of a `: ` separator
    let clock = clock.trim_end_matches([' ', '\u{202F}']).trim_end_matches(':');

    let mut parts = clock.split(':');
    let hour = parts.next()?.parse::<u32>().ok()?;
    let minute = parts.next()?.parse::<u32>().ok()?;
    let second = match parts.next() {
        Some(s) => s.parse::<u32>().ok()?,
        None => 0,
    };
    if parts.next().is_some() {
        return None;
    }

    let hour = match pm {
        Some(_) if hour > 12 => return None,
        Some(true) => hour % 12 + 12,
        Some(false) => hour % 12,
        None => hour,
    };
    NaiveTime::from_hms_opt(hour, minute, second)
}

/// Combines the DATE and TIME parts of a line into a timestamp.
///
/// Returns `None` when either part is malformed or out of range.
///
/// # Example
///
/// ```rust
/// use chatsheet::parsing::parse_timestamp;
/// use chrono::{TimeZone, Utc};
///
/// let ts = parse_timestamp("1/2/20", "10:00 AM").unwrap();
/// assert_eq!(ts, Utc.with_ymd_and_hms(2020, 2, 1, 10, 0, 0).unwrap());
/// ```
pub fn parse_timestamp(date: &str, time: &str) -> Option<DateTime<Utc>> {
    let date = parse_date(date)?;
    let time = parse_time(time)?;
    Some(NaiveDateTime::new(date, time).and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_day_first_when_ambiguous() {
        assert_eq!(parse_date("1/2/20"), Some(ymd(2020, 2, 1)));
        assert_eq!(parse_date("03/04/2021"), Some(ymd(2021, 4, 3)));
    }

    #[test]
    fn test_day_first_unambiguous() {
        assert_eq!(parse_date("15/01/2024"), Some(ymd(2024, 1, 15)));
        assert_eq!(parse_date("26.10.2025"), Some(ymd(2025, 10, 26)));
        assert_eq!(parse_date("15.01.24"), Some(ymd(2024, 1, 15)));
    }

    #[test]
    fn test_month_first_when_day_first_impossible() {
        assert_eq!(parse_date("01-15-2024"), Some(ymd(2024, 1, 15)));
        assert_eq!(parse_date("1/15/24"), Some(ymd(2024, 1, 15)));
    }

    #[test]
    fn test_year_first() {
        assert_eq!(parse_date("2024-01-15"), Some(ymd(2024, 1, 15)));
        assert_eq!(parse_date("2024.1.5"), Some(ymd(2024, 1, 5)));
    }

    #[test]
    fn test_two_digit_year_window() {
        assert_eq!(parse_date("1/1/00"), Some(ymd(2000, 1, 1)));
        assert_eq!(parse_date("1/1/68"), Some(ymd(2068, 1, 1)));
        assert_eq!(parse_date("1/1/69"), Some(ymd(1969, 1, 1)));
        assert_eq!(parse_date("1/1/99"), Some(ymd(1999, 1, 1)));
    }

    #[test]
    fn test_trailing_separator() {
        assert_eq!(parse_date("15.01.24."), Some(ymd(2024, 1, 15)));
    }

    #[test]
    fn test_invalid_dates() {
        assert_eq!(parse_date("15/13/2024"), None);
        assert_eq!(parse_date("31/02/2024"), None);
        assert_eq!(parse_date("1/2"), None);
        assert_eq!(parse_date("1/2/3/4"), None);
        assert_eq!(parse_date("1//2024"), None);
        assert_eq!(parse_date(""), None);
    }

    #[test]
    fn test_time_24h() {
        assert_eq!(parse_time("10:30"), NaiveTime::from_hms_opt(10, 30, 0));
        assert_eq!(parse_time("23:59:59"), NaiveTime::from_hms_opt(23, 59, 59));
        assert_eq!(parse_time("0:05"), NaiveTime::from_hms_opt(0, 5, 0));
        assert_eq!(parse_time("10:30:"), NaiveTime::from_hms_opt(10, 30, 0));
    }

    #[test]
    fn test_time_12h() {
        assert_eq!(parse_time("10:00 AM"), NaiveTime::from_hms_opt(10, 0, 0));
        assert_eq!(parse_time("1:05 PM"), NaiveTime::from_hms_opt(13, 5, 0));
        assert_eq!(parse_time("12:00 AM"), NaiveTime::from_hms_opt(0, 0, 0));
        assert_eq!(parse_time("12:30 PM"), NaiveTime::from_hms_opt(12, 30, 0));
        assert_eq!(parse_time("9:15:30\u{202F}PM"), NaiveTime::from_hms_opt(21, 15, 30));
    }

    #[test]
    fn test_invalid_times() {
        assert_eq!(parse_time("25:00"), None);
        assert_eq!(parse_time("10:61"), None);
        assert_eq!(parse_time("13:00 PM"), None);
        assert_eq!(parse_time("10"), None);
        assert_eq!(parse_time("10:"), None);
        assert_eq!(parse_time("1:2:3:4"), None);
    }

    #[test]
    fn test_parse_timestamp() {
        let ts = parse_timestamp("26.10.2025", "20:40").unwrap();
        assert_eq!(ts, Utc.with_ymd_and_hms(2025, 10, 26, 20, 40, 0).unwrap());

        assert!(parse_timestamp("99/99/99", "10:00").is_none());
        assert!(parse_timestamp("1/2/20", "99:00").is_none());
    }
}
