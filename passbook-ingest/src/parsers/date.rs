//! Date extraction from free-form statement text.
//!
//! Formats are tried in a fixed order and the first one that yields a real
//! calendar date wins:
//!   11 Dec 2025     (day, month abbreviation, year)
//!   12/11/2025      (day/month/year)
//!   2025-12-10      (ISO)
//!   10-12-2025      (day-month-year)
//!
//! Numeric triples are always read day-first.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::{Captures, Regex};

struct DatePattern {
    name: &'static str,
    re: Regex,
    build: fn(&Captures) -> Option<NaiveDate>,
}

static DATE_PATTERNS: LazyLock<Vec<DatePattern>> = LazyLock::new(|| {
    vec![
        DatePattern {
            name: "day-monname-year",
            re: Regex::new(r"(?i)(\d{1,2})\s+(jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)\s+(\d{4})")
                .expect("invalid day-monname-year regex"),
            build: |c| {
                let month = month_from_abbrev(&c[2])?;
                ymd(&c[3], month, &c[1])
            },
        },
        DatePattern {
            name: "day/month/year",
            re: Regex::new(r"(\d{1,2})/(\d{1,2})/(\d{4})").expect("invalid slash date regex"),
            build: |c| ymd(&c[3], c[2].parse().ok()?, &c[1]),
        },
        DatePattern {
            name: "iso",
            re: Regex::new(r"(\d{4})-(\d{2})-(\d{2})").expect("invalid iso date regex"),
            build: |c| ymd(&c[1], c[2].parse().ok()?, &c[3]),
        },
        DatePattern {
            name: "day-month-year",
            re: Regex::new(r"(\d{1,2})-(\d{1,2})-(\d{4})").expect("invalid dash date regex"),
            build: |c| ymd(&c[3], c[2].parse().ok()?, &c[1]),
        },
    ]
});

fn month_from_abbrev(s: &str) -> Option<u32> {
    let month = match s.to_ascii_lowercase().as_str() {
        "jan" => 1,
        "feb" => 2,
        "mar" => 3,
        "apr" => 4,
        "may" => 5,
        "jun" => 6,
        "jul" => 7,
        "aug" => 8,
        "sep" => 9,
        "oct" => 10,
        "nov" => 11,
        "dec" => 12,
        _ => return None,
    };
    Some(month)
}

fn ymd(year: &str, month: u32, day: &str) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year.parse().ok()?, month, day.parse().ok()?)
}

/// Find the first parseable date in `text`.
///
/// A pattern that matches but names an impossible date (day 32, month 13)
/// is skipped and the next format is tried.
pub fn extract_date(text: &str) -> Option<NaiveDate> {
    DATE_PATTERNS.iter().find_map(|p| {
        let caps = p.re.captures(text)?;
        let date = (p.build)(&caps);
        if date.is_none() {
            tracing::debug!(pattern = p.name, matched = &caps[0], "date pattern matched but is not a calendar date");
        }
        date
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_month_name() {
        assert_eq!(extract_date("Date: 11 Dec 2025"), Some(d(2025, 12, 11)));
        assert_eq!(extract_date("on 3 mar 2024 at noon"), Some(d(2024, 3, 3)));
        assert_eq!(extract_date("05 SEP 2023"), Some(d(2023, 9, 5)));
    }

    #[test]
    fn test_slash_is_day_first() {
        assert_eq!(extract_date("12/11/2025 → ₹1,250.00"), Some(d(2025, 11, 12)));
        assert_eq!(extract_date("03/04/2025"), Some(d(2025, 4, 3)));
    }

    #[test]
    fn test_iso_and_dash() {
        assert_eq!(extract_date("txn123 2025-12-10 Amazon"), Some(d(2025, 12, 10)));
        assert_eq!(extract_date("posted 10-12-2025"), Some(d(2025, 12, 10)));
    }

    #[test]
    fn test_priority_order() {
        // month-name form beats a later ISO date
        assert_eq!(extract_date("2025-01-01 then 11 Dec 2025"), Some(d(2025, 12, 11)));
    }

    #[test]
    fn test_impossible_date_falls_through() {
        assert_eq!(extract_date("32/01/2025"), None);
        // slash form is out of range, ISO form is fine
        assert_eq!(extract_date("31/02/2025 2025-02-28"), Some(d(2025, 2, 28)));
    }

    #[test]
    fn test_no_date() {
        assert_eq!(extract_date(""), None);
        assert_eq!(extract_date("This is random text"), None);
    }
}
