//! Birth-date formats
//!
//! The index calculator works on `DD/MM/YYYY`. Callers may also pass the
//! ISO `YYYY-MM-DD` form, which is converted first.

use chrono::NaiveDate;
use regex::Regex;
use std::sync::OnceLock;

fn iso_date_regex() -> &'static Regex {
    static ISO_DATE: OnceLock<Regex> = OnceLock::new();
    ISO_DATE.get_or_init(|| {
        Regex::new(r"^(\d{4})-(\d{1,2})-(\d{1,2})$").expect("static ISO date pattern is valid")
    })
}

/// Convert `YYYY-MM-DD` to `DD/MM/YYYY`; any other input is returned trimmed.
///
/// # Examples
///
/// ```
/// use name_forge::numerology::to_numerology_date;
///
/// assert_eq!(to_numerology_date("2024-03-15"), "15/03/2024");
/// assert_eq!(to_numerology_date("15/03/2024"), "15/03/2024");
/// ```
pub fn to_numerology_date(input: &str) -> String {
    let trimmed = input.trim();
    let Some(caps) = iso_date_regex().captures(trimmed) else {
        return trimmed.to_string();
    };

    match NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        Ok(date) => date.format("%d/%m/%Y").to_string(),
        // Not a calendar date: reorder the text as-is
        Err(_) => format!("{}/{}/{}", &caps[3], &caps[2], &caps[1]),
    }
}

/// Day, month and the raw year digits of a `DD/MM/YYYY` date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateParts<'a> {
    pub day: u32,
    pub month: u32,
    pub year_digits: &'a str,
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_digit())
}

/// Split a `DD/MM/YYYY` date into three all-digit parts
pub fn parse_birth_date(date: &str) -> Option<DateParts<'_>> {
    let parts: Vec<&str> = date.trim().split('/').map(str::trim).collect();
    if parts.len() != 3 || !parts.iter().all(|p| is_digits(p)) {
        return None;
    }

    Some(DateParts {
        day: parts[0].parse().ok()?,
        month: parts[1].parse().ok()?,
        year_digits: parts[2],
    })
}

/// Day of month from the first `/` component, 0 when unreadable
pub fn birth_day(date: &str) -> u32 {
    date.trim()
        .split('/')
        .next()
        .and_then(|d| d.trim().parse().ok())
        .unwrap_or(0)
}

/// Solar year for the Can-Chi cycle; `None` unless it is a positive integer
pub fn birth_year(date: &str) -> Option<i64> {
    date.trim()
        .split('/')
        .nth(2)
        .and_then(|y| y.trim().parse::<i64>().ok())
        .filter(|&y| y > 0)
}
