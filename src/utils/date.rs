use chrono::{Datelike, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// "YYYY-MM" key of a date.
pub fn month_key(d: &NaiveDate) -> String {
    format!("{:04}-{:02}", d.year(), d.month())
}

/// Parse a "YYYY-MM" month filter into (year, month).
pub fn parse_month_key(s: &str) -> Option<(i32, u32)> {
    let (y, m) = s.trim().split_once('-')?;
    if y.len() != 4 || m.len() != 2 {
        return None;
    }

    let year: i32 = y.parse().ok()?;
    let month: u32 = m.parse().ok()?;

    if !(1..=12).contains(&month) {
        return None;
    }

    Some((year, month))
}

/// "Dec 21, 2025" — the display format of the dashboard table.
pub fn format_display(d: &NaiveDate) -> String {
    d.format("%b %-d, %Y").to_string()
}

/// "January 2025" from a "2025-01" key.
pub fn format_month_key(key: &str) -> Option<String> {
    let (year, month) = parse_month_key(key)?;
    let d = NaiveDate::from_ymd_opt(year, month, 1)?;
    Some(d.format("%B %Y").to_string())
}
