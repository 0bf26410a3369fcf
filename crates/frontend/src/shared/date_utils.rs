/// Utilities for date formatting
///
/// Invoice dates arrive either as `YYYY-MM-DD` or as an RFC 3339 timestamp
/// and are always interpreted in UTC.
use chrono::{DateTime, Datelike, NaiveDate, Utc};

const MONTHS_ID: [&str; 12] = [
    "Januari",
    "Februari",
    "Maret",
    "April",
    "Mei",
    "Juni",
    "Juli",
    "Agustus",
    "September",
    "Oktober",
    "November",
    "Desember",
];

/// Parse an API date string into a calendar date (UTC)
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc).date_naive());
    }
    if let Ok(d) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(d);
    }
    // Timestamps without an offset, e.g. "2024-01-05T10:00:00"
    raw.get(..10)
        .and_then(|prefix| NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok())
}

/// Format a date as "05 Januari 2024"
/// Unparseable input is returned as is.
pub fn format_long_date(raw: &str) -> String {
    match parse_date(raw) {
        Some(d) => format!("{:02} {} {}", d.day(), MONTHS_ID[d.month0() as usize], d.year()),
        None => raw.to_string(),
    }
}

/// Format a date for `<input type="date">` (YYYY-MM-DD)
/// Returns an empty string when the input cannot be parsed.
pub fn format_date_for_input(raw: &str) -> String {
    parse_date(raw)
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

/// Today's date (UTC) in input format
pub fn today_for_input() -> String {
    Utc::now().date_naive().format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_long_date() {
        assert_eq!(format_long_date("2024-01-05"), "05 Januari 2024");
        assert_eq!(format_long_date("2023-12-31"), "31 Desember 2023");
        assert_eq!(format_long_date("2024-08-17T00:00:00.000Z"), "17 Agustus 2024");
    }

    #[test]
    fn test_format_long_date_uses_utc() {
        // 23:30 at -02:00 is already the next day in UTC
        assert_eq!(format_long_date("2024-03-09T23:30:00-02:00"), "10 Maret 2024");
    }

    #[test]
    fn test_format_date_for_input() {
        assert_eq!(format_date_for_input("2024-01-05T00:00:00.000Z"), "2024-01-05");
        assert_eq!(format_date_for_input("2024-01-05"), "2024-01-05");
        assert_eq!(format_date_for_input("2024-01-05T08:15:00"), "2024-01-05");
        assert_eq!(format_date_for_input(""), "");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_long_date("invalid"), "invalid");
        assert_eq!(format_date_for_input("invalid"), "");
        assert!(parse_date("").is_none());
    }

    #[test]
    fn test_today_for_input_is_parseable() {
        let today = today_for_input();
        assert_eq!(today.len(), 10);
        assert!(parse_date(&today).is_some());
    }
}
