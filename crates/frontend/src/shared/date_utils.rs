/// Date and time formatting for backend timestamps
///
/// The backend sends RFC 3339 timestamps, SQLite `YYYY-MM-DD HH:MM:SS`
/// strings, or bare dates depending on the table.
use chrono::{DateTime, NaiveDate, NaiveDateTime};

fn parse_datetime(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.naive_utc())
        .ok()
        .or_else(|| NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S").ok())
        .or_else(|| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f").ok())
}

/// "2024-03-15T14:02:26.123Z" -> "2024-03-15 14:02"
pub fn format_datetime(value: &str) -> String {
    parse_datetime(value)
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| value.to_string())
}

/// "2024-03-15" or "2024-03-15T14:02:26Z" -> "2024-03-15"
pub fn format_date(value: &str) -> String {
    parse_datetime(value)
        .map(|dt| dt.date())
        .or_else(|| NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok())
        .map(|date| date.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| value.to_string())
}

/// Optional timestamp for table cells; missing values render as "-"
pub fn format_optional_date(value: Option<&str>) -> String {
    match value {
        Some(value) if !value.trim().is_empty() => format_date(value),
        _ => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_datetime() {
        assert_eq!(format_datetime("2024-03-15T14:02:26.123Z"), "2024-03-15 14:02");
        assert_eq!(format_datetime("2024-12-31 23:59:59"), "2024-12-31 23:59");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "2024-03-15");
        assert_eq!(format_date("2024-03-15T14:02:26+03:00"), "2024-03-15");
        assert_eq!(format_optional_date(None), "-");
        assert_eq!(format_optional_date(Some(" ")), "-");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_datetime("invalid"), "invalid");
        assert_eq!(format_date("invalid"), "invalid");
    }
}
