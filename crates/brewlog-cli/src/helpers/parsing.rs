//! Parsing helpers for datetimes and entry references.

use chrono::{DateTime, Local, NaiveDate, NaiveTime, TimeZone, Utc};

/// Parse a datetime string (ISO-8601, YYYY-MM-DD, or HH:MM for today).
///
/// Date-only and time-only values are interpreted in local time.
pub fn parse_datetime(value: &str) -> anyhow::Result<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Ok(parsed.with_timezone(&Utc));
    }

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        let naive = date
            .and_hms_opt(0, 0, 0)
            .ok_or_else(|| anyhow::anyhow!("Invalid date value: {}", value))?;
        return local_to_utc(naive, value);
    }

    if let Ok(time) = NaiveTime::parse_from_str(value, "%H:%M") {
        let naive = Local::now().date_naive().and_time(time);
        return local_to_utc(naive, value);
    }

    Err(anyhow::anyhow!(
        "Invalid date/time (expected ISO-8601, YYYY-MM-DD, or HH:MM): {}",
        value
    ))
}

fn local_to_utc(naive: chrono::NaiveDateTime, original: &str) -> anyhow::Result<DateTime<Utc>> {
    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
        .ok_or_else(|| anyhow::anyhow!("Local time does not exist: {}", original))
}

/// How a command refers to an entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryRef {
    /// Position in the current list
    Position(usize),
    /// Full id or id prefix
    Id(String),
}

/// Interpret a bare number as a list position, anything else as an id.
///
/// Short all-digit id prefixes are ambiguous with positions; positions win,
/// and `--id` is available for the rest.
pub fn parse_entry_ref(value: &str) -> EntryRef {
    let trimmed = value.trim();
    match trimmed.parse::<usize>() {
        Ok(position) => EntryRef::Position(position),
        Err(_) => EntryRef::Id(trimmed.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rfc3339() {
        let parsed = parse_datetime("2025-08-10T07:30:00Z").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2025, 8, 10, 7, 30, 0).unwrap());
    }

    #[test]
    fn test_parse_date_and_time_only() {
        assert!(parse_datetime("2025-08-10").is_ok());
        assert!(parse_datetime("07:45").is_ok());
    }

    #[test]
    fn test_parse_invalid() {
        let err = parse_datetime("yesterday").unwrap_err().to_string();
        assert!(err.contains("Invalid date/time"));
    }

    #[test]
    fn test_entry_ref() {
        assert_eq!(parse_entry_ref("3"), EntryRef::Position(3));
        assert_eq!(parse_entry_ref(" a1b2 "), EntryRef::Id("a1b2".to_string()));
    }
}
