//! Lenient timestamp decoding.
//!
//! Timestamps are written as RFC 3339 strings. Older documents stored them
//! as a floating-point count of seconds since 2001-01-01T00:00:00Z, so both
//! shapes are accepted on read.

use chrono::{DateTime, Utc};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

/// Unix timestamp of 2001-01-01T00:00:00Z.
const REFERENCE_DATE_UNIX_SECS: i64 = 978_307_200;

#[derive(Deserialize)]
#[serde(untagged)]
enum RawTimestamp {
    Text(String),
    Seconds(f64),
}

impl RawTimestamp {
    fn into_datetime(self) -> Result<DateTime<Utc>, String> {
        match self {
            RawTimestamp::Text(value) => DateTime::parse_from_rfc3339(&value)
                .map(|parsed| parsed.with_timezone(&Utc))
                .map_err(|e| format!("invalid timestamp {:?}: {}", value, e)),
            RawTimestamp::Seconds(value) => from_reference_seconds(value)
                .ok_or_else(|| format!("timestamp out of range: {}", value)),
        }
    }
}

/// Convert seconds since the 2001 reference date to a UTC timestamp.
pub(crate) fn from_reference_seconds(value: f64) -> Option<DateTime<Utc>> {
    if !value.is_finite() {
        return None;
    }
    let whole = value.floor();
    let nanos = ((value - whole) * 1_000_000_000.0).round().min(999_999_999.0) as u32;
    let secs = (whole as i64).checked_add(REFERENCE_DATE_UNIX_SECS)?;
    DateTime::<Utc>::from_timestamp(secs, nanos)
}

pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    RawTimestamp::deserialize(deserializer)?
        .into_datetime()
        .map_err(D::Error::custom)
}

pub(crate) fn deserialize_option<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<RawTimestamp>::deserialize(deserializer)? {
        Some(raw) => raw.into_datetime().map(Some).map_err(D::Error::custom),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_reference_epoch_is_2001() {
        let parsed = from_reference_seconds(0.0).unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2001, 1, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_fractional_reference_seconds() {
        let parsed = from_reference_seconds(86_400.5).unwrap();
        assert_eq!(
            parsed,
            Utc.with_ymd_and_hms(2001, 1, 2, 0, 0, 0).unwrap() + chrono::Duration::milliseconds(500)
        );
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(from_reference_seconds(f64::NAN).is_none());
        assert!(from_reference_seconds(f64::INFINITY).is_none());
    }
}
