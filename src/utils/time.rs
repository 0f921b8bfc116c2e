use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serializer;

/// ISO-8601 with millisecond precision and a `Z` suffix, e.g.
/// `2024-05-01T12:00:00.000Z`.
pub fn iso_millis(at: &DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub fn serialize_iso_millis<S>(at: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&iso_millis(at))
}
