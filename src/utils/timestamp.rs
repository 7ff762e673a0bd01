//! JSON formatting for timestamps.
//!
//! Timestamps are emitted as RFC 3339 in UTC with millisecond precision and a
//! `Z` suffix, e.g. `2020-07-09T20:11:00.000Z`.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serializer;

/// Formats a timestamp as `YYYY-MM-DDTHH:MM:SS.mmmZ`.
pub fn format_millis(value: &DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// `serialize_with` adapter for [`format_millis`].
pub fn serialize_millis<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format_millis(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_whole_seconds() {
        let ts = Utc.with_ymd_and_hms(2020, 7, 9, 20, 11, 0).unwrap();

        assert_eq!(format_millis(&ts), "2020-07-09T20:11:00.000Z");
    }

    #[test]
    fn test_format_truncates_to_millis() {
        let ts = Utc.timestamp_opt(1_592_637_840, 123_456_789).unwrap();

        assert_eq!(format_millis(&ts), "2020-06-20T07:24:00.123Z");
    }

    #[test]
    fn test_serialize_millis() {
        #[derive(serde::Serialize)]
        struct Wrapper {
            #[serde(serialize_with = "serialize_millis")]
            at: DateTime<Utc>,
        }

        let ts = Utc.with_ymd_and_hms(2020, 11, 3, 9, 12, 0).unwrap();
        let json = serde_json::to_string(&Wrapper { at: ts }).unwrap();

        assert_eq!(json, r#"{"at":"2020-11-03T09:12:00.000Z"}"#);
    }
}
