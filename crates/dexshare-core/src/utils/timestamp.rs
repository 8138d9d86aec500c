//! The share service encodes times as `Date(<epoch-millis>)` strings.
//! Older responses append a `±HHMM` offset inside the parentheses; the
//! milliseconds are UTC either way, so the offset is ignored.

use std::sync::OnceLock;

use chrono::{DateTime, Utc};
use regex::Regex;

use crate::api::{Result, ShareError};

fn timestamp_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"Date\((\d+)(?:[+-]\d{4})?\)").expect("timestamp pattern is valid")
    })
}

/// Decode a vendor `Date(<ms>)` string into a UTC instant.
pub fn parse_vendor_timestamp(raw: &str) -> Result<DateTime<Utc>> {
    let digits = timestamp_regex()
        .captures(raw)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .ok_or_else(|| ShareError::TimestampFormat(raw.to_string()))?;

    let millis: i64 = digits
        .parse()
        .map_err(|_| ShareError::TimestampValue(digits.to_string()))?;

    DateTime::from_timestamp_millis(millis)
        .ok_or_else(|| ShareError::TimestampValue(digits.to_string()))
}

/// Encode a UTC instant the way the vendor does. The vendor never sends
/// instants before the epoch, and the decoder does not accept them.
pub fn format_vendor_timestamp(time: DateTime<Utc>) -> String {
    format!("Date({})", time.timestamp_millis())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_new_year() {
        let parsed = parse_vendor_timestamp("Date(1609459200000)").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2021, 1, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_keeps_milliseconds() {
        let parsed = parse_vendor_timestamp("Date(1609459200123)").unwrap();
        assert_eq!(parsed.timestamp_subsec_millis(), 123);
    }

    #[test]
    fn test_parse_ignores_offset_suffix() {
        let with_offset = parse_vendor_timestamp("/Date(1426292016000-0700)/").unwrap();
        let plain = parse_vendor_timestamp("Date(1426292016000)").unwrap();
        assert_eq!(with_offset, plain);
    }

    #[test]
    fn test_non_numeric_payload_is_rejected() {
        let err = parse_vendor_timestamp("Date(abc)").unwrap_err();
        assert!(matches!(err, ShareError::TimestampFormat(_)));
        assert!(err.to_string().contains("abc"));
    }

    #[test]
    fn test_missing_wrapper_is_rejected() {
        let err = parse_vendor_timestamp("garbage").unwrap_err();
        assert!(err.to_string().contains("garbage"));

        assert!(parse_vendor_timestamp("").is_err());
        assert!(parse_vendor_timestamp("Date()").is_err());
        assert!(parse_vendor_timestamp("2021-01-01T00:00:00Z").is_err());
    }

    #[test]
    fn test_offset_without_digits_is_rejected() {
        for raw in ["Date(-0700)", "Date(+0100)", "Date(-1609459200000)"] {
            let err = parse_vendor_timestamp(raw).unwrap_err();
            assert!(matches!(err, ShareError::TimestampFormat(ref r) if r == raw), "{}", raw);
        }
    }

    #[test]
    fn test_overflowing_digits_are_rejected() {
        let err = parse_vendor_timestamp("Date(99999999999999999999999)").unwrap_err();
        assert!(matches!(err, ShareError::TimestampValue(ref d) if d == "99999999999999999999999"));

        // Fits in i64 but outside chrono's range
        let err = parse_vendor_timestamp(&format!("Date({})", i64::MAX)).unwrap_err();
        assert!(matches!(err, ShareError::TimestampValue(_)));
    }

    #[test]
    fn test_format_then_parse_is_exact() {
        let instants = [
            Utc.with_ymd_and_hms(2021, 1, 1, 0, 0, 0).unwrap(),
            DateTime::from_timestamp_millis(1_700_000_123_456).unwrap(),
            DateTime::from_timestamp_millis(0).unwrap(),
        ];
        for instant in instants {
            let encoded = format_vendor_timestamp(instant);
            assert_eq!(parse_vendor_timestamp(&encoded).unwrap(), instant, "{}", encoded);
        }
    }
}
