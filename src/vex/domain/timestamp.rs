//! Offset date-time helpers shared by the model and the JSON codec.

use crate::shared::error::VexError;
use chrono::{DateTime, FixedOffset, Offset, Timelike, Utc};

pub type Timestamp = DateTime<FixedOffset>;

/// Current time, keeping an explicit offset.
pub fn now() -> Timestamp {
    Utc::now().fixed_offset()
}

/// Parses an ISO-8601 offset date-time such as `2023-01-16T19:07:16.853479631-06:00`.
pub fn parse(field: &'static str, value: &str) -> Result<Timestamp, VexError> {
    DateTime::parse_from_rfc3339(value).map_err(|e| VexError::InvalidTimestamp {
        field,
        value: value.to_string(),
        details: e.to_string(),
    })
}

/// Formats an offset date-time in ISO-8601 form.
///
/// Fractional seconds are printed without trailing zeros and omitted when
/// zero; a zero offset is written as `Z`.
pub fn format(timestamp: &Timestamp) -> String {
    let mut out = timestamp.format("%Y-%m-%dT%H:%M:%S").to_string();

    // Leap-second nanos (>= 1e9) still print as a fraction of the 60th second.
    let nanos = timestamp.nanosecond() % 1_000_000_000;
    if nanos != 0 {
        let fraction = format!("{:09}", nanos);
        out.push('.');
        out.push_str(fraction.trim_end_matches('0'));
    }

    let offset_seconds = timestamp.offset().fix().local_minus_utc();
    if offset_seconds == 0 {
        out.push('Z');
    } else {
        let sign = if offset_seconds < 0 { '-' } else { '+' };
        let abs = offset_seconds.unsigned_abs();
        out.push_str(&format!("{}{:02}:{:02}", sign, abs / 3600, (abs % 3600) / 60));
        if abs % 60 != 0 {
            out.push_str(&format!(":{:02}", abs % 60));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_negative_offset() {
        let ts = parse("timestamp", "2023-01-16T19:07:16.853479631-06:00").unwrap();
        assert_eq!(ts.timestamp(), 1673917636);
        assert_eq!(ts.offset().local_minus_utc(), -6 * 3600);
    }

    #[test]
    fn test_format_keeps_offset_and_nanos() {
        let raw = "2023-01-16T19:07:16.853479631-06:00";
        assert_eq!(format(&parse("timestamp", raw).unwrap()), raw);
    }

    #[test]
    fn test_format_trims_fraction() {
        let ts = parse("timestamp", "2023-01-17T01:07:16.850000000+00:00").unwrap();
        assert_eq!(format(&ts), "2023-01-17T01:07:16.85Z");
    }

    #[test]
    fn test_format_without_fraction() {
        let ts = parse("timestamp", "2023-07-01T12:00:00+05:30").unwrap();
        assert_eq!(format(&ts), "2023-07-01T12:00:00+05:30");
    }

    #[test]
    fn test_parse_invalid() {
        let err = parse("last_updated", "yesterday").unwrap_err();
        assert!(matches!(
            err,
            VexError::InvalidTimestamp {
                field: "last_updated",
                ..
            }
        ));
    }

    #[test]
    fn test_now_round_trips() {
        let ts = now();
        assert_eq!(parse("timestamp", &format(&ts)).unwrap(), ts);
    }
}
