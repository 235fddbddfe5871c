use crate::domain::level::Level;
use chrono::{DateTime, Utc};

/// Same field order as JavaScript's `Date#toString`, always in UTC.
const TIMESTAMP_FORMAT: &str = "%a %b %d %Y %H:%M:%S GMT+0000";

pub fn format_timestamp(epoch_ms: f64) -> String {
    match DateTime::<Utc>::from_timestamp_millis(epoch_ms as i64) {
        Some(dt) => dt.format(TIMESTAMP_FORMAT).to_string(),
        None => format!("{epoch_ms}"),
    }
}

/// Builds `"<timestamp> <TAG>: v1 v2 ..."`.
pub fn format_line(timestamp: &str, level: Level, values: &[String]) -> String {
    let mut line = format!("{timestamp} {}:", level.tag());
    for value in values {
        line.push(' ');
        line.push_str(value);
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_timestamp_epoch() {
        assert_eq!(format_timestamp(0.0), "Thu Jan 01 1970 00:00:00 GMT+0000");
    }

    #[test]
    fn test_format_timestamp_known_date() {
        // 2024-03-15T12:34:56.789Z
        assert_eq!(
            format_timestamp(1_710_506_096_789.0),
            "Fri Mar 15 2024 12:34:56 GMT+0000"
        );
    }

    #[test]
    fn test_format_timestamp_out_of_range() {
        assert_eq!(format_timestamp(f64::MAX), format!("{}", f64::MAX));
    }

    #[test]
    fn test_format_line_with_values() {
        let values = vec!["a".to_string(), "b".to_string()];
        assert_eq!(
            format_line("T", Level::Debug, &values),
            "T [DEBUG]: a b"
        );
    }

    #[test]
    fn test_format_line_without_values() {
        assert_eq!(format_line("T", Level::Error, &[]), "T [ERROR]:");
    }
}
