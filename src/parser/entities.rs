use chrono::NaiveDateTime;
use serde::{Serialize, Serializer};
use std::fmt;

/// Timestamp layout used when a log entry is rendered back into a report line
pub const REPORT_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// A single parsed log record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogEntry {
    /// Naive (zone-less) time the record was written
    #[serde(serialize_with = "serialize_report_timestamp")]
    pub timestamp: NaiveDateTime,
    /// Log level (e.g., "INFO", "WARNING", "ERROR"), not validated
    pub level: String,
    /// Event category (e.g., "TELEMETRY", "DEVICE")
    pub event_type: String,
    /// Everything after the event type, verbatim
    pub message: String,
}

fn serialize_report_timestamp<S>(timestamp: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(&timestamp.format(REPORT_TIMESTAMP_FORMAT))
}

impl LogEntry {
    pub fn new(
        timestamp: NaiveDateTime,
        level: impl Into<String>,
        event_type: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            timestamp,
            level: level.into(),
            event_type: event_type.into(),
            message: message.into(),
        }
    }

    /// Parse a raw line, returning `None` for anything malformed
    pub fn from_line(line: &str) -> Option<Self> {
        super::parse_log_entry(line).ok()
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.timestamp.format(REPORT_TIMESTAMP_FORMAT),
            self.level,
            self.event_type,
            self.message
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_serializes_with_report_timestamp() {
        let timestamp = NaiveDate::from_ymd_opt(2025, 6, 1)
            .unwrap()
            .and_hms_milli_opt(14, 3, 5, 250)
            .unwrap();
        let entry = LogEntry::new(timestamp, "INFO", "TELEMETRY", "boot ok");

        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "timestamp": "2025-06-01T14:03:05",
                "level": "INFO",
                "event_type": "TELEMETRY",
                "message": "boot ok",
            })
        );
    }
}
