use chrono::NaiveDateTime;
use thiserror::Error;

mod entities;

pub use entities::{LogEntry, REPORT_TIMESTAMP_FORMAT};

/// Accepted timestamp layout; `%.f` makes the fractional part optional
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Parse error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("empty line")]
    EmptyLine,

    #[error("expected 4 fields (timestamp, level, event type, message), found {0}")]
    MissingFields(usize),

    #[error("invalid timestamp '{value}': {reason}")]
    InvalidTimestamp { value: String, reason: String },
}

/// Parses a single log line into a LogEntry struct
///
/// The line is split into at most four whitespace-separated fields. The last
/// field keeps any inner whitespace of the message.
pub fn parse_log_entry(line: &str) -> Result<LogEntry, ParseError> {
    let line = line.trim();
    if line.is_empty() {
        return Err(ParseError::EmptyLine);
    }

    let fields = split_fields(line);
    let [timestamp, level, event_type, message] = fields[..] else {
        return Err(ParseError::MissingFields(fields.len()));
    };

    let timestamp = parse_timestamp(timestamp)?;

    Ok(LogEntry::new(timestamp, level, event_type, message))
}

/// Parses an ISO-8601 timestamp with a mandatory `T` separator
///
/// Used both for log lines and for the `--from` / `--to` bounds, so the two
/// always agree on what a valid instant looks like.
pub fn parse_timestamp(value: &str) -> Result<NaiveDateTime, ParseError> {
    NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT).map_err(|e| {
        ParseError::InvalidTimestamp {
            value: value.to_string(),
            reason: e.to_string(),
        }
    })
}

/// Splits off the first three whitespace-delimited fields; the remainder is
/// returned untouched as the fourth.
fn split_fields(line: &str) -> Vec<&str> {
    let mut fields = Vec::with_capacity(4);
    let mut rest = line;

    while fields.len() < 3 {
        let Some(end) = rest.find(char::is_whitespace) else {
            break;
        };
        fields.push(&rest[..end]);
        rest = rest[end..].trim_start();
    }

    if !rest.is_empty() {
        fields.push(rest);
    }

    fields
}
