use chrono::{NaiveDate, NaiveDateTime};
use flate2::Compression;
use flate2::write::GzEncoder;
use log_event_analyzer::{Diagnostic, LogEntry, LogParser, TimeRange, parse_log_entry};
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;
use tempfile::tempdir;

fn ts(h: u32, m: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 6, 1)
        .expect("valid date")
        .and_hms_opt(h, m, s)
        .expect("valid time")
}

fn write_file(path: &Path, content: &str) {
    fs::write(path, content).expect("failed to write test file");
}

fn write_gz(path: &Path, content: &str) {
    let file = File::create(path).expect("create gz file");
    let mut encoder = GzEncoder::new(file, Compression::default());
    encoder.write_all(content.as_bytes()).expect("write gz");
    encoder.finish().expect("finish gz");
}

fn collect(dir: &Path, range: TimeRange) -> Vec<LogEntry> {
    LogParser::new(dir).parse_all_logs(range).collect()
}

#[test]
fn test_regular_log_file_parsing() {
    let dir = tempdir().expect("temp dir");
    write_file(
        &dir.path().join("app.log"),
        "2025-06-01T14:03:05 INFO TELEMETRY Test message 1\n\
         2025-06-01T14:04:05 ERROR DEVICE Test message 2\n",
    );

    let entries = collect(dir.path(), TimeRange::unbounded());
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].message, "Test message 1");
    assert_eq!(entries[0].event_type, "TELEMETRY");
    assert_eq!(entries[1].message, "Test message 2");
    assert_eq!(entries[1].event_type, "DEVICE");
    assert_eq!(entries[1].level, "ERROR");
}

#[test]
fn test_compressed_file_parses_like_plain_file() {
    let line = "2025-06-01T14:03:05 INFO TELEMETRY hi\n";

    let gz_dir = tempdir().expect("temp dir");
    write_gz(&gz_dir.path().join("archive.log.gz"), line);
    let plain_dir = tempdir().expect("temp dir");
    write_file(&plain_dir.path().join("archive.log"), line);

    let from_gz = collect(gz_dir.path(), TimeRange::unbounded());
    let from_plain = collect(plain_dir.path(), TimeRange::unbounded());

    assert_eq!(from_gz.len(), 1);
    assert_eq!(from_gz, from_plain);
    assert_eq!(from_gz[0].timestamp, ts(14, 3, 5));
    assert_eq!(from_gz[0].message, "hi");
}

#[test]
fn test_lexical_file_order_with_mixed_extensions() {
    let dir = tempdir().expect("temp dir");
    write_file(&dir.path().join("b.log"), "2025-06-01T09:00:00 INFO B from-b\n");
    write_gz(&dir.path().join("a.log.gz"), "2025-06-01T23:00:00 INFO A from-a\n");
    write_file(&dir.path().join("c.txt"), "2025-06-01T00:00:00 INFO C from-c\n");
    write_file(&dir.path().join("d.json"), "2025-06-01T00:00:00 INFO D ignored\n");

    let messages: Vec<_> = collect(dir.path(), TimeRange::unbounded())
        .into_iter()
        .map(|e| e.message)
        .collect();
    assert_eq!(messages, ["from-a", "from-b", "from-c"]);
}

#[test]
fn test_time_filter_keeps_entries_within_bounds() {
    let dir = tempdir().expect("temp dir");
    let mut content = String::new();
    for minute in [10, 29, 30, 45, 59] {
        content.push_str(&format!("2025-06-01T14:{minute:02}:00 INFO X m{minute}\n"));
    }
    content.push_str("2025-06-01T15:00:00 INFO X m60\n");
    content.push_str("2025-06-01T15:00:01 INFO X m61\n");
    write_file(&dir.path().join("a.log"), &content);

    let from = ts(14, 30, 0);
    let to = ts(15, 0, 0);
    let filtered = collect(dir.path(), TimeRange::new(Some(from), Some(to)));

    let messages: Vec<_> = filtered.iter().map(|e| e.message.as_str()).collect();
    assert_eq!(messages, ["m30", "m45", "m59", "m60"]);
    for entry in &filtered {
        assert!(entry.timestamp >= from);
        assert!(entry.timestamp <= to);
    }

    let all = collect(dir.path(), TimeRange::unbounded());
    assert_eq!(all.len(), 7);
}

#[test]
fn test_unreadable_file_does_not_abort_scan() {
    let dir = tempdir().expect("temp dir");
    write_file(&dir.path().join("a.log.gz"), "plain text pretending to be gzip\n");
    write_file(&dir.path().join("b.log"), "2025-06-01T14:03:05 INFO X survived\n");

    let mut entries = LogParser::new(dir.path()).parse_all_logs(TimeRange::unbounded());
    let messages: Vec<_> = entries.by_ref().map(|e| e.message).collect();
    assert_eq!(messages, ["survived"]);

    let diagnostics = entries.take_diagnostics();
    let paths: Vec<_> = diagnostics
        .iter()
        .filter_map(|d| match d {
            Diagnostic::LogFileUnreadable { path, .. } => Some(path.clone()),
            _ => None,
        })
        .collect();
    assert_eq!(paths, [dir.path().join("a.log.gz")]);
}

#[test]
fn test_message_is_everything_after_third_field() {
    let cases = [
        ("2025-06-01T14:03:05 INFO TELEMETRY Iteration time: 1.2 sec", "Iteration time: 1.2 sec"),
        ("2025-06-01T14:03:05 INFO TELEMETRY x", "x"),
        ("2025-06-01T14:03:05 INFO TELEMETRY a -- b --count", "a -- b --count"),
    ];
    for (line, message) in cases {
        let entry = parse_log_entry(line).expect("valid line");
        assert_eq!(entry.message, message, "line: {line}");
    }
}

#[test]
fn test_short_lines_yield_nothing() {
    for line in [
        "",
        "2025-06-01T14:03:05",
        "2025-06-01T14:03:05 INFO",
        "2025-06-01T14:03:05 INFO TELEMETRY",
        "2025-06-01T14:03:05 INFO TELEMETRY    ",
    ] {
        assert!(LogEntry::from_line(line).is_none(), "line: {line:?}");
    }
}
