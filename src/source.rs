//! Log directory scanning
//!
//! [`LogParser`] lists a directory, opens matching files one at a time in
//! lexical order, and yields parsed [`LogEntry`] values through the pull-based
//! [`LogEntries`] iterator.

use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::parser::LogEntry;
use chrono::NaiveDateTime;
use flate2::read::MultiGzDecoder;
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

/// File name suffixes picked up from the log directory
pub const LOG_EXTENSIONS: [&str; 3] = [".log", ".log.gz", ".txt"];

/// Closed interval of timestamps; a missing bound is unbounded on that side
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimeRange {
    pub from: Option<NaiveDateTime>,
    pub to: Option<NaiveDateTime>,
}

impl TimeRange {
    pub fn new(from: Option<NaiveDateTime>, to: Option<NaiveDateTime>) -> Self {
        Self { from, to }
    }

    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Both bounds are inclusive
    pub fn contains(&self, timestamp: &NaiveDateTime) -> bool {
        let after_from = self.from.map(|from| *timestamp >= from).unwrap_or(true);
        let before_to = self.to.map(|to| *timestamp <= to).unwrap_or(true);
        after_from && before_to
    }
}

/// Discovers and reads the log files of one directory
#[derive(Debug, Clone)]
pub struct LogParser {
    log_dir: PathBuf,
}

impl LogParser {
    pub fn new(log_dir: impl Into<PathBuf>) -> Self {
        Self {
            log_dir: log_dir.into(),
        }
    }

    pub fn log_dir(&self) -> &Path {
        &self.log_dir
    }

    /// Start a fresh scan over every log file, keeping entries inside `range`
    pub fn parse_all_logs(&self, range: TimeRange) -> LogEntries {
        let mut diagnostics = Diagnostics::new();
        let files = self.log_files(&mut diagnostics);
        tracing::debug!(dir = %self.log_dir.display(), files = files.len(), "log files discovered");

        LogEntries {
            files: files.into_iter(),
            current: None,
            range,
            diagnostics,
        }
    }

    /// Matching files sorted lexically; problems with the directory itself
    /// are reported and produce an empty list
    pub fn log_files(&self, diagnostics: &mut Diagnostics) -> Vec<PathBuf> {
        if !self.log_dir.exists() {
            diagnostics.push(Diagnostic::LogDirMissing(self.log_dir.clone()));
            return Vec::new();
        }
        if !self.log_dir.is_dir() {
            diagnostics.push(Diagnostic::LogDirNotDirectory(self.log_dir.clone()));
            return Vec::new();
        }

        let read_dir = match fs::read_dir(&self.log_dir) {
            Ok(read_dir) => read_dir,
            Err(e) => {
                diagnostics.push(Diagnostic::LogDirUnreadable {
                    path: self.log_dir.clone(),
                    reason: e.to_string(),
                });
                return Vec::new();
            }
        };

        let mut files = Vec::new();
        for dir_entry in read_dir {
            let dir_entry = match dir_entry {
                Ok(dir_entry) => dir_entry,
                Err(e) => {
                    diagnostics.push(Diagnostic::LogDirUnreadable {
                        path: self.log_dir.clone(),
                        reason: e.to_string(),
                    });
                    continue;
                }
            };

            let path = dir_entry.path();
            if is_log_file_name(&dir_entry.file_name().to_string_lossy()) && path.is_file() {
                files.push(path);
            }
        }

        files.sort();
        files
    }
}

pub fn is_log_file_name(name: &str) -> bool {
    LOG_EXTENSIONS.iter().any(|ext| name.ends_with(ext))
}

/// Open a log file, decompressing `.gz` files on the fly
pub fn open_log_file(path: &Path) -> io::Result<Box<dyn BufRead>> {
    let file = File::open(path)?;
    let is_gzip = path
        .file_name()
        .map(|name| name.to_string_lossy().ends_with(".gz"))
        .unwrap_or(false);

    if is_gzip {
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

/// The file currently being drained
struct OpenLogFile {
    path: PathBuf,
    reader: Box<dyn BufRead>,
    buf: Vec<u8>,
}

impl OpenLogFile {
    /// Next raw line; lines that are not valid UTF-8 come back as `Some(None)`
    fn next_line(&mut self) -> io::Result<Option<Option<&str>>> {
        self.buf.clear();
        if self.reader.read_until(b'\n', &mut self.buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(std::str::from_utf8(&self.buf).ok()))
    }
}

/// Lazy, forward-only sequence of entries across all files of a scan
///
/// Only one file is open at a time; its reader is dropped as soon as the file
/// is exhausted or fails.
pub struct LogEntries {
    files: std::vec::IntoIter<PathBuf>,
    current: Option<OpenLogFile>,
    range: TimeRange,
    diagnostics: Diagnostics,
}

impl LogEntries {
    /// Diagnostics gathered so far, leaving the iterator's list empty
    pub fn take_diagnostics(&mut self) -> Diagnostics {
        self.diagnostics.take()
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    fn open_next_file(&mut self) -> bool {
        let Some(path) = self.files.next() else {
            return false;
        };

        match open_log_file(&path) {
            Ok(reader) => {
                tracing::debug!(file = %path.display(), "reading log file");
                self.current = Some(OpenLogFile {
                    path,
                    reader,
                    buf: Vec::new(),
                });
            }
            Err(e) => self.diagnostics.push(Diagnostic::LogFileUnreadable {
                path,
                reason: e.to_string(),
            }),
        }
        true
    }
}

impl Iterator for LogEntries {
    type Item = LogEntry;

    fn next(&mut self) -> Option<LogEntry> {
        loop {
            let Some(file) = self.current.as_mut() else {
                if !self.open_next_file() {
                    return None;
                }
                continue;
            };

            match file.next_line() {
                Ok(Some(Some(line))) => {
                    if let Some(entry) = LogEntry::from_line(line) {
                        if self.range.contains(&entry.timestamp) {
                            return Some(entry);
                        }
                    }
                }
                Ok(Some(None)) => {}
                Ok(None) => {
                    tracing::debug!(file = %file.path.display(), "log file exhausted");
                    self.current = None;
                }
                Err(e) => {
                    let path = file.path.clone();
                    self.current = None;
                    self.diagnostics.push(Diagnostic::LogFileUnreadable {
                        path,
                        reason: e.to_string(),
                    });
                }
            }
        }
    }
}
