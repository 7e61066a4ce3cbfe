use crate::cli::{Cli, ColorMode, OutputFormat};
use crate::parser::parse_timestamp;
use crate::source::TimeRange;
use chrono::NaiveDateTime;
use std::path::PathBuf;
use thiserror::Error;

const EXPECTED_FORMAT: &str = "YYYY-MM-DDTHH:MM:SS";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Log directory does not exist: '{}'", .0.display())]
    LogDirMissing(PathBuf),

    #[error("Log directory path is not a directory: '{}'", .0.display())]
    LogDirNotDirectory(PathBuf),

    #[error("Events file does not exist: '{}'", .0.display())]
    EventsFileMissing(PathBuf),

    #[error("Events file path is not a file: '{}'", .0.display())]
    EventsFileNotFile(PathBuf),

    #[error("Invalid --{flag} datetime format: {reason}")]
    InvalidDateTime { flag: &'static str, reason: String },

    #[error("--from time must be earlier than --to time")]
    InvertedRange,
}

/// Validated settings for one run
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    pub log_dir: PathBuf,
    pub events_file: PathBuf,
    pub range: TimeRange,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub color: ColorMode,
}

impl AnalyzerConfig {
    /// Plain-text defaults for a directory and events file, without checks
    pub fn new(log_dir: impl Into<PathBuf>, events_file: impl Into<PathBuf>) -> Self {
        Self {
            log_dir: log_dir.into(),
            events_file: events_file.into(),
            range: TimeRange::unbounded(),
            format: OutputFormat::Text,
            output: None,
            color: ColorMode::Never,
        }
    }

    pub fn with_range(mut self, range: TimeRange) -> Self {
        self.range = range;
        self
    }

    /// Check paths and time bounds from the command line
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        if !cli.log_dir.exists() {
            return Err(ConfigError::LogDirMissing(cli.log_dir.clone()));
        }
        if !cli.log_dir.is_dir() {
            return Err(ConfigError::LogDirNotDirectory(cli.log_dir.clone()));
        }
        if !cli.events_file.exists() {
            return Err(ConfigError::EventsFileMissing(cli.events_file.clone()));
        }
        if !cli.events_file.is_file() {
            return Err(ConfigError::EventsFileNotFile(cli.events_file.clone()));
        }

        let from = cli
            .from_time
            .as_deref()
            .map(|value| parse_bound("from", value))
            .transpose()?;
        let to = cli
            .to_time
            .as_deref()
            .map(|value| parse_bound("to", value))
            .transpose()?;

        if let (Some(from), Some(to)) = (from, to) {
            if from >= to {
                return Err(ConfigError::InvertedRange);
            }
        }

        Ok(Self {
            log_dir: cli.log_dir.clone(),
            events_file: cli.events_file.clone(),
            range: TimeRange::new(from, to),
            format: cli.format,
            output: cli.output.clone(),
            color: cli.color,
        })
    }
}

fn parse_bound(flag: &'static str, value: &str) -> Result<NaiveDateTime, ConfigError> {
    parse_timestamp(value).map_err(|_| {
        let reason = if value.contains('T') {
            format!("Expected format: {EXPECTED_FORMAT}, got: {value}")
        } else {
            format!("Missing 'T' separator. Expected format: {EXPECTED_FORMAT}, got: {value}")
        };
        ConfigError::InvalidDateTime { flag, reason }
    })
}
