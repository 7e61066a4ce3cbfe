use clap::{Parser, ValueEnum};
use std::path::PathBuf;

const EXAMPLES: &str = "\
Examples:
    log-event-analyzer --log-dir /logs --events-file events.txt
    log-event-analyzer --log-dir /logs --events-file events.txt --from 2025-06-01T14:00:00
    log-event-analyzer --log-dir /logs --events-file events.txt --from 2025-06-01T14:00:00 --to 2025-06-01T16:00:00";

/// Analyze log files to extract and report structured event data
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None, after_help = EXAMPLES)]
pub struct Cli {
    /// Path to a folder containing log files (.log, .log.gz, .txt)
    #[arg(long, env = "LOG_EVENT_ANALYZER_DIR", value_name = "DIR")]
    pub log_dir: PathBuf,

    /// Path to a file that defines how to filter log events
    #[arg(long, env = "LOG_EVENT_ANALYZER_EVENTS", value_name = "FILE")]
    pub events_file: PathBuf,

    /// Start time filter, inclusive (YYYY-MM-DDTHH:MM:SS)
    #[arg(long = "from", value_name = "DATETIME")]
    pub from_time: Option<String>,

    /// End time filter, inclusive (YYYY-MM-DDTHH:MM:SS)
    #[arg(long = "to", value_name = "DATETIME")]
    pub to_time: Option<String>,

    /// Report format
    #[arg(short = 'F', long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Also write the report to this file
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// When to color the console report
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,

    /// Diagnostics verbosity, as a tracing filter (e.g. "warn", "info", "debug")
    #[arg(long, env = "LOG_EVENT_ANALYZER_LOG", default_value = "warn")]
    pub log_level: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}

pub fn cli_parse() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_and_optional_arguments() {
        let cli = Cli::try_parse_from([
            "log-event-analyzer",
            "--log-dir",
            "/logs",
            "--events-file",
            "events.txt",
            "--from",
            "2025-06-01T14:00:00",
        ])
        .unwrap();
        assert_eq!(cli.log_dir, PathBuf::from("/logs"));
        assert_eq!(cli.events_file, PathBuf::from("events.txt"));
        assert_eq!(cli.from_time.as_deref(), Some("2025-06-01T14:00:00"));
        assert_eq!(cli.to_time, None);
        assert_eq!(cli.format, OutputFormat::Text);
        assert_eq!(cli.color, ColorMode::Auto);
    }

    #[test]
    fn test_format_and_color_values() {
        let cli = Cli::try_parse_from([
            "log-event-analyzer",
            "--log-dir",
            "/logs",
            "--events-file",
            "events.txt",
            "-F",
            "json",
            "--color",
            "never",
        ])
        .unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.color, ColorMode::Never);
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
