pub mod cli;
pub mod config;
pub mod diagnostics;
pub mod filter;
pub mod logging;
pub mod parser;
pub mod report;
pub mod source;

use anyhow::Context;
use std::path::Path;

pub use cli::{Cli, ColorMode, OutputFormat, cli_parse};
pub use config::{AnalyzerConfig, ConfigError};
pub use diagnostics::{Diagnostic, Diagnostics};
pub use filter::{EventFilter, EventsParser, FilterParseError, LoadedFilters};
pub use parser::{LogEntry, ParseError, parse_log_entry};
pub use report::{
    AnalysisResults, FilterId, MatchBucket, format_report_text, generate_json_output,
    process_entries,
};
pub use source::{LogEntries, LogParser, TimeRange};

/// Everything one run produced: the per-filter results and the problems
/// that were skipped on the way
#[derive(Debug)]
pub struct Analysis {
    pub results: AnalysisResults,
    pub diagnostics: Diagnostics,
}

/// Load the filters, stream the log directory through them, and collect the
/// results
///
/// When no filter survives parsing the log directory is not scanned at all.
pub fn analyze(config: &AnalyzerConfig) -> Analysis {
    let events_parser = EventsParser::new(&config.events_file);
    tracing::info!("Loading event filters from: {}", events_parser.path().display());
    let LoadedFilters {
        filters,
        mut diagnostics,
    } = events_parser.parse_events();

    if filters.is_empty() {
        return Analysis {
            results: AnalysisResults::default(),
            diagnostics,
        };
    }

    tracing::info!("Loaded {} event filters", filters.len());
    let log_parser = LogParser::new(&config.log_dir);
    tracing::info!("Parsing log files from: {}", log_parser.log_dir().display());

    let mut entries = log_parser.parse_all_logs(config.range);
    let results = process_entries(&filters, entries.by_ref());
    diagnostics.extend(entries.take_diagnostics());

    tracing::info!("Scanned {} log entries", results.total_entries);

    Analysis {
        results,
        diagnostics,
    }
}

fn apply_color_mode(mode: ColorMode) {
    match mode {
        ColorMode::Always => colored::control::set_override(true),
        ColorMode::Never => colored::control::set_override(false),
        ColorMode::Auto => {}
    }
}

fn write_output_file(path: &Path, content: &str) -> anyhow::Result<()> {
    std::fs::write(path, content)
        .with_context(|| format!("Failed to write output file '{}'", path.display()))
}

pub fn run(cli: Cli) -> anyhow::Result<()> {
    let config = AnalyzerConfig::from_cli(&cli)?;
    apply_color_mode(config.color);

    let analysis = analyze(&config);
    for diagnostic in &analysis.diagnostics {
        tracing::warn!("{diagnostic}");
    }

    match config.format {
        OutputFormat::Text => {
            print!("{}", format_report_text(&analysis.results, true));
            if let Some(path) = &config.output {
                write_output_file(path, &format_report_text(&analysis.results, false))?;
            }
        }
        OutputFormat::Json => {
            let json_output = generate_json_output(&analysis.results);
            println!("{json_output}");
            if let Some(path) = &config.output {
                write_output_file(path, &json_output)?;
            }
        }
    }

    Ok(())
}
