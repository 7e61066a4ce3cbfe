mod entities;

pub use entities::*;

use crate::filter::EventFilter;
use crate::parser::LogEntry;
use colored::Colorize;
use serde_json::{Value, json};
use std::fmt::Write;

/// Notice printed instead of a report when no filter survived parsing
pub const NO_FILTERS_NOTICE: &str = "No valid event filters found";

/// Run every entry against every filter
///
/// This is a full cross product: an entry can land in any number of buckets,
/// and each bucket keeps arrival order.
pub fn process_entries<I>(filters: &[EventFilter], entries: I) -> AnalysisResults
where
    I: IntoIterator<Item = LogEntry>,
{
    let mut results: Vec<FilterResult> = filters
        .iter()
        .enumerate()
        .map(|(idx, filter)| FilterResult {
            id: FilterId(idx),
            filter: filter.clone(),
            bucket: MatchBucket::for_filter(filter),
        })
        .collect();

    let mut total_entries = 0;
    for entry in entries {
        total_entries += 1;
        for result in results.iter_mut() {
            if result.filter.matches(&entry) {
                result.bucket.record(&entry);
            }
        }
    }

    tracing::debug!(total_entries, filters = results.len(), "entry stream processed");

    AnalysisResults {
        results,
        total_entries,
    }
}

/// Header line of one report section
pub fn section_header(result: &FilterResult) -> String {
    match result.bucket {
        MatchBucket::Count(n) => format!("{} count — matches: {n} entries", result.filter),
        MatchBucket::Entries(_) => format!("{} — matching log lines:", result.filter),
    }
}

/// Render the report as plain text, one blank-line-terminated section per
/// filter in rule order
pub fn format_report_text(results: &AnalysisResults, colorize: bool) -> String {
    let mut out = String::new();

    if results.is_empty() {
        let _ = writeln!(out, "{NO_FILTERS_NOTICE}");
        return out;
    }

    for result in &results.results {
        let header = section_header(result);
        if colorize {
            let _ = writeln!(out, "{}", header.bold());
        } else {
            let _ = writeln!(out, "{header}");
        }

        for entry in result.matches() {
            let _ = writeln!(out, "{entry}");
        }
        out.push('\n');
    }

    out
}

/// Render the report as a pretty-printed JSON document
pub fn generate_json_output(results: &AnalysisResults) -> String {
    let filters: Vec<Value> = results
        .results
        .iter()
        .map(|result| {
            let mut section = json!({
                "id": result.id.0,
                "event_type": result.filter.event_type,
                "level": result.filter.level,
                "pattern": result.filter.pattern_str(),
                "count": result.filter.count,
                "matches": result.bucket.match_count(),
            });
            if let MatchBucket::Entries(entries) = &result.bucket {
                section["entries"] = serde_json::to_value(entries).unwrap_or_default();
            }
            section
        })
        .collect();

    let doc = json!({
        "total_entries": results.total_entries,
        "filters": filters,
    });

    serde_json::to_string_pretty(&doc).unwrap_or_else(|_| doc.to_string())
}
