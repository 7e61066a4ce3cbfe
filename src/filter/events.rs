use super::parser::EventFilter;
use crate::diagnostics::{Diagnostic, Diagnostics};
use std::fs;
use std::path::{Path, PathBuf};

/// Filters loaded from an events file, with whatever went wrong along the way
#[derive(Debug, Default)]
pub struct LoadedFilters {
    pub filters: Vec<EventFilter>,
    pub diagnostics: Diagnostics,
}

/// Reads an events file into an ordered list of [`EventFilter`]s
#[derive(Debug, Clone)]
pub struct EventsParser {
    events_file: PathBuf,
}

impl EventsParser {
    pub fn new(events_file: impl Into<PathBuf>) -> Self {
        Self {
            events_file: events_file.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.events_file
    }

    /// Parse the whole file, keeping file order
    ///
    /// An unreadable file yields no filters at all. A bad line only drops
    /// that line.
    pub fn parse_events(&self) -> LoadedFilters {
        let mut loaded = LoadedFilters::default();

        let content = match fs::read_to_string(&self.events_file) {
            Ok(content) => content,
            Err(e) => {
                loaded.diagnostics.push(Diagnostic::EventsFileUnreadable {
                    path: self.events_file.clone(),
                    reason: e.to_string(),
                });
                return loaded;
            }
        };

        for (idx, line) in content.lines().enumerate() {
            match EventFilter::parse_line(line) {
                Ok(Some(filter)) => {
                    tracing::debug!(line = idx + 1, %filter, count = filter.count, "filter parsed");
                    loaded.filters.push(filter);
                }
                Ok(None) => {}
                Err(error) => loaded.diagnostics.push(Diagnostic::InvalidFilter {
                    path: self.events_file.clone(),
                    line: idx + 1,
                    error,
                }),
            }
        }

        loaded
    }
}
