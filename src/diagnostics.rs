//! Structured warnings for problems that are skipped rather than fatal
//!
//! The parsing layers never print. Every recoverable problem is pushed here
//! and handed back to the caller, which decides how to surface it.

use crate::filter::FilterParseError;
use std::path::PathBuf;
use thiserror::Error;

/// A recoverable problem met while loading filters or scanning logs
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Diagnostic {
    #[error("Error reading events file {}: {reason}", .path.display())]
    EventsFileUnreadable { path: PathBuf, reason: String },

    #[error("{}:{line}: {error}", .path.display())]
    InvalidFilter {
        path: PathBuf,
        line: usize,
        #[source]
        error: FilterParseError,
    },

    #[error("Directory '{}' does not exist", .0.display())]
    LogDirMissing(PathBuf),

    #[error("'{}' is not a directory", .0.display())]
    LogDirNotDirectory(PathBuf),

    #[error("Could not list directory {}: {reason}", .path.display())]
    LogDirUnreadable { path: PathBuf, reason: String },

    #[error("Could not read file {}: {reason}", .path.display())]
    LogFileUnreadable { path: PathBuf, reason: String },
}

/// Ordered collection of diagnostics
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Diagnostics {
    items: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        tracing::debug!(%diagnostic, "diagnostic recorded");
        self.items.push(diagnostic);
    }

    pub fn extend(&mut self, other: Diagnostics) {
        self.items.extend(other.items);
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.items.iter()
    }

    /// Drain everything collected so far
    pub fn take(&mut self) -> Diagnostics {
        std::mem::take(self)
    }
}

impl IntoIterator for Diagnostics {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_problem() {
        let diag = Diagnostic::InvalidFilter {
            path: PathBuf::from("events.txt"),
            line: 3,
            error: FilterParseError::NoCriteria("GNMI".to_string()),
        };
        assert_eq!(
            diag.to_string(),
            "events.txt:3: Filter for GNMI has no criteria, ignoring"
        );

        let diag = Diagnostic::LogDirMissing(PathBuf::from("/nope"));
        assert_eq!(diag.to_string(), "Directory '/nope' does not exist");
    }

    #[test]
    fn test_take_drains_collector() {
        let mut diags = Diagnostics::new();
        diags.push(Diagnostic::LogDirNotDirectory(PathBuf::from("a.log")));
        let taken = diags.take();
        assert_eq!(taken.len(), 1);
        assert!(diags.is_empty());
    }
}
