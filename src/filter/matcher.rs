use super::parser::EventFilter;
use crate::parser::LogEntry;
use std::fmt;

impl EventFilter {
    /// Check whether a log entry satisfies every criterion of this filter
    ///
    /// Absent criteria match anything. The pattern is searched, not anchored.
    pub fn matches(&self, entry: &LogEntry) -> bool {
        if entry.event_type != self.event_type {
            return false;
        }

        let level_match = self
            .level
            .as_ref()
            .map(|level| entry.level == *level)
            .unwrap_or(true);

        let pattern_match = self
            .pattern
            .as_ref()
            .map(|pattern| pattern.is_match(&entry.message))
            .unwrap_or(true);

        level_match && pattern_match
    }
}

/// Human-readable criteria, e.g. `Event: DEVICE level [WARNING] pattern [temp]`
impl fmt::Display for EventFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Event: {}", self.event_type)?;
        if let Some(level) = &self.level {
            write!(f, " level [{level}]")?;
        }
        if let Some(pattern) = self.pattern_str() {
            write!(f, " pattern [{pattern}]")?;
        }
        Ok(())
    }
}
