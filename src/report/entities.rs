use crate::filter::EventFilter;
use crate::parser::LogEntry;

/// Stable identity of a filter: its position in the parsed rule list
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FilterId(pub usize);

/// What a filter accumulates while entries stream past
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchBucket {
    /// `--count` filters only keep a tally
    Count(usize),
    /// Other filters keep every match in arrival order
    Entries(Vec<LogEntry>),
}

impl MatchBucket {
    pub fn for_filter(filter: &EventFilter) -> Self {
        if filter.count {
            MatchBucket::Count(0)
        } else {
            MatchBucket::Entries(Vec::new())
        }
    }

    pub fn record(&mut self, entry: &LogEntry) {
        match self {
            MatchBucket::Count(n) => *n += 1,
            MatchBucket::Entries(entries) => entries.push(entry.clone()),
        }
    }

    pub fn match_count(&self) -> usize {
        match self {
            MatchBucket::Count(n) => *n,
            MatchBucket::Entries(entries) => entries.len(),
        }
    }
}

/// Result for one filter
#[derive(Debug, Clone)]
pub struct FilterResult {
    pub id: FilterId,
    pub filter: EventFilter,
    pub bucket: MatchBucket,
}

impl FilterResult {
    pub fn matches(&self) -> &[LogEntry] {
        match &self.bucket {
            MatchBucket::Entries(entries) => entries,
            MatchBucket::Count(_) => &[],
        }
    }
}

/// Results of matching a whole entry stream, one slot per filter in rule order
#[derive(Debug, Clone, Default)]
pub struct AnalysisResults {
    pub results: Vec<FilterResult>,
    pub total_entries: usize,
}

impl AnalysisResults {
    pub fn get(&self, id: FilterId) -> Option<&FilterResult> {
        self.results.get(id.0)
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}
