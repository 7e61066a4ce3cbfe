use thiserror::Error;

/// Errors that discard a whole rule line
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FilterParseError {
    #[error("Invalid regex pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Filter for {0} has no criteria, ignoring")]
    NoCriteria(String),
}
