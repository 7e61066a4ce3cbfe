//! Event filter rules and their line grammar
//!
//! # Syntax
//!
//! ```text
//! <EVENT_TYPE> [--count] [--level <LEVEL>] [--pattern <regex tokens...>]
//! ```
//!
//! Blank lines and lines starting with `#` are ignored. Flags may come in any
//! order. `--pattern` takes every token up to the next `--` token and joins
//! them with single spaces. A rule needs at least one of the three flags.
//!
//! # Examples
//!
//! ```text
//! TELEMETRY --count --pattern ^Iteration time:\s\d+\.\d+\ssec$
//! DEVICE --level WARNING --count
//! GNMI --level ERROR
//! ```

pub mod error;
pub mod events;
pub mod matcher;
pub mod parser;

pub use error::FilterParseError;
pub use events::{EventsParser, LoadedFilters};
pub use parser::EventFilter;
