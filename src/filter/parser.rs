use super::error::FilterParseError;
use regex::Regex;

const COUNT_FLAG: &str = "--count";
const LEVEL_FLAG: &str = "--level";
const PATTERN_FLAG: &str = "--pattern";
const FLAG_PREFIX: &str = "--";

/// A single matching rule read from the events file
#[derive(Debug, Clone)]
pub struct EventFilter {
    /// Event type the entry must carry (exact match)
    pub event_type: String,
    /// Report a count instead of listing the matching lines
    pub count: bool,
    /// Level the entry must carry (exact match)
    pub level: Option<String>,
    /// Regex searched for anywhere in the message
    pub pattern: Option<Regex>,
}

/// Scanner states for a rule line
///
/// ```text
/// ExpectEventType --token--> ScanFlags --"--pattern"--> CapturePattern
///                                ^                           |
///                                +------ "--*" token --------+
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
enum ScanState<'a> {
    ExpectEventType,
    ScanFlags,
    CapturePattern(Vec<&'a str>),
}

/// Criteria collected while scanning; turned into an [`EventFilter`] at the end
#[derive(Debug, Default)]
struct Criteria<'a> {
    event_type: Option<&'a str>,
    count: bool,
    level: Option<&'a str>,
    pattern: Option<Regex>,
}

impl EventFilter {
    /// Parse one line of the events file
    ///
    /// Returns `Ok(None)` for blank and comment lines.
    pub fn parse_line(line: &str) -> Result<Option<Self>, FilterParseError> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let criteria = scan_tokens(line.split_whitespace())?;
        let Some(event_type) = criteria.event_type else {
            return Ok(None);
        };

        if !criteria.count && criteria.level.is_none() && criteria.pattern.is_none() {
            return Err(FilterParseError::NoCriteria(event_type.to_string()));
        }

        Ok(Some(EventFilter {
            event_type: event_type.to_string(),
            count: criteria.count,
            level: criteria.level.map(str::to_string),
            pattern: criteria.pattern,
        }))
    }

    /// Source text of the pattern, if any
    pub fn pattern_str(&self) -> Option<&str> {
        self.pattern.as_ref().map(Regex::as_str)
    }
}

/// Walk the tokens of a rule line through [`ScanState`]
///
/// Each `--pattern` clause is compiled as soon as it ends, so the first bad
/// regex fails the line even if a later clause would replace it.
fn scan_tokens<'a, I>(tokens: I) -> Result<Criteria<'a>, FilterParseError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut criteria = Criteria::default();
    let mut state = ScanState::ExpectEventType;
    let mut tokens = tokens.into_iter();

    while let Some(token) = tokens.next() {
        state = match state {
            ScanState::ExpectEventType => {
                criteria.event_type = Some(token);
                ScanState::ScanFlags
            }
            ScanState::CapturePattern(mut captured) => {
                if token.starts_with(FLAG_PREFIX) {
                    finish_pattern(&mut criteria, captured)?;
                    scan_flag(&mut criteria, token, &mut tokens)
                } else {
                    captured.push(token);
                    ScanState::CapturePattern(captured)
                }
            }
            ScanState::ScanFlags => scan_flag(&mut criteria, token, &mut tokens),
        };
    }

    if let ScanState::CapturePattern(captured) = state {
        finish_pattern(&mut criteria, captured)?;
    }

    Ok(criteria)
}

/// Handle a token seen in `ScanFlags` and return the next state
fn scan_flag<'a, I>(
    criteria: &mut Criteria<'a>,
    token: &'a str,
    tokens: &mut I,
) -> ScanState<'a>
where
    I: Iterator<Item = &'a str>,
{
    match token {
        COUNT_FLAG => criteria.count = true,
        LEVEL_FLAG => {
            // The next token is the value, whatever it looks like; at end of
            // line the flag is a no-op.
            if let Some(value) = tokens.next() {
                criteria.level = Some(value);
            }
        }
        PATTERN_FLAG => return ScanState::CapturePattern(Vec::new()),
        _ => {}
    }
    ScanState::ScanFlags
}

fn finish_pattern(
    criteria: &mut Criteria<'_>,
    captured: Vec<&str>,
) -> Result<(), FilterParseError> {
    if captured.is_empty() {
        return Ok(());
    }

    let pattern = captured.join(" ");
    match Regex::new(&pattern) {
        Ok(regex) => {
            criteria.pattern = Some(regex);
            Ok(())
        }
        Err(source) => Err(FilterParseError::InvalidPattern { pattern, source }),
    }
}
