mod error;
mod matcher;
mod options;

pub use error::{PatternError, PatternResult};
pub use matcher::{CaptureList, PatternMatch, match_pattern, test_pattern};
pub use options::{PatternOptions, PatternOptionsBuilder, PatternOptionsError};

use regex::Regex;
use std::fmt;

/// An acceptable request path.
///
/// Literals require exact equality with the path. Regexes use search
/// semantics, so anchoring with `^...$` is up to the caller. `regex::Regex`
/// keeps no cursor between calls; reusing one pattern across requests and
/// threads is safe.
#[derive(Debug, Clone)]
pub enum Pattern {
    Literal(String),
    Regex(Regex),
}

impl Pattern {
    pub fn literal<S: Into<String>>(path: S) -> PatternResult<Self> {
        let path = path.into();
        if path.is_empty() {
            return Err(PatternError::EmptyLiteral);
        }
        Ok(Pattern::Literal(path))
    }

    pub fn regex(source: &str) -> PatternResult<Self> {
        Self::regex_with(source, &PatternOptions::default())
    }

    pub fn regex_with(source: &str, options: &PatternOptions) -> PatternResult<Self> {
        options.compile(source).map(Pattern::Regex)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Pattern::Literal(path) => path,
            Pattern::Regex(regex) => regex.as_str(),
        }
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, Pattern::Literal(_))
    }

    /// Number of capture groups, not counting the implicit whole-match group.
    pub fn capture_count(&self) -> usize {
        match self {
            Pattern::Literal(_) => 0,
            Pattern::Regex(regex) => regex.captures_len().saturating_sub(1),
        }
    }

    pub fn test(&self, path: &str) -> bool {
        test_pattern(path, self)
    }

    pub fn find(&self, path: &str) -> Option<PatternMatch> {
        match_pattern(path, self)
    }
}

impl From<Regex> for Pattern {
    fn from(regex: Regex) -> Self {
        Pattern::Regex(regex)
    }
}

impl TryFrom<&str> for Pattern {
    type Error = PatternError;

    fn try_from(path: &str) -> PatternResult<Self> {
        Pattern::literal(path)
    }
}

impl TryFrom<String> for Pattern {
    type Error = PatternError;

    fn try_from(path: String) -> PatternResult<Self> {
        Pattern::literal(path)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pattern::Literal(path) => write!(f, "\"{path}\""),
            Pattern::Regex(regex) => write!(f, "/{}/", regex.as_str()),
        }
    }
}
