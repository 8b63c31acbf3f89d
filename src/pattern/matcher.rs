use smallvec::{SmallVec, smallvec};

use super::Pattern;
use crate::types::{Groups, MatchSpan};

pub type CaptureList = SmallVec<[Option<String>; 4]>;

/// Owned capture data from one successful match attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternMatch {
    span: MatchSpan,
    captures: CaptureList,
    groups: Groups,
}

impl PatternMatch {
    /// The matched substring (capture 0).
    pub fn matched(&self) -> &str {
        self.get(0).unwrap_or_default()
    }

    pub fn span(&self) -> MatchSpan {
        self.span
    }

    /// Capture at `index`; `None` when the group did not participate.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.captures.get(index).and_then(|c| c.as_deref())
    }

    /// All positional captures including capture 0.
    pub fn captures(&self) -> &[Option<String>] {
        &self.captures
    }

    pub fn len(&self) -> usize {
        self.captures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.captures.is_empty()
    }

    pub fn groups(&self) -> &Groups {
        &self.groups
    }

    pub fn into_groups(self) -> Groups {
        self.groups
    }
}

pub fn test_pattern(path: &str, pattern: &Pattern) -> bool {
    match pattern {
        Pattern::Literal(literal) => path == literal,
        Pattern::Regex(regex) => regex.is_match(path),
    }
}

#[tracing::instrument(level = "trace", skip(pattern), fields(pattern = %pattern))]
pub fn match_pattern(path: &str, pattern: &Pattern) -> Option<PatternMatch> {
    match pattern {
        Pattern::Literal(literal) => {
            if path != literal {
                return None;
            }
            Some(PatternMatch {
                span: (0, path.len()),
                captures: smallvec![Some(path.to_string())],
                groups: Groups::new(),
            })
        }
        Pattern::Regex(regex) => {
            let caps = regex.captures(path)?;
            let whole = caps.get(0)?;

            let captures: CaptureList = caps
                .iter()
                .map(|c| c.map(|m| m.as_str().to_string()))
                .collect();

            let mut groups = Groups::new();
            for (idx, name) in regex.capture_names().enumerate() {
                if let Some(name) = name
                    && let Some(m) = caps.get(idx)
                {
                    groups.insert(name.to_string(), m.as_str().to_string());
                }
            }

            Some(PatternMatch {
                span: (whole.start(), whole.end()),
                captures,
                groups,
            })
        }
    }
}
