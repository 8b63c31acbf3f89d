use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{PatternError, PatternResult};

const MIN_SIZE_LIMIT: usize = 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternOptions {
    pub case_insensitive: bool,
    pub multi_line: bool,
    pub dot_matches_new_line: bool,
    pub size_limit: usize,
    pub dfa_size_limit: usize,
}

impl Default for PatternOptions {
    fn default() -> Self {
        Self {
            case_insensitive: false,
            multi_line: false,
            dot_matches_new_line: false,
            size_limit: 10 * (1 << 20),
            dfa_size_limit: 2 * (1 << 20),
        }
    }
}

impl PatternOptions {
    pub fn builder() -> PatternOptionsBuilder {
        PatternOptionsBuilder::default()
    }

    pub fn validate(&self) -> Result<(), PatternOptionsError> {
        if self.size_limit < MIN_SIZE_LIMIT {
            return Err(PatternOptionsError::SizeLimitTooSmall {
                provided: self.size_limit,
                min: MIN_SIZE_LIMIT,
            });
        }
        if self.dfa_size_limit < MIN_SIZE_LIMIT {
            return Err(PatternOptionsError::DfaSizeLimitTooSmall {
                provided: self.dfa_size_limit,
                min: MIN_SIZE_LIMIT,
            });
        }
        Ok(())
    }

    pub(crate) fn compile(&self, source: &str) -> PatternResult<Regex> {
        self.validate()?;
        RegexBuilder::new(source)
            .case_insensitive(self.case_insensitive)
            .multi_line(self.multi_line)
            .dot_matches_new_line(self.dot_matches_new_line)
            .size_limit(self.size_limit)
            .dfa_size_limit(self.dfa_size_limit)
            .build()
            .map_err(|err| PatternError::InvalidRegex {
                source_pattern: source.to_string(),
                reason: err.to_string(),
            })
    }
}

#[derive(Debug, Default, Clone)]
pub struct PatternOptionsBuilder {
    options: PatternOptions,
}

impl PatternOptionsBuilder {
    pub fn case_insensitive(mut self, value: bool) -> Self {
        self.options.case_insensitive = value;
        self
    }

    pub fn multi_line(mut self, value: bool) -> Self {
        self.options.multi_line = value;
        self
    }

    pub fn dot_matches_new_line(mut self, value: bool) -> Self {
        self.options.dot_matches_new_line = value;
        self
    }

    pub fn size_limit(mut self, value: usize) -> Self {
        self.options.size_limit = value;
        self
    }

    pub fn dfa_size_limit(mut self, value: usize) -> Self {
        self.options.dfa_size_limit = value;
        self
    }

    pub fn build(self) -> Result<PatternOptions, PatternOptionsError> {
        self.options.validate()?;
        Ok(self.options)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PatternOptionsError {
    #[error("size_limit must be at least {min} bytes (got {provided})")]
    SizeLimitTooSmall { provided: usize, min: usize },
    #[error("dfa_size_limit must be at least {min} bytes (got {provided})")]
    DfaSizeLimitTooSmall { provided: usize, min: usize },
}
