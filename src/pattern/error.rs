use super::PatternOptionsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PatternError {
    #[error("literal pattern must not be empty")]
    EmptyLiteral,
    #[error("regex pattern '{source_pattern}' failed to compile: {reason}")]
    InvalidRegex {
        source_pattern: String,
        reason: String,
    },
    #[error(transparent)]
    Options(#[from] PatternOptionsError),
}

pub type PatternResult<T> = Result<T, PatternError>;
