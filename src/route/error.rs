use crate::pattern::PatternError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RouteError {
    #[error("parameter name at position {index} in route {pattern} is empty")]
    ParamNameEmpty { pattern: String, index: usize },
    #[error("duplicate parameter name '{name}' in route {pattern}")]
    DuplicateParamName { pattern: String, name: String },
    #[error("literal route {pattern} cannot declare positional parameters")]
    ParamsOnLiteral { pattern: String },
    #[error(
        "route {pattern} declares {declared} positional parameters but has only {available} capture groups"
    )]
    TooManyParams {
        pattern: String,
        declared: usize,
        available: usize,
    },
    #[error(transparent)]
    Pattern(#[from] PatternError),
}

impl From<std::convert::Infallible> for RouteError {
    fn from(never: std::convert::Infallible) -> Self {
        match never {}
    }
}

pub type RouteResult<T> = Result<T, RouteError>;
