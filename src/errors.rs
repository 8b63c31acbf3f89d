use crate::enums::UnknownMethod;
use crate::location::LocationError;
use crate::pattern::{PatternError, PatternOptionsError};
use crate::request::RequestError;
use crate::route::RouteError;
use thiserror::Error;

/// Every structural failure the crate reports. Runtime "no match" is never
/// an error.
#[derive(Debug, Error)]
pub enum RouterError {
    #[error(transparent)]
    Pattern(#[from] PatternError),
    #[error(transparent)]
    PatternOptions(#[from] PatternOptionsError),
    #[error(transparent)]
    Route(#[from] RouteError),
    #[error(transparent)]
    Request(#[from] RequestError),
    #[error(transparent)]
    Location(#[from] LocationError),
    #[error(transparent)]
    Method(#[from] UnknownMethod),
}

pub type RouterResult<T> = Result<T, RouterError>;
