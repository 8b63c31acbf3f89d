use thiserror::Error;

#[derive(Debug, Error)]
pub enum RequestError {
    #[error("'{method}' is not a valid method token")]
    InvalidMethod { method: String },
    #[error("invalid request url '{input}': {reason}")]
    InvalidUrl { input: String, reason: String },
}

pub type RequestResult<T> = Result<T, RequestError>;
