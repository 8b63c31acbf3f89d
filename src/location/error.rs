use thiserror::Error;

#[derive(Debug, Error)]
pub enum LocationError {
    #[error("invalid url '{input}': {reason}")]
    InvalidUrl { input: String, reason: String },
}

pub type LocationResult<T> = Result<T, LocationError>;
