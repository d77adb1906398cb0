use std::error::Error;
use std::fmt;

/// Failures surfaced by the listings API client.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Network failure, non-2xx status, or an undecodable body.
    Request(String),
    /// The backend reports the resource does not exist.
    NotFound(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Request(msg) => write!(f, "Request error: {msg}"),
            ApiError::NotFound(id) => write!(f, "Property not found: {id}"),
        }
    }
}

impl Error for ApiError {}
