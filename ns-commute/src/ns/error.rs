//! NS client error types.

use std::fmt;

use super::convert::ConversionError;

/// Errors from the NS HTTP client.
#[derive(Debug)]
pub enum NsError {
    /// HTTP request failed (network error, timeout, etc.)
    Http(reqwest::Error),

    /// JSON deserialization failed
    Json {
        message: String,
        body: Option<String>,
    },

    /// API returned an error status code
    ApiError { status: u16, message: String },

    /// Rate limited by the API
    RateLimited,

    /// Invalid API key or unauthorized
    Unauthorized,

    /// Response parsed but a trip had an unexpected shape
    Convert(ConversionError),
}

impl fmt::Display for NsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NsError::Http(e) => write!(f, "HTTP error: {e}"),
            NsError::Json { message, body } => {
                write!(f, "JSON parse error: {message}")?;
                if let Some(body) = body {
                    write!(f, " (body: {body})")?;
                }
                Ok(())
            }
            NsError::ApiError { status, message } => {
                write!(f, "API error {status}: {message}")
            }
            NsError::RateLimited => write!(f, "rate limited by NS API"),
            NsError::Unauthorized => write!(f, "unauthorized (invalid API key)"),
            NsError::Convert(e) => write!(f, "unexpected response shape: {e}"),
        }
    }
}

impl std::error::Error for NsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            NsError::Http(e) => Some(e),
            NsError::Convert(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for NsError {
    fn from(err: reqwest::Error) -> Self {
        NsError::Http(err)
    }
}

impl From<ConversionError> for NsError {
    fn from(err: ConversionError) -> Self {
        NsError::Convert(err)
    }
}
