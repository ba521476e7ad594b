use crate::request::error::RequestError;
use crate::series::error::DecodeError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OpenMeteoError {
    /// A required option is missing or malformed. Always raised before any
    /// network call.
    #[error("invalid input: {param} = {value}")]
    InvalidInput { param: String, value: String },

    #[error(transparent)]
    Request(#[from] RequestError),

    /// The response arrived but could not be decoded.
    #[error("API error (status 200): {0}")]
    Decode(#[from] DecodeError),

    #[error("Failed to build HTTP client")]
    HttpClient(#[source] reqwest::Error),
}

/// Coarse classification of an [`OpenMeteoError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidInput,
    ApiResponse,
    MalformedTimestamp,
    RateLimitExceeded,
    RateLimitCancelled,
    Transport,
    Cancelled,
}

impl OpenMeteoError {
    pub(crate) fn invalid_input(param: impl Into<String>, value: impl ToString) -> Self {
        OpenMeteoError::InvalidInput {
            param: param.into(),
            value: value.to_string(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            OpenMeteoError::InvalidInput { .. } => ErrorKind::InvalidInput,
            OpenMeteoError::Request(RequestError::ApiResponse { .. }) => ErrorKind::ApiResponse,
            OpenMeteoError::Request(RequestError::RateLimitExceeded { .. }) => {
                ErrorKind::RateLimitExceeded
            }
            OpenMeteoError::Request(RequestError::RateLimitCancelled) => {
                ErrorKind::RateLimitCancelled
            }
            OpenMeteoError::Request(RequestError::Cancelled { .. }) => ErrorKind::Cancelled,
            OpenMeteoError::Request(RequestError::Transport { .. })
            | OpenMeteoError::HttpClient(_) => ErrorKind::Transport,
            OpenMeteoError::Decode(e) if e.is_malformed_timestamp() => {
                ErrorKind::MalformedTimestamp
            }
            OpenMeteoError::Decode(_) => ErrorKind::ApiResponse,
        }
    }

    /// True for failures attributed to the server's answer: a non-200 status
    /// or a body that does not decode, malformed timestamps included.
    pub fn is_api_response(&self) -> bool {
        matches!(
            self,
            OpenMeteoError::Request(RequestError::ApiResponse { .. }) | OpenMeteoError::Decode(_)
        )
    }

    /// HTTP status reported by the server, where one is known.
    pub fn status(&self) -> Option<u16> {
        match self {
            OpenMeteoError::Request(RequestError::ApiResponse { status, .. }) => Some(*status),
            OpenMeteoError::Request(RequestError::RateLimitExceeded { .. }) => Some(429),
            OpenMeteoError::Decode(_) => Some(200),
            _ => None,
        }
    }
}
