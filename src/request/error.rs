use thiserror::Error;

#[derive(Debug, Error)]
pub enum RequestError {
    /// The server answered with something other than 200 or 429.
    #[error("API error (status {status}): {message}")]
    ApiResponse { status: u16, message: String },

    /// The server answered 429.
    #[error("rate limit exceeded: {message}")]
    RateLimitExceeded { message: String },

    /// The caller cancelled while waiting for a local rate-limit token.
    #[error("rate limit wait cancelled before a token was available")]
    RateLimitCancelled,

    /// The caller cancelled while the HTTP call was in flight.
    #[error("request to {url} cancelled")]
    Cancelled { url: String },

    #[error("Network request failed for {url}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}
