//! Share endpoint error types.

/// Errors that can occur when requesting a share identifier.
#[derive(Debug, thiserror::Error)]
pub enum ShareError {
    /// HTTP request failed (network error, timeout, client construction)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Rate limited by the share endpoint
    #[error("rate limited by share endpoint")]
    RateLimited,

    /// Endpoint returned an error status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Response body was not the expected JSON
    #[error("JSON parse error: {message}")]
    Json {
        message: String,
        body: Option<String>,
    },
}
