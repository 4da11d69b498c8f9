//! Evidence retrieval error types.

use thiserror::Error;

/// Errors that can occur while retrieving search results.
#[derive(Debug, Error)]
pub enum EvidenceError {
    /// HTTP transport error, including timeouts.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The search API returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the provider.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// The search API returned 429 Too Many Requests.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited { retry_after_secs: u64 },

    /// Failed to parse a search response.
    #[error("parse error: {0}")]
    Parse(String),
}
