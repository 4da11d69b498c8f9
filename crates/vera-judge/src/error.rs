//! Judge error types.

use thiserror::Error;

/// Errors from a single judge round trip. Callers fold these into
/// [`vera_core::JudgeOutcome`] rather than propagating them.
#[derive(Debug, Error)]
pub enum JudgeError {
    /// No API key is configured.
    #[error("OpenAI API key not found. Please set OPENAI_API_KEY or judge.api_key")]
    NotConfigured,

    /// HTTP transport error, including timeouts.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The API returned 429 Too Many Requests.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited { retry_after_secs: u64 },

    /// The completion envelope did not carry any message content.
    #[error("malformed completion envelope: {0}")]
    Envelope(String),
}
