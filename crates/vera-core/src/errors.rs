//! Cross-cutting error types for Vera.
//!
//! Adapter-specific errors (`ScorerError`, `JudgeError`, `EvidenceError`) are
//! defined in their own crates. They converge into `anyhow` in `vera-cli`.

use thiserror::Error;

/// Errors that can be raised by any Vera crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The supplied news text is empty after trimming.
    #[error("Please provide news text")]
    EmptyText,

    /// The supplied news text exceeds the configured character budget.
    #[error("News text is too long: {length} characters (limit {limit})")]
    TextTooLong { length: usize, limit: usize },

    /// Data failed validation (format, range, constraints).
    #[error("Validation error: {0}")]
    Validation(String),
}
