//! Scorer error types.

use vera_core::CoreError;

/// Errors that can occur while training or querying the scorer.
#[derive(Debug, thiserror::Error)]
pub enum ScorerError {
    /// `score` was called before any successful training run.
    #[error("Model not trained. Please train the model first.")]
    NotTrained,

    /// The training corpus has no examples.
    #[error("Training corpus is empty")]
    EmptyCorpus,

    /// The training corpus contains only one label.
    #[error("Training corpus needs both labels, found only {label}")]
    SingleClass { label: u8 },

    /// A training example carries a label other than 0 or 1.
    #[error("Invalid label {label} at example {index}: expected 0 (real) or 1 (fake)")]
    InvalidLabel { index: usize, label: u8 },

    /// Reading or writing a JSONL dataset failed.
    #[error("Dataset I/O error at {path}: {source}")]
    Dataset {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The model produced a value outside the result invariants.
    #[error(transparent)]
    Core(#[from] CoreError),
}
