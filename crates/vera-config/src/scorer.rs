//! Statistical scorer configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// TF-IDF vocabulary cap.
const fn default_max_features() -> usize {
    5000
}

const fn default_epochs() -> usize {
    400
}

const fn default_learning_rate() -> f64 {
    0.5
}

const fn default_l2() -> f64 {
    0.001
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScorerConfig {
    #[serde(default = "default_max_features")]
    pub max_features: usize,

    /// Full-batch gradient descent passes.
    #[serde(default = "default_epochs")]
    pub epochs: usize,

    #[serde(default = "default_learning_rate")]
    pub learning_rate: f64,

    /// L2 regularization strength.
    #[serde(default = "default_l2")]
    pub l2: f64,

    /// JSONL training corpus. Empty means the built-in seed corpus.
    #[serde(default)]
    pub dataset_path: String,
}

impl Default for ScorerConfig {
    fn default() -> Self {
        Self {
            max_features: default_max_features(),
            epochs: default_epochs(),
            learning_rate: default_learning_rate(),
            l2: default_l2(),
            dataset_path: String::new(),
        }
    }
}

impl ScorerConfig {
    /// Whether a custom dataset is configured.
    #[must_use]
    pub fn has_dataset(&self) -> bool {
        !self.dataset_path.trim().is_empty()
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.max_features == 0 {
            return Err(ConfigError::invalid("scorer.max_features", "must be at least 1"));
        }
        if self.epochs == 0 {
            return Err(ConfigError::invalid("scorer.epochs", "must be at least 1"));
        }
        if !(self.learning_rate.is_finite() && self.learning_rate > 0.0) {
            return Err(ConfigError::invalid(
                "scorer.learning_rate",
                "must be a positive number",
            ));
        }
        if !(self.l2.is_finite() && self.l2 >= 0.0) {
            return Err(ConfigError::invalid("scorer.l2", "must be non-negative"));
        }
        Ok(())
    }
}
