//! General application configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Longest accepted news text, in characters.
const fn default_max_text_length() -> usize {
    10_000
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Reject input texts longer than this many characters.
    #[serde(default = "default_max_text_length")]
    pub max_text_length: usize,

    /// Consult the judge by default (`--no-ai` overrides per run).
    #[serde(default = "default_use_ai")]
    pub use_ai: bool,
}

const fn default_use_ai() -> bool {
    true
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            max_text_length: default_max_text_length(),
            use_ai: default_use_ai(),
        }
    }
}

impl GeneralConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.max_text_length == 0 {
            return Err(ConfigError::invalid(
                "general.max_text_length",
                "must be at least 1",
            ));
        }
        Ok(())
    }
}
