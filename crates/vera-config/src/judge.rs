//! LLM judge configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

fn default_model() -> String {
    String::from("gpt-3.5-turbo")
}

fn default_base_url() -> String {
    String::from("https://api.openai.com/v1")
}

const fn default_timeout_secs() -> u64 {
    30
}

/// Characters of news text sent to the judge.
const fn default_max_chars() -> usize {
    2000
}

const fn default_temperature() -> f32 {
    0.1
}

const fn default_max_tokens() -> u32 {
    500
}

/// Delay between consecutive judge calls in batch mode.
const fn default_batch_delay_ms() -> u64 {
    1000
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JudgeConfig {
    /// API key for the chat completions endpoint. Falls back to
    /// `OPENAI_API_KEY` when unset.
    #[serde(default)]
    pub api_key: String,

    /// Chat model name.
    #[serde(default = "default_model")]
    pub model: String,

    /// Base URL of an OpenAI-compatible API (no trailing `/chat/completions`).
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Wall-clock timeout for one judge round trip, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Input budget: news text is truncated to this many characters.
    #[serde(default = "default_max_chars")]
    pub max_chars: usize,

    #[serde(default = "default_temperature")]
    pub temperature: f32,

    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Inter-call delay for batch evaluation, in milliseconds.
    #[serde(default = "default_batch_delay_ms")]
    pub batch_delay_ms: u64,
}

impl Default for JudgeConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: default_model(),
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            max_chars: default_max_chars(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            batch_delay_ms: default_batch_delay_ms(),
        }
    }
}

impl JudgeConfig {
    /// Whether credentials are present.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.max_chars == 0 {
            return Err(ConfigError::invalid("judge.max_chars", "must be at least 1"));
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::invalid("judge.timeout_secs", "must be at least 1"));
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(ConfigError::invalid(
                "judge.temperature",
                "must be between 0.0 and 2.0",
            ));
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ConfigError::invalid(
                "judge.base_url",
                "must start with http:// or https://",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_not_configured() {
        let config = JudgeConfig::default();
        assert!(!config.is_configured());
        assert_eq!(config.model, "gpt-3.5-turbo");
        assert_eq!(config.max_chars, 2000);
        assert_eq!(config.timeout_secs, 30);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn whitespace_key_is_not_configured() {
        let config = JudgeConfig {
            api_key: "   ".into(),
            ..Default::default()
        };
        assert!(!config.is_configured());
    }

    #[test]
    fn zero_budget_rejected() {
        let config = JudgeConfig {
            max_chars: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { field, .. }) if field == "judge.max_chars"
        ));
    }

    #[test]
    fn non_http_base_url_rejected() {
        let config = JudgeConfig {
            base_url: "ftp://example".into(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
