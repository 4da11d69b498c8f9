//! Web evidence retrieval configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const MAX_RESULTS_CEILING: usize = 50;

const fn default_max_results() -> usize {
    8
}

const fn default_search_timeout_secs() -> u64 {
    10
}

const fn default_fetch_timeout_secs() -> u64 {
    6
}

fn default_search_endpoint() -> String {
    String::from("https://api.duckduckgo.com/")
}

const fn default_fetch_titles() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EvidenceConfig {
    /// Maximum search results kept per query.
    #[serde(default = "default_max_results")]
    pub max_results: usize,

    #[serde(default = "default_search_timeout_secs")]
    pub search_timeout_secs: u64,

    /// Timeout for each individual page-title fetch.
    #[serde(default = "default_fetch_timeout_secs")]
    pub fetch_timeout_secs: u64,

    /// DuckDuckGo Instant Answer API endpoint.
    #[serde(default = "default_search_endpoint")]
    pub search_endpoint: String,

    /// Fetch `<title>` for results that arrive without one.
    #[serde(default = "default_fetch_titles")]
    pub fetch_titles: bool,

    /// Trusted domains. Empty means the built-in list.
    #[serde(default)]
    pub trusted_domains: Vec<String>,

    /// Suspect domains. Empty means the built-in list.
    #[serde(default)]
    pub suspect_domains: Vec<String>,
}

impl Default for EvidenceConfig {
    fn default() -> Self {
        Self {
            max_results: default_max_results(),
            search_timeout_secs: default_search_timeout_secs(),
            fetch_timeout_secs: default_fetch_timeout_secs(),
            search_endpoint: default_search_endpoint(),
            fetch_titles: default_fetch_titles(),
            trusted_domains: Vec::new(),
            suspect_domains: Vec::new(),
        }
    }
}

impl EvidenceConfig {
    /// Whether either domain list overrides the built-in defaults.
    #[must_use]
    pub fn has_custom_domains(&self) -> bool {
        !self.trusted_domains.is_empty() || !self.suspect_domains.is_empty()
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_RESULTS_CEILING).contains(&self.max_results) {
            return Err(ConfigError::invalid(
                "evidence.max_results",
                format!("must be between 1 and {MAX_RESULTS_CEILING}"),
            ));
        }
        if self.search_timeout_secs == 0 {
            return Err(ConfigError::invalid(
                "evidence.search_timeout_secs",
                "must be at least 1",
            ));
        }
        if self.fetch_timeout_secs == 0 {
            return Err(ConfigError::invalid(
                "evidence.fetch_timeout_secs",
                "must be at least 1",
            ));
        }
        Ok(())
    }
}
