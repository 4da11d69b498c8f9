//! # vera-config
//!
//! Layered configuration loading for Vera using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`VERA_*` prefix, `__` as separator)
//! 2. Project-level `.vera/config.toml`
//! 3. User-level `~/.config/vera/config.toml`
//! 4. `OPENAI_API_KEY` as the judge credential
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! `VERA_JUDGE__MODEL` -> `judge.model`, `VERA_EVIDENCE__MAX_RESULTS` ->
//! `evidence.max_results`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use vera_config::VeraConfig;
//!
//! let config = VeraConfig::load_with_dotenv().expect("config");
//! if config.judge.is_configured() {
//!     println!("judge model: {}", config.judge.model);
//! }
//! ```

mod error;
mod evidence;
mod general;
mod judge;
mod scorer;

pub use error::ConfigError;
pub use evidence::EvidenceConfig;
pub use general::GeneralConfig;
pub use judge::JudgeConfig;
pub use scorer::ScorerConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Conventional variable holding the OpenAI credential.
pub const OPENAI_KEY_ENV: &str = "OPENAI_API_KEY";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct VeraConfig {
    #[serde(default)]
    pub judge: JudgeConfig,
    #[serde(default)]
    pub scorer: ScorerConfig,
    #[serde(default)]
    pub evidence: EvidenceConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl VeraConfig {
    /// Load configuration from all sources and validate it.
    ///
    /// Does NOT read `.env`; use [`Self::load_with_dotenv`] for that.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a source fails to parse or a value is out
    /// of range.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration after pulling `.env` into the process environment.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default())).merge(
            Env::raw()
                .only(&[OPENAI_KEY_ENV])
                .map(|_| "judge.api_key".into()),
        );

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(".vera/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("VERA_").split("__"))
    }

    /// Check per-section value ranges.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.judge.validate()?;
        self.scorer.validate()?;
        self.evidence.validate()?;
        self.general.validate()
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("vera").join("config.toml"))
    }

    /// Load `.env` from the current directory. A missing file is ignored.
    fn load_dotenv() {
        let _ = dotenvy::dotenv();
    }
}
