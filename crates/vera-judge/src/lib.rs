//! # vera-judge
//!
//! Asks a language model whether a news text looks fabricated.
//!
//! A [`Judge`] never returns an error. Every call resolves to a
//! [`JudgeOutcome`]:
//! - `Opinion` when the model answered (its reply is parsed by the two-tier
//!   [`OpinionParser`], which cannot fail),
//! - `Unavailable` when no credentials are configured (no call is made),
//! - `Failed` for transport, status, timeout or envelope errors.

mod error;
mod http;
pub mod parser;
pub mod prompt;
pub mod transport;

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};
use vera_config::JudgeConfig;
use vera_core::{JudgeOutcome, input::truncate_chars};

pub use error::JudgeError;
pub use parser::OpinionParser;
pub use transport::{JudgeRequest, JudgeTransport, OpenAiTransport};

/// Default number of entries returned by [`fact_check_sources`].
pub const DEFAULT_FACT_CHECK_LIMIT: usize = 5;

const FACT_CHECK_SOURCES: [&str; 10] = [
    "Snopes.com",
    "FactCheck.org",
    "PolitiFact.com",
    "Reuters Fact Check",
    "Associated Press Fact Check",
    "BBC Reality Check",
    "Full Fact (UK)",
    "Science Feedback",
    "Lead Stories",
    "NewsGuard",
];

/// The first `limit` recommended fact-checking services, in priority order.
#[must_use]
pub fn fact_check_sources(limit: usize) -> &'static [&'static str] {
    &FACT_CHECK_SOURCES[..limit.min(FACT_CHECK_SOURCES.len())]
}

/// Judge adapter. Cheap to share behind an `Arc`.
pub struct Judge {
    transport: Option<Arc<dyn JudgeTransport>>,
    parser: OpinionParser,
    model: String,
    temperature: f32,
    max_tokens: u32,
    batch_delay: Duration,
}

impl std::fmt::Debug for Judge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Judge")
            .field("model", &self.model)
            .field("available", &self.is_available())
            .finish_non_exhaustive()
    }
}

impl Judge {
    /// Build a judge from configuration. Without an API key the judge is
    /// permanently unavailable.
    ///
    /// # Errors
    ///
    /// Returns [`JudgeError::Http`] if the HTTP client cannot be built.
    pub fn from_config(config: &JudgeConfig) -> Result<Self, JudgeError> {
        let transport: Option<Arc<dyn JudgeTransport>> = if config.is_configured() {
            Some(Arc::new(OpenAiTransport::from_config(config)?))
        } else {
            debug!("judge API key not configured");
            None
        };
        Ok(Self::with_transport(config, transport))
    }

    /// Build a judge around an explicit transport (or none).
    pub fn with_transport(
        config: &JudgeConfig,
        transport: Option<Arc<dyn JudgeTransport>>,
    ) -> Self {
        Self {
            transport,
            parser: OpinionParser::default(),
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
            batch_delay: Duration::from_millis(config.batch_delay_ms),
        }
    }

    /// Replace the reply parser.
    #[must_use]
    pub fn with_parser(mut self, parser: OpinionParser) -> Self {
        self.parser = parser;
        self
    }

    /// Whether a transport is configured.
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.transport.is_some()
    }

    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Evaluate one text, truncated to `max_chars` characters.
    pub async fn evaluate(&self, text: &str, max_chars: usize) -> JudgeOutcome {
        let Some(transport) = &self.transport else {
            return JudgeOutcome::unavailable(JudgeError::NotConfigured.to_string());
        };

        let request = JudgeRequest {
            model: self.model.clone(),
            system_prompt: prompt::SYSTEM_PROMPT.to_string(),
            user_prompt: prompt::analysis_prompt(truncate_chars(text, max_chars)),
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        };

        match transport.complete(&request).await {
            Ok(raw_text) => {
                let opinion = self.parser.parse(&raw_text);
                debug!(
                    credibility = opinion.credibility_score,
                    likely_fake = opinion.is_likely_fake,
                    "judge opinion parsed"
                );
                JudgeOutcome::Opinion { opinion, raw_text }
            }
            Err(e) => {
                warn!(model = %self.model, %e, "judge call failed");
                JudgeOutcome::failed(format!("AI analysis failed: {e}"))
            }
        }
    }

    /// Evaluate texts sequentially, waiting the configured delay between
    /// consecutive calls. Outcomes are returned in input order.
    pub async fn evaluate_batch<S: AsRef<str>>(
        &self,
        texts: &[S],
        max_chars: usize,
    ) -> Vec<JudgeOutcome> {
        let mut outcomes = Vec::with_capacity(texts.len());
        for (i, text) in texts.iter().enumerate() {
            if i > 0 && self.transport.is_some() {
                tokio::time::sleep(self.batch_delay).await;
            }
            debug!(index = i + 1, total = texts.len(), "evaluating batch item");
            outcomes.push(self.evaluate(text.as_ref(), max_chars).await);
        }
        outcomes
    }
}
