//! # vera-evidence
//!
//! Web corroboration for a news claim.
//!
//! [`EvidenceVerifier::verify`] builds a query from the claim, asks a
//! [`SearchProvider`] for results, fills missing titles by fetching the pages
//! concurrently, annotates every hit with its domain trust label and stance,
//! and summarizes the lot with [`vera_reconcile::summarize`].
//!
//! Retrieval failures are reported as a single-field
//! `{"error": "Web verification failed: ..."}` object through
//! [`VerificationOutcome`]; the summary is only computed on success.

pub mod duckduckgo;
mod error;
mod http;
pub mod search;
pub mod title;

use std::sync::Arc;
use std::time::Duration;

use futures::future::join_all;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use vera_config::EvidenceConfig;
use vera_core::input::truncate_chars;
use vera_core::{EvidenceItem, EvidenceSummary};
use vera_reconcile::{DomainPolicy, annotate, summarize};

pub use duckduckgo::DuckDuckGo;
pub use error::EvidenceError;
pub use search::{SearchProvider, SearchRecord};
pub use title::TitleFetcher;

/// Longest query sent to the provider, in characters.
pub const MAX_QUERY_CHARS: usize = 220;
/// Longest title kept on an evidence item, in characters.
pub const MAX_TITLE_CHARS: usize = 160;
/// Longest snippet kept on an evidence item, in characters.
pub const MAX_SNIPPET_CHARS: usize = 240;
/// Title used when neither the provider nor the page supplied one.
pub const NO_TITLE: &str = "(No title)";

/// Successful corroboration report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvidenceReport {
    pub query: String,
    pub summary: EvidenceSummary,
    pub sources: Vec<EvidenceItem>,
}

/// What the verifier hands to callers: a report or an error object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VerificationOutcome {
    Report(EvidenceReport),
    Error { error: String },
}

impl VerificationOutcome {
    #[must_use]
    pub const fn report(&self) -> Option<&EvidenceReport> {
        match self {
            Self::Report(report) => Some(report),
            Self::Error { .. } => None,
        }
    }
}

/// Trim the claim and cap it at [`MAX_QUERY_CHARS`] characters.
#[must_use]
pub fn build_query(text: &str) -> String {
    truncate_chars(text.trim(), MAX_QUERY_CHARS)
        .trim_end()
        .to_string()
}

/// Search, annotate and summarize.
pub struct EvidenceVerifier {
    provider: Arc<dyn SearchProvider>,
    fetcher: Option<TitleFetcher>,
    policy: DomainPolicy,
    max_results: usize,
}

impl std::fmt::Debug for EvidenceVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EvidenceVerifier")
            .field("provider", &self.provider.name())
            .field("fetch_titles", &self.fetcher.is_some())
            .field("max_results", &self.max_results)
            .finish_non_exhaustive()
    }
}

impl EvidenceVerifier {
    /// Build a verifier backed by DuckDuckGo.
    ///
    /// # Errors
    ///
    /// Returns [`EvidenceError::Http`] if an HTTP client cannot be built.
    pub fn from_config(config: &EvidenceConfig) -> Result<Self, EvidenceError> {
        let provider = Arc::new(DuckDuckGo::from_config(config)?);
        Self::with_provider(config, provider)
    }

    /// Build a verifier around an explicit search provider.
    ///
    /// # Errors
    ///
    /// Returns [`EvidenceError::Http`] if the title fetcher cannot be built.
    pub fn with_provider(
        config: &EvidenceConfig,
        provider: Arc<dyn SearchProvider>,
    ) -> Result<Self, EvidenceError> {
        let fetcher = if config.fetch_titles {
            Some(TitleFetcher::new(Duration::from_secs(
                config.fetch_timeout_secs,
            ))?)
        } else {
            None
        };
        Ok(Self {
            provider,
            fetcher,
            policy: DomainPolicy::with_overrides(&config.trusted_domains, &config.suspect_domains),
            max_results: config.max_results,
        })
    }

    #[must_use]
    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// Run one verification.
    ///
    /// # Errors
    ///
    /// Returns the provider's [`EvidenceError`] when the search itself fails.
    /// Title fetch failures only blank the affected item's title.
    pub async fn verify(&self, text: &str) -> Result<EvidenceReport, EvidenceError> {
        let query = build_query(text);
        let mut records = self.provider.search(&query, self.max_results).await?;
        records.truncate(self.max_results);
        debug!(provider = self.provider.name(), results = records.len(), "search complete");

        // Stance is judged on the provider's text before any title fetch.
        let mut sources: Vec<EvidenceItem> = records
            .iter()
            .map(|r| annotate(&r.title, &r.snippet, &r.url, &self.policy))
            .collect();

        if let Some(fetcher) = &self.fetcher {
            let missing: Vec<usize> = sources
                .iter()
                .enumerate()
                .filter(|(_, item)| item.title.is_empty() && !item.url.is_empty())
                .map(|(i, _)| i)
                .collect();
            let titles = join_all(missing.iter().map(|&i| fetcher.fetch(&sources[i].url))).await;
            for (i, title) in missing.into_iter().zip(titles) {
                sources[i].title = title;
            }
        }

        for item in &mut sources {
            item.title = if item.title.is_empty() {
                NO_TITLE.to_string()
            } else {
                truncate_chars(&item.title, MAX_TITLE_CHARS).to_string()
            };
            item.snippet = truncate_chars(&item.snippet, MAX_SNIPPET_CHARS).to_string();
        }

        let summary = summarize(&sources);
        Ok(EvidenceReport {
            query,
            summary,
            sources,
        })
    }

    /// Like [`Self::verify`], folding retrieval errors into the error object.
    pub async fn verify_outcome(&self, text: &str) -> VerificationOutcome {
        match self.verify(text).await {
            Ok(report) => VerificationOutcome::Report(report),
            Err(e) => {
                warn!(provider = self.provider.name(), %e, "web verification failed");
                VerificationOutcome::Error {
                    error: format!("Web verification failed: {e}"),
                }
            }
        }
    }
}
