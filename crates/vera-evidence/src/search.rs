//! Search provider seam.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::EvidenceError;

/// One raw search hit before annotation. `title` may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRecord {
    pub title: String,
    pub url: String,
    pub snippet: String,
}

/// A web search backend.
#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Short provider name for logs.
    fn name(&self) -> &str;

    /// Return up to `max_results` records for `query`.
    async fn search(
        &self,
        query: &str,
        max_results: usize,
    ) -> Result<Vec<SearchRecord>, EvidenceError>;
}
