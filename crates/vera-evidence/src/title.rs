//! Best-effort page title fetching.

use std::sync::LazyLock;
use std::time::Duration;

use regex::Regex;
use tracing::warn;
use vera_core::input::truncate_chars;

use crate::error::EvidenceError;

/// Longest fetched title kept, in characters.
pub const MAX_FETCHED_TITLE_CHARS: usize = 200;

static TITLE_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<title[^>]*>(.*?)</title>").expect("valid title pattern"));

/// Text of the first `<title>` element, entity-decoded, whitespace-collapsed
/// and capped at [`MAX_FETCHED_TITLE_CHARS`]. Empty when there is no title.
#[must_use]
pub fn extract_title(html: &str) -> String {
    let Some(captures) = TITLE_TAG.captures(html) else {
        return String::new();
    };
    let raw = captures.get(1).map_or("", |m| m.as_str());
    let decoded = html_escape::decode_html_entities(raw);
    let collapsed = decoded.split_whitespace().collect::<Vec<_>>().join(" ");
    truncate_chars(&collapsed, MAX_FETCHED_TITLE_CHARS).to_string()
}

/// Fetches page titles with a per-request timeout.
#[derive(Debug, Clone)]
pub struct TitleFetcher {
    http: reqwest::Client,
}

impl TitleFetcher {
    /// # Errors
    ///
    /// Returns [`EvidenceError::Http`] if the HTTP client cannot be built.
    pub fn new(timeout: Duration) -> Result<Self, EvidenceError> {
        let http = reqwest::Client::builder()
            .user_agent("Mozilla/5.0 (compatible; vera)")
            .timeout(timeout)
            .build()?;
        Ok(Self { http })
    }

    async fn try_fetch(&self, url: &str) -> Result<String, EvidenceError> {
        let resp = self.http.get(url).send().await?;
        let is_html = resp
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v.contains("text/html"));
        if !resp.status().is_success() || !is_html {
            return Ok(String::new());
        }
        Ok(extract_title(&resp.text().await?))
    }

    /// Title of the page at `url`, or an empty string on any failure or
    /// non-HTML response.
    pub async fn fetch(&self, url: &str) -> String {
        match self.try_fetch(url).await {
            Ok(title) => title,
            Err(e) => {
                warn!(url, %e, "title fetch failed");
                String::new()
            }
        }
    }
}
