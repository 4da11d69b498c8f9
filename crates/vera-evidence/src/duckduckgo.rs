//! DuckDuckGo Instant Answer API provider.
//!
//! `GET {endpoint}?q=...&format=json&no_html=1&skip_disambig=1`. Records are
//! taken from the abstract, then `Results`, then `RelatedTopics` (nested topic
//! groups are flattened). Topic entries carry no separate title, so their
//! title is left empty and later filled from the page itself.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use vera_config::EvidenceConfig;

use crate::error::EvidenceError;
use crate::http::check_response;
use crate::search::{SearchProvider, SearchRecord};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct InstantAnswer {
    #[serde(default)]
    heading: String,
    #[serde(default)]
    abstract_text: String,
    #[serde(default, rename = "AbstractURL")]
    abstract_url: String,
    #[serde(default)]
    results: Vec<Topic>,
    #[serde(default)]
    related_topics: Vec<RelatedTopic>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RelatedTopic {
    Group {
        #[serde(rename = "Topics")]
        topics: Vec<Topic>,
    },
    Single(Topic),
}

#[derive(Debug, Deserialize)]
struct Topic {
    #[serde(default, rename = "FirstURL")]
    first_url: String,
    #[serde(default, rename = "Text")]
    text: String,
}

impl Topic {
    fn into_record(self) -> Option<SearchRecord> {
        (!self.first_url.is_empty()).then(|| SearchRecord {
            title: String::new(),
            url: self.first_url,
            snippet: self.text,
        })
    }
}

/// Flatten an Instant Answer payload into at most `max_results` records.
///
/// # Errors
///
/// Returns [`EvidenceError::Parse`] if `body` is not an Instant Answer object.
pub fn parse_instant_answer(
    body: &str,
    max_results: usize,
) -> Result<Vec<SearchRecord>, EvidenceError> {
    let answer: InstantAnswer =
        serde_json::from_str(body).map_err(|e| EvidenceError::Parse(e.to_string()))?;

    let mut records = Vec::new();
    if !answer.abstract_url.is_empty() {
        records.push(SearchRecord {
            title: answer.heading,
            url: answer.abstract_url,
            snippet: answer.abstract_text,
        });
    }
    records.extend(answer.results.into_iter().filter_map(Topic::into_record));
    for related in answer.related_topics {
        match related {
            RelatedTopic::Single(topic) => records.extend(topic.into_record()),
            RelatedTopic::Group { topics } => {
                records.extend(topics.into_iter().filter_map(Topic::into_record));
            }
        }
    }
    records.truncate(max_results);
    Ok(records)
}

/// Instant Answer client.
pub struct DuckDuckGo {
    http: reqwest::Client,
    endpoint: String,
}

impl DuckDuckGo {
    /// Build a client from evidence configuration.
    ///
    /// # Errors
    ///
    /// Returns [`EvidenceError::Http`] if the HTTP client cannot be built.
    pub fn from_config(config: &EvidenceConfig) -> Result<Self, EvidenceError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("vera/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.search_timeout_secs))
            .build()?;
        Ok(Self {
            http,
            endpoint: config.search_endpoint.clone(),
        })
    }
}

#[async_trait]
impl SearchProvider for DuckDuckGo {
    fn name(&self) -> &str {
        "duckduckgo"
    }

    async fn search(
        &self,
        query: &str,
        max_results: usize,
    ) -> Result<Vec<SearchRecord>, EvidenceError> {
        let url = format!(
            "{}?q={}&format=json&no_html=1&skip_disambig=1",
            self.endpoint,
            urlencoding::encode(query)
        );
        let resp = check_response(self.http.get(&url).send().await?).await?;
        let body = resp.text().await?;
        parse_instant_answer(&body, max_results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const FIXTURE: &str = r#"{
        "Heading": "5G",
        "AbstractText": "5G is the fifth generation of cellular network technology.",
        "AbstractSource": "Wikipedia",
        "AbstractURL": "https://en.wikipedia.org/wiki/5G",
        "Results": [
            {"FirstURL": "https://www.itu.int/5g", "Text": "Official ITU overview", "Result": "<a>...</a>"}
        ],
        "RelatedTopics": [
            {"FirstURL": "https://www.who.int/news-room/5g", "Text": "WHO says no evidence links 5G to COVID-19", "Icon": {"URL": ""}},
            {"Name": "Health", "Topics": [
                {"FirstURL": "https://www.reuters.com/fact-check/5g", "Text": "Fact check: false claim about 5G towers"},
                {"FirstURL": "", "Text": "entry without a link"}
            ]}
        ]
    }"#;

    #[test]
    fn parse_flattens_all_sections() {
        let records = parse_instant_answer(FIXTURE, 10).unwrap();
        assert_eq!(records.len(), 4);
        assert_eq!(records[0].title, "5G");
        assert_eq!(records[0].url, "https://en.wikipedia.org/wiki/5G");
        assert_eq!(records[1].url, "https://www.itu.int/5g");
        assert_eq!(records[1].title, "");
        assert_eq!(records[2].snippet, "WHO says no evidence links 5G to COVID-19");
        assert_eq!(records[3].url, "https://www.reuters.com/fact-check/5g");
    }

    #[test]
    fn parse_respects_max_results() {
        let records = parse_instant_answer(FIXTURE, 2).unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn parse_empty_answer() {
        let records = parse_instant_answer(r#"{"Heading": "", "RelatedTopics": []}"#, 8).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn parse_rejects_non_object() {
        assert!(matches!(
            parse_instant_answer("<html>blocked</html>", 8),
            Err(EvidenceError::Parse(_))
        ));
    }

    #[tokio::test]
    #[ignore = "requires network"]
    async fn live_search() {
        let provider = DuckDuckGo::from_config(&EvidenceConfig::default()).unwrap();
        let records = provider.search("Rust programming language", 5).await.unwrap();
        assert!(records.len() <= 5);
    }
}
