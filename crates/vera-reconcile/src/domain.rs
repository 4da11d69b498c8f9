//! Domain extraction and trust classification.
//!
//! Domain extraction keeps the last two dot-separated labels of the URL host.
//! This misclassifies multi-label public suffixes (`www.bbc.co.uk` becomes
//! `co.uk`), which is the current, documented behavior.

use std::collections::BTreeSet;

use vera_core::CredibilityLabel;

const DEFAULT_TRUSTED: &[&str] = &[
    "reuters.com",
    "apnews.com",
    "bbc.com",
    "bbc.co.uk",
    "nytimes.com",
    "washingtonpost.com",
    "theguardian.com",
    "npr.org",
    "associatedpress.com",
    "factcheck.org",
    "snopes.com",
    "politifact.com",
    "fullfact.org",
    "afp.com",
    "bloomberg.com",
    "wsj.com",
    "aljazeera.com",
    "cbsnews.com",
    "abcnews.go.com",
    "nbcnews.com",
    "sciencemag.org",
    "nature.com",
    "who.int",
    "cdc.gov",
    "europa.eu",
];

const DEFAULT_SUSPECT: &[&str] = &[
    "beforeitsnews.com",
    "worldtruth.tv",
    "yournewswire.com",
    "infowars.com",
    "naturalnews.com",
];

/// Trusted and suspect domain sets used to label evidence items.
///
/// Matching is exact on the extracted two-label domain, so entries with more
/// labels (such as `abcnews.go.com`) can never match an extracted domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainPolicy {
    trusted: BTreeSet<String>,
    suspect: BTreeSet<String>,
}

impl Default for DomainPolicy {
    fn default() -> Self {
        Self::new(
            DEFAULT_TRUSTED.iter().copied(),
            DEFAULT_SUSPECT.iter().copied(),
        )
    }
}

impl DomainPolicy {
    /// Build a policy from explicit domain lists. Entries are lower-cased.
    pub fn new<T, S>(trusted: T, suspect: S) -> Self
    where
        T: IntoIterator,
        T::Item: AsRef<str>,
        S: IntoIterator,
        S::Item: AsRef<str>,
    {
        let normalize = |d: &str| d.trim().to_ascii_lowercase();
        Self {
            trusted: trusted.into_iter().map(|d| normalize(d.as_ref())).collect(),
            suspect: suspect.into_iter().map(|d| normalize(d.as_ref())).collect(),
        }
    }

    /// Build a policy from configured lists. An empty list keeps the
    /// built-in defaults for that side.
    #[must_use]
    pub fn with_overrides(trusted: &[String], suspect: &[String]) -> Self {
        let pick = |custom: &[String], builtin: &[&str]| -> Vec<String> {
            if custom.is_empty() {
                builtin.iter().map(|d| (*d).to_string()).collect()
            } else {
                custom.to_vec()
            }
        };
        Self::new(pick(trusted, DEFAULT_TRUSTED), pick(suspect, DEFAULT_SUSPECT))
    }

    /// Label a domain. Trusted wins if a domain appears in both sets.
    #[must_use]
    pub fn classify(&self, domain: &str) -> CredibilityLabel {
        if self.trusted.contains(domain) {
            CredibilityLabel::Trusted
        } else if self.suspect.contains(domain) {
            CredibilityLabel::Suspect
        } else {
            CredibilityLabel::Unknown
        }
    }

    #[must_use]
    pub fn trusted_len(&self) -> usize {
        self.trusted.len()
    }

    #[must_use]
    pub fn suspect_len(&self) -> usize {
        self.suspect.len()
    }
}

/// Last two labels of the URL host, lower-cased.
///
/// Returns an empty string when the URL cannot be parsed or has no host; a
/// single-label host is returned unchanged.
#[must_use]
pub fn extract_domain(url: &str) -> String {
    let Ok(parsed) = url::Url::parse(url.trim()) else {
        return String::new();
    };
    let Some(host) = parsed.host_str() else {
        return String::new();
    };
    let host = host.to_ascii_lowercase();
    let labels: Vec<&str> = host.split('.').collect();
    if labels.len() >= 2 {
        labels[labels.len() - 2..].join(".")
    } else {
        host
    }
}
