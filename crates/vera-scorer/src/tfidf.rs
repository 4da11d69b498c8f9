//! TF-IDF vectorizer over cleaned text.
//!
//! Tokens are runs of two or more word characters; English stop words are
//! removed. The vocabulary keeps the `max_features` most frequent terms
//! (corpus-wide term frequency, ties broken alphabetically) and assigns
//! column indices in alphabetical order. IDF is smoothed
//! (`ln((1 + n) / (1 + df)) + 1`) and every row is l2-normalized.

use std::collections::{BTreeMap, HashMap};
use std::sync::LazyLock;

use regex::Regex;

static TOKEN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\w\w+\b").expect("valid token pattern"));

const STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "almost", "alone", "along",
    "already", "also", "although", "always", "am", "among", "an", "and", "another", "any",
    "anyone", "anything", "are", "around", "as", "at", "back", "be", "became", "because",
    "become", "been", "before", "being", "below", "between", "both", "but", "by", "can",
    "could", "did", "do", "does", "done", "down", "during", "each", "either", "else", "enough",
    "etc", "even", "ever", "every", "few", "for", "from", "further", "had", "has", "have", "he",
    "her", "here", "hers", "herself", "him", "himself", "his", "how", "however", "i", "if",
    "in", "into", "is", "it", "its", "itself", "just", "last", "less", "made", "many", "may",
    "me", "might", "more", "most", "much", "must", "my", "myself", "neither", "never", "no",
    "nor", "not", "now", "of", "off", "often", "on", "once", "one", "only", "or", "other",
    "others", "our", "ours", "ourselves", "out", "over", "own", "per", "perhaps", "rather",
    "same", "see", "seem", "seemed", "several", "she", "should", "since", "so", "some", "still",
    "such", "than", "that", "the", "their", "theirs", "them", "themselves", "then", "there",
    "these", "they", "this", "those", "though", "through", "thus", "to", "together", "too",
    "toward", "under", "until", "up", "upon", "us", "very", "was", "we", "well", "were", "what",
    "when", "where", "whether", "which", "while", "who", "whole", "whom", "whose", "why", "will",
    "with", "within", "without", "would", "yet", "you", "your", "yours", "yourself",
    "yourselves",
];

fn is_stop_word(token: &str) -> bool {
    STOP_WORDS.binary_search(&token).is_ok()
}

/// Tokenize already-cleaned text.
pub fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    TOKEN_PATTERN
        .find_iter(text)
        .map(|m| m.as_str())
        .filter(|t| !is_stop_word(t))
}

/// Sparse row: `(column, weight)` pairs sorted by column.
pub type SparseRow = Vec<(usize, f64)>;

/// Fitted vocabulary and IDF weights.
#[derive(Debug, Clone)]
pub struct TfidfVectorizer {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f64>,
}

impl TfidfVectorizer {
    /// Fit on a corpus of cleaned documents.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn fit<S: AsRef<str>>(documents: &[S], max_features: usize) -> Self {
        let mut term_frequency: BTreeMap<&str, usize> = BTreeMap::new();
        let mut document_frequency: BTreeMap<&str, usize> = BTreeMap::new();

        for document in documents {
            let mut seen: Vec<&str> = Vec::new();
            for token in tokenize(document.as_ref()) {
                *term_frequency.entry(token).or_default() += 1;
                if !seen.contains(&token) {
                    seen.push(token);
                }
            }
            for token in seen {
                *document_frequency.entry(token).or_default() += 1;
            }
        }

        let mut ranked: Vec<(&str, usize)> = term_frequency.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        ranked.truncate(max_features);
        let mut kept: Vec<&str> = ranked.into_iter().map(|(term, _)| term).collect();
        kept.sort_unstable();

        let n = documents.len() as f64;
        let idf = kept
            .iter()
            .map(|term| {
                let df = document_frequency.get(term).copied().unwrap_or(0) as f64;
                ((1.0 + n) / (1.0 + df)).ln() + 1.0
            })
            .collect();
        let vocabulary = kept
            .into_iter()
            .enumerate()
            .map(|(index, term)| (term.to_string(), index))
            .collect();

        Self { vocabulary, idf }
    }

    /// Number of vocabulary columns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.idf.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.idf.is_empty()
    }

    /// Transform one cleaned document into an l2-normalized sparse row.
    /// Out-of-vocabulary terms are ignored; a document with no known terms
    /// yields an empty row.
    #[must_use]
    pub fn transform(&self, document: &str) -> SparseRow {
        let mut counts: BTreeMap<usize, f64> = BTreeMap::new();
        for token in tokenize(document) {
            if let Some(&column) = self.vocabulary.get(token) {
                *counts.entry(column).or_default() += 1.0;
            }
        }

        let mut row: SparseRow = counts
            .into_iter()
            .map(|(column, count)| (column, count * self.idf[column]))
            .collect();
        let norm = row.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
        if norm > 0.0 {
            for (_, weight) in &mut row {
                *weight /= norm;
            }
        }
        row
    }
}
