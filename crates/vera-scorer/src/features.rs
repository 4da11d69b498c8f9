//! Text cleaning and metadata feature extraction.

use std::sync::LazyLock;

use regex::Regex;
use vera_core::FeatureSnapshot;

use crate::sentiment;

static URL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://\S+").expect("valid url pattern"));

/// Metadata feature names, in the column order the model uses.
pub const METADATA_FEATURES: [&str; 9] = [
    "text_length",
    "word_count",
    "avg_word_length",
    "sentiment_polarity",
    "sentiment_subjectivity",
    "exclamation_count",
    "question_count",
    "uppercase_count",
    "url_count",
];

/// Lower-case, drop everything except ASCII letters and whitespace, and
/// collapse runs of whitespace into single spaces.
#[must_use]
pub fn clean_text(text: &str) -> String {
    let kept: String = text
        .chars()
        .filter(|c| c.is_ascii_alphabetic() || c.is_whitespace())
        .map(|c| c.to_ascii_lowercase())
        .collect();
    kept.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Metadata features of `text`, as a dense vector in [`METADATA_FEATURES`]
/// order.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn metadata_vector(text: &str) -> [f64; METADATA_FEATURES.len()] {
    let words: Vec<&str> = text.split_whitespace().collect();
    let avg_word_length = if words.is_empty() {
        0.0
    } else {
        words.iter().map(|w| w.chars().count()).sum::<usize>() as f64 / words.len() as f64
    };
    let sentiment = sentiment::analyze(text);

    [
        text.chars().count() as f64,
        words.len() as f64,
        avg_word_length,
        sentiment.polarity,
        sentiment.subjectivity,
        text.matches('!').count() as f64,
        text.matches('?').count() as f64,
        text.chars().filter(|c| c.is_uppercase()).count() as f64,
        URL_PATTERN.find_iter(text).count() as f64,
    ]
}

/// Metadata features of `text` keyed by name.
#[must_use]
pub fn metadata_snapshot(text: &str) -> FeatureSnapshot {
    METADATA_FEATURES
        .iter()
        .zip(metadata_vector(text))
        .map(|(name, value)| ((*name).to_string(), value))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn clean_strips_digits_and_punctuation() {
        assert_eq!(
            clean_text("BREAKING:  5G causes\tCOVID-19!!  Share now."),
            "breaking g causes covid share now"
        );
    }

    #[test]
    fn clean_drops_non_ascii_letters() {
        assert_eq!(clean_text("Café déjà vu"), "caf dj vu");
    }

    #[test]
    fn clean_empty_is_empty() {
        assert_eq!(clean_text("  !!! 123 "), "");
    }

    #[test]
    fn metadata_counts_raw_text() {
        let v = metadata_vector("Is it TRUE? Read https://x.test now!");
        assert_eq!(v[0], 36.0);
        assert_eq!(v[1], 6.0);
        assert_eq!(v[5], 1.0);
        assert_eq!(v[6], 1.0);
        assert_eq!(v[7], 6.0);
        assert_eq!(v[8], 1.0);
    }

    #[test]
    fn metadata_of_empty_text_is_zero() {
        assert!(metadata_vector("").iter().all(|v| *v == 0.0));
    }

    #[test]
    fn snapshot_has_every_feature() {
        let snapshot = metadata_snapshot("good news everyone");
        assert_eq!(snapshot.len(), METADATA_FEATURES.len());
        assert_eq!(snapshot["word_count"], 3.0);
        assert!(snapshot["sentiment_polarity"] > 0.0);
    }
}
