//! Keyword stance inference for search snippets.

use vera_core::Stance;

const REFUTE_KEYWORDS: &[&str] = &[
    "false",
    "fake",
    "hoax",
    "debunk",
    "not true",
    "misleading",
    "no evidence",
];

const SUPPORT_KEYWORDS: &[&str] = &[
    "confirms",
    "confirmed",
    "announced",
    "reports",
    "evidence shows",
    "official",
];

/// Infer the stance of a search result towards the claim.
///
/// Reads the snippet, or the title when the snippet is empty. Refutation
/// keywords take precedence over support keywords.
#[must_use]
pub fn infer_stance(snippet: &str, title: &str) -> Stance {
    let source = if snippet.is_empty() { title } else { snippet };
    let text = source.to_lowercase();
    if REFUTE_KEYWORDS.iter().any(|k| text.contains(k)) {
        Stance::Refutes
    } else if SUPPORT_KEYWORDS.iter().any(|k| text.contains(k)) {
        Stance::Supports
    } else {
        Stance::Neutral
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("Fact check: this claim is FALSE", Stance::Refutes)]
    #[case("Experts debunked the video", Stance::Refutes)]
    #[case("There is no evidence of a link", Stance::Refutes)]
    #[case("The ministry confirmed the figures", Stance::Supports)]
    #[case("Agency reports record harvest", Stance::Supports)]
    #[case("A quiet day at the harbour", Stance::Neutral)]
    #[case("", Stance::Neutral)]
    fn classifies_snippets(#[case] snippet: &str, #[case] expected: Stance) {
        assert_eq!(infer_stance(snippet, ""), expected);
    }

    #[test]
    fn refutation_takes_precedence() {
        let snippet = "Officials confirmed the viral post is a hoax";
        assert_eq!(infer_stance(snippet, ""), Stance::Refutes);
    }

    #[test]
    fn title_used_when_snippet_empty() {
        assert_eq!(
            infer_stance("", "Government announced new rules"),
            Stance::Supports
        );
        assert_eq!(
            infer_stance("Nothing notable", "Government announced new rules"),
            Stance::Neutral
        );
    }
}
