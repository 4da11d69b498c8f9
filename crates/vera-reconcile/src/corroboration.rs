//! Evidence aggregation: per-item annotation and the corroboration summary.
//!
//! ```text
//! credibility = clamp(0, 100, 60 + (trusted - suspect) * 10)
//! verdict     = LIKELY_FAKE  if refute  > support and trusted > 0
//!               LIKELY_REAL  if support > refute  and trusted > 0
//!               INCONCLUSIVE otherwise
//! ```
//!
//! Items from unknown domains still carry their stance into the support and
//! refute totals. The `trusted > 0` gate is global, not per item.

use vera_core::{
    CredibilityLabel, EvidenceCounts, EvidenceItem, EvidenceSummary, EvidenceVerdict, Stance,
};

use crate::domain::{DomainPolicy, extract_domain};
use crate::stance::infer_stance;

/// Credibility score with no trusted or suspect sources.
pub const BASELINE_CREDIBILITY: i64 = 60;

const SOURCE_STEP: i64 = 10;

/// Build an [`EvidenceItem`] from a raw search record.
#[must_use]
pub fn annotate(title: &str, snippet: &str, url: &str, policy: &DomainPolicy) -> EvidenceItem {
    let domain = extract_domain(url);
    let credibility_label = policy.classify(&domain);
    let stance = infer_stance(snippet, title);
    EvidenceItem {
        title: title.to_string(),
        snippet: snippet.to_string(),
        url: url.to_string(),
        domain,
        credibility_label,
        stance,
    }
}

/// Aggregate evidence items into a corroboration summary. Pure.
#[must_use]
pub fn summarize(items: &[EvidenceItem]) -> EvidenceSummary {
    let mut counts = EvidenceCounts::default();
    for item in items {
        match item.credibility_label {
            CredibilityLabel::Trusted => counts.trusted += 1,
            CredibilityLabel::Suspect => counts.suspect += 1,
            CredibilityLabel::Unknown => {}
        }
        match item.stance {
            Stance::Supports => counts.support += 1,
            Stance::Refutes => counts.refute += 1,
            Stance::Neutral => counts.neutral += 1,
        }
    }

    let net = i64::from(counts.trusted) - i64::from(counts.suspect);
    let credibility_score = u8::try_from((BASELINE_CREDIBILITY + net * SOURCE_STEP).clamp(0, 100))
        .unwrap_or(u8::MAX);

    let verdict = if counts.trusted == 0 {
        EvidenceVerdict::Inconclusive
    } else if counts.refute > counts.support {
        EvidenceVerdict::LikelyFake
    } else if counts.support > counts.refute {
        EvidenceVerdict::LikelyReal
    } else {
        EvidenceVerdict::Inconclusive
    };

    tracing::debug!(
        items = items.len(),
        trusted = counts.trusted,
        suspect = counts.suspect,
        support = counts.support,
        refute = counts.refute,
        credibility_score,
        %verdict,
        "summarized evidence"
    );

    EvidenceSummary {
        credibility_score,
        verdict,
        counts,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn item(domain_url: &str, stance: Stance, label: CredibilityLabel) -> EvidenceItem {
        EvidenceItem {
            title: "t".into(),
            snippet: "s".into(),
            url: domain_url.into(),
            domain: extract_domain(domain_url),
            credibility_label: label,
            stance,
        }
    }

    #[test]
    fn empty_input_is_baseline_inconclusive() {
        let summary = summarize(&[]);
        assert_eq!(
            summary,
            EvidenceSummary {
                credibility_score: 60,
                verdict: EvidenceVerdict::Inconclusive,
                counts: EvidenceCounts::default(),
            }
        );
    }

    #[test]
    fn single_trusted_refutation_is_likely_fake() {
        let policy = DomainPolicy::default();
        let items = vec![annotate(
            "Fact check",
            "This viral claim is false",
            "https://www.reuters.com/fact-check/x",
            &policy,
        )];
        let summary = summarize(&items);
        assert_eq!(summary.counts.trusted, 1);
        assert_eq!(summary.counts.refute, 1);
        assert_eq!(summary.verdict, EvidenceVerdict::LikelyFake);
        assert_eq!(summary.credibility_score, 70);
    }

    #[test]
    fn untrusted_support_is_inconclusive() {
        let policy = DomainPolicy::default();
        let items = vec![annotate(
            "Update",
            "The council confirmed the plan",
            "https://www.smalltownpaper.net/a",
            &policy,
        )];
        let summary = summarize(&items);
        assert_eq!(summary.counts.trusted, 0);
        assert_eq!(summary.counts.support, 1);
        assert_eq!(summary.verdict, EvidenceVerdict::Inconclusive);
        assert_eq!(summary.credibility_score, 60);
    }

    #[test]
    fn unknown_domain_stance_counts_once_trusted_present() {
        let items = vec![
            item("https://apnews.com/a", Stance::Neutral, CredibilityLabel::Trusted),
            item("https://blog.example.org/b", Stance::Supports, CredibilityLabel::Unknown),
        ];
        let summary = summarize(&items);
        assert_eq!(summary.verdict, EvidenceVerdict::LikelyReal);
        assert_eq!(summary.counts.neutral, 1);
    }

    #[test]
    fn tie_between_support_and_refute_is_inconclusive() {
        let items = vec![
            item("https://apnews.com/a", Stance::Supports, CredibilityLabel::Trusted),
            item("https://npr.org/b", Stance::Refutes, CredibilityLabel::Trusted),
        ];
        let summary = summarize(&items);
        assert_eq!(summary.verdict, EvidenceVerdict::Inconclusive);
        assert_eq!(summary.credibility_score, 80);
    }

    #[test]
    fn score_clamps_at_both_ends() {
        let trusted: Vec<_> = (0..6)
            .map(|_| item("https://npr.org/x", Stance::Neutral, CredibilityLabel::Trusted))
            .collect();
        assert_eq!(summarize(&trusted).credibility_score, 100);

        let suspect: Vec<_> = (0..8)
            .map(|_| item("https://infowars.com/x", Stance::Neutral, CredibilityLabel::Suspect))
            .collect();
        assert_eq!(summarize(&suspect).credibility_score, 0);
    }

    #[test]
    fn counts_partition_items_by_stance() {
        let items = vec![
            item("https://a.com", Stance::Supports, CredibilityLabel::Unknown),
            item("https://b.com", Stance::Refutes, CredibilityLabel::Suspect),
            item("https://c.com", Stance::Neutral, CredibilityLabel::Unknown),
            item("https://d.com", Stance::Neutral, CredibilityLabel::Unknown),
        ];
        let counts = summarize(&items).counts;
        assert_eq!(counts.support + counts.refute + counts.neutral, 4);
        assert_eq!(counts.neutral, 2);
        assert_eq!(counts.suspect, 1);
    }

    #[test]
    fn summarize_is_idempotent() {
        let policy = DomainPolicy::default();
        let items = vec![
            annotate("a", "officials confirmed", "https://bbc.com/1", &policy),
            annotate("b", "a hoax", "https://infowars.com/2", &policy),
            annotate("c", "", "https://example.net/3", &policy),
        ];
        assert_eq!(summarize(&items), summarize(&items));
    }

    #[test]
    fn injected_policy_changes_labels() {
        let policy = DomainPolicy::new(["example.net"], Vec::<String>::new());
        let items = vec![annotate(
            "Claim debunked",
            "",
            "https://www.example.net/check",
            &policy,
        )];
        let summary = summarize(&items);
        assert_eq!(items[0].credibility_label, CredibilityLabel::Trusted);
        assert_eq!(items[0].stance, Stance::Refutes);
        assert_eq!(summary.verdict, EvidenceVerdict::LikelyFake);
    }
}
