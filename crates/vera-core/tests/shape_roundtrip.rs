//! Serde roundtrip and JsonSchema validation for every output shape.

use pretty_assertions::assert_eq;
use schemars::schema_for;
use vera_core::*;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

fn opinion() -> FabricationOpinion {
    FabricationOpinion {
        credibility_score: 20,
        is_likely_fake: true,
        confidence: 85,
        red_flags: vec!["Miracle cure claim".into(), "No sources".into()],
        green_flags: vec![],
        reasoning: "Sensational framing with no attribution".into(),
        recommendation: "Check a medical fact-checker".into(),
    }
}

fn scorer_result() -> ScorerResult {
    let mut features = FeatureSnapshot::new();
    features.insert("exclamation_count".into(), 2.0);
    features.insert("text_length".into(), 120.0);
    ScorerResult::try_new(0.75, features).unwrap()
}

roundtrip_and_validate!(opinion_roundtrip, FabricationOpinion, opinion());

roundtrip_and_validate!(scorer_result_roundtrip, ScorerResult, scorer_result());

roundtrip_and_validate!(
    judge_outcome_opinion_roundtrip,
    JudgeOutcome,
    JudgeOutcome::Opinion {
        opinion: opinion(),
        raw_text: "{\"credibility_score\": 20}".into(),
    }
);

roundtrip_and_validate!(
    judge_outcome_failed_roundtrip,
    JudgeOutcome,
    JudgeOutcome::failed("timed out")
);

roundtrip_and_validate!(
    evidence_item_roundtrip,
    EvidenceItem,
    EvidenceItem {
        title: "Fact check: claim is false".into(),
        snippet: "Investigators found no evidence".into(),
        url: "https://www.reuters.com/fact-check/abc".into(),
        domain: "reuters.com".into(),
        credibility_label: CredibilityLabel::Trusted,
        stance: Stance::Refutes,
    }
);

roundtrip_and_validate!(
    evidence_summary_roundtrip,
    EvidenceSummary,
    EvidenceSummary {
        credibility_score: 70,
        verdict: EvidenceVerdict::LikelyFake,
        counts: EvidenceCounts {
            trusted: 1,
            suspect: 0,
            neutral: 0,
            support: 0,
            refute: 1,
        },
    }
);

roundtrip_and_validate!(
    hybrid_verdict_available_roundtrip,
    HybridVerdict,
    HybridVerdict {
        prediction: Prediction::Fake,
        confidence: 0.25,
        hybrid_score: 0.25,
        analysis_mode: AnalysisMode::Hybrid,
        red_flags: opinion().red_flags,
        green_flags: vec![],
        recommendation: opinion().recommendation,
        ml_prediction: scorer_result(),
        ai_analysis: AiAnalysis::Available(opinion()),
    }
);

roundtrip_and_validate!(
    hybrid_verdict_unavailable_roundtrip,
    HybridVerdict,
    HybridVerdict {
        prediction: Prediction::Fake,
        confidence: 0.75,
        hybrid_score: 0.75,
        analysis_mode: AnalysisMode::MlOnly,
        red_flags: vec![],
        green_flags: vec![],
        recommendation: "Use ML prediction only".into(),
        ml_prediction: scorer_result(),
        ai_analysis: AiAnalysis::Unavailable {
            error: "AI analysis not available".into(),
        },
    }
);

#[test]
fn evidence_item_uses_credibility_key() {
    let item = EvidenceItem {
        title: "t".into(),
        snippet: String::new(),
        url: "https://example.org".into(),
        domain: "example.org".into(),
        credibility_label: CredibilityLabel::Unknown,
        stance: Stance::Neutral,
    };
    let json = serde_json::to_value(&item).unwrap();
    assert_eq!(json["credibility"], "unknown");
    assert_eq!(json["stance"], "neutral");
}
