//! Two-tier opinion parsing.
//!
//! The judge answers in free text that should embed one JSON object. The
//! strict tier parses the outermost `{...}` span; anything it rejects goes to
//! the keyword fallback. [`OpinionParser::parse`] never fails.

use serde::Deserialize;
use vera_core::FabricationOpinion;

pub const DEFAULT_RECOMMENDATION: &str = "Verify with multiple sources";
const DEFAULT_SCORE: f64 = 50.0;
const FALLBACK_RED_FLAG: &str = "Unable to parse detailed analysis";
const FALLBACK_GREEN_FLAG: &str = "AI analysis completed";
const FALLBACK_FAKE_SCORE: u8 = 30;
const FALLBACK_REAL_SCORE: u8 = 70;
const FALLBACK_CONFIDENCE_CAP: usize = 80;
const FAKE_MARKERS: [&str; 4] = ["fake", "false", "misleading", "unreliable"];

/// Structured first tier. `None` hands the payload to the fallback.
pub trait StrictParser: Send + Sync {
    fn parse(&self, payload: &str) -> Option<FabricationOpinion>;
}

/// Heuristic second tier. Always produces an opinion.
pub trait FallbackParser: Send + Sync {
    fn extract(&self, payload: &str) -> FabricationOpinion;
}

/// Loose wire shape of the judge's JSON. Wrong types fail deserialization.
#[derive(Deserialize)]
struct WireOpinion {
    #[serde(default)]
    credibility_score: Option<f64>,
    #[serde(default)]
    is_likely_fake: Option<bool>,
    #[serde(default)]
    confidence: Option<f64>,
    #[serde(default)]
    red_flags: Option<Vec<String>>,
    #[serde(default)]
    green_flags: Option<Vec<String>>,
    #[serde(default)]
    reasoning: Option<String>,
    #[serde(default, alias = "recommendation")]
    recommendations: Option<String>,
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_percent(value: f64) -> u8 {
    value.round().clamp(0.0, 100.0) as u8
}

/// Parses the span from the first `{` to the last `}` as JSON.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonObjectParser;

impl StrictParser for JsonObjectParser {
    fn parse(&self, payload: &str) -> Option<FabricationOpinion> {
        let start = payload.find('{')?;
        let end = payload.rfind('}')?;
        if start >= end {
            return None;
        }
        let wire: WireOpinion = serde_json::from_str(&payload[start..=end]).ok()?;

        let credibility_score = to_percent(wire.credibility_score.unwrap_or(DEFAULT_SCORE));
        Some(FabricationOpinion {
            credibility_score,
            is_likely_fake: wire.is_likely_fake.unwrap_or(credibility_score < 50),
            confidence: to_percent(wire.confidence.unwrap_or(DEFAULT_SCORE)),
            red_flags: wire.red_flags.unwrap_or_default(),
            green_flags: wire.green_flags.unwrap_or_default(),
            reasoning: wire.reasoning.unwrap_or_default(),
            recommendation: wire
                .recommendations
                .unwrap_or_else(|| DEFAULT_RECOMMENDATION.to_string()),
        })
    }
}

/// Keyword scan over the whole payload.
#[derive(Debug, Default, Clone, Copy)]
pub struct KeywordFallback;

impl FallbackParser for KeywordFallback {
    fn extract(&self, payload: &str) -> FabricationOpinion {
        let lowered = payload.to_lowercase();
        let is_likely_fake = FAKE_MARKERS.iter().any(|m| lowered.contains(m));
        let confidence = (payload.chars().count() / 2).min(FALLBACK_CONFIDENCE_CAP);

        FabricationOpinion {
            credibility_score: if is_likely_fake {
                FALLBACK_FAKE_SCORE
            } else {
                FALLBACK_REAL_SCORE
            },
            is_likely_fake,
            confidence: u8::try_from(confidence).unwrap_or(u8::MAX),
            red_flags: vec![FALLBACK_RED_FLAG.to_string()],
            green_flags: vec![FALLBACK_GREEN_FLAG.to_string()],
            reasoning: payload.to_string(),
            recommendation: DEFAULT_RECOMMENDATION.to_string(),
        }
    }
}

/// Strict tier followed by fallback tier.
pub struct OpinionParser {
    strict: Box<dyn StrictParser>,
    fallback: Box<dyn FallbackParser>,
}

impl OpinionParser {
    pub fn new(strict: Box<dyn StrictParser>, fallback: Box<dyn FallbackParser>) -> Self {
        Self { strict, fallback }
    }

    #[must_use]
    pub fn parse(&self, payload: &str) -> FabricationOpinion {
        self.strict.parse(payload).unwrap_or_else(|| {
            tracing::debug!("judge reply is not valid opinion JSON, using keyword fallback");
            self.fallback.extract(payload)
        })
    }
}

impl Default for OpinionParser {
    fn default() -> Self {
        Self::new(Box::new(JsonObjectParser), Box::new(KeywordFallback))
    }
}

impl std::fmt::Debug for OpinionParser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpinionParser").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn parse(payload: &str) -> FabricationOpinion {
        OpinionParser::default().parse(payload)
    }

    #[test]
    fn strict_parse_inside_prose() {
        let payload = r#"Here is my analysis:
{"credibility_score": 15, "is_likely_fake": true, "confidence": 88,
 "red_flags": ["Miracle cure claims"], "green_flags": [],
 "reasoning": "No sources", "recommendations": "Check WHO guidance"}
Hope this helps."#;
        let opinion = parse(payload);
        assert_eq!(
            opinion,
            FabricationOpinion {
                credibility_score: 15,
                is_likely_fake: true,
                confidence: 88,
                red_flags: vec!["Miracle cure claims".into()],
                green_flags: vec![],
                reasoning: "No sources".into(),
                recommendation: "Check WHO guidance".into(),
            }
        );
    }

    #[test]
    fn strict_defaults_for_missing_keys() {
        let opinion = parse(r#"{"credibility_score": 35}"#);
        assert_eq!(opinion.credibility_score, 35);
        assert!(opinion.is_likely_fake);
        assert_eq!(opinion.confidence, 50);
        assert!(opinion.red_flags.is_empty());
        assert_eq!(opinion.recommendation, DEFAULT_RECOMMENDATION);

        let empty = parse("{}");
        assert_eq!(empty.credibility_score, 50);
        assert!(!empty.is_likely_fake);
    }

    #[rstest]
    #[case(r#"{"credibility_score": 72.6}"#, 73)]
    #[case(r#"{"credibility_score": 140}"#, 100)]
    #[case(r#"{"credibility_score": -5}"#, 0)]
    #[case(r#"{"credibility_score": null}"#, 50)]
    fn scores_are_rounded_and_clamped(#[case] payload: &str, #[case] expected: u8) {
        assert_eq!(parse(payload).credibility_score, expected);
    }

    #[test]
    fn singular_recommendation_key_accepted() {
        let opinion = parse(r#"{"recommendation": "Ask a librarian"}"#);
        assert_eq!(opinion.recommendation, "Ask a librarian");
    }

    #[test]
    fn no_braces_with_false_is_fake() {
        let opinion = parse("This claim is false and spreads panic.");
        assert_eq!(opinion.credibility_score, 30);
        assert!(opinion.is_likely_fake);
        assert_eq!(opinion.red_flags, vec![FALLBACK_RED_FLAG]);
        assert_eq!(opinion.green_flags, vec![FALLBACK_GREEN_FLAG]);
        assert_eq!(opinion.reasoning, "This claim is false and spreads panic.");
    }

    #[test]
    fn forty_char_payload_gives_confidence_twenty() {
        let payload = "a".repeat(40);
        let opinion = parse(&payload);
        assert_eq!(opinion.confidence, 20);
        assert_eq!(opinion.credibility_score, 70);
        assert!(!opinion.is_likely_fake);
    }

    #[test]
    fn forty_char_fake_payload_scores_thirty_with_confidence_twenty() {
        let payload = format!("this claim is misleading{}", ".".repeat(16));
        assert_eq!(payload.chars().count(), 40);
        let opinion = parse(&payload);
        assert_eq!(opinion.credibility_score, 30);
        assert!(opinion.is_likely_fake);
        assert_eq!(opinion.confidence, 20);
    }

    #[test]
    fn fallback_confidence_is_capped() {
        assert_eq!(parse(&"b".repeat(1000)).confidence, 80);
    }

    #[rstest]
    #[case::string_for_list(r#"{"red_flags": "many"}"#)]
    #[case::string_for_score(r#"{"credibility_score": "high"}"#)]
    #[case::truncated(r#"{"credibility_score": 20, "reasoning": "cut off"#)]
    #[case::reversed_braces("} nothing here {")]
    fn malformed_json_goes_to_fallback(#[case] payload: &str) {
        let opinion = parse(payload);
        assert_eq!(opinion.red_flags, vec![FALLBACK_RED_FLAG]);
        assert_eq!(opinion.reasoning, payload);
    }

    #[test]
    fn fallback_is_case_insensitive() {
        assert!(parse("MISLEADING headline").is_likely_fake);
        assert!(parse("Unreliable outlet").is_likely_fake);
        assert!(!parse("Looks credible").is_likely_fake);
    }

    #[test]
    fn strict_tier_can_be_swapped() {
        struct Never;
        impl StrictParser for Never {
            fn parse(&self, _payload: &str) -> Option<FabricationOpinion> {
                None
            }
        }
        let parser = OpinionParser::new(Box::new(Never), Box::new(KeywordFallback));
        let opinion = parser.parse(r#"{"credibility_score": 90}"#);
        assert_eq!(opinion.credibility_score, 70);
    }
}
