//! Structured opinion returned by the LLM judge.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The judge's assessment of a single news text.
///
/// Scores are integers in `0..=100`. On the wire the recommendation key is
/// `recommendations`; both spellings are accepted when deserializing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct FabricationOpinion {
    pub credibility_score: u8,
    pub is_likely_fake: bool,
    pub confidence: u8,
    pub red_flags: Vec<String>,
    pub green_flags: Vec<String>,
    pub reasoning: String,
    #[serde(rename = "recommendations", alias = "recommendation")]
    pub recommendation: String,
}

impl FabricationOpinion {
    /// Judge credibility as a fraction in `[0, 1]`.
    #[must_use]
    pub fn credibility_fraction(&self) -> f64 {
        f64::from(self.credibility_score.min(100)) / 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recommendation_uses_wire_name() {
        let opinion = FabricationOpinion {
            credibility_score: 80,
            is_likely_fake: false,
            confidence: 90,
            red_flags: vec![],
            green_flags: vec!["Named sources".into()],
            reasoning: "Consistent with agency reports".into(),
            recommendation: "Cross-check the agency release".into(),
        };
        let json = serde_json::to_value(&opinion).unwrap();
        assert_eq!(json["recommendations"], "Cross-check the agency release");
        assert!(json.get("recommendation").is_none());
    }

    #[test]
    fn credibility_fraction_scales() {
        let opinion = FabricationOpinion {
            credibility_score: 25,
            is_likely_fake: true,
            confidence: 60,
            red_flags: vec![],
            green_flags: vec![],
            reasoning: String::new(),
            recommendation: String::new(),
        };
        assert!((opinion.credibility_fraction() - 0.25).abs() < f64::EPSILON);
    }
}
