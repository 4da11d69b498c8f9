//! Web corroboration shapes.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{CredibilityLabel, EvidenceVerdict, Stance};

/// One search result, annotated with its domain trust label and stance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct EvidenceItem {
    pub title: String,
    pub snippet: String,
    pub url: String,
    /// Registrable domain approximation: the last two labels of the host.
    pub domain: String,
    #[serde(rename = "credibility")]
    pub credibility_label: CredibilityLabel,
    pub stance: Stance,
}

/// Tallies over a sequence of evidence items.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct EvidenceCounts {
    pub trusted: u32,
    pub suspect: u32,
    pub neutral: u32,
    pub support: u32,
    pub refute: u32,
}

/// Aggregate corroboration result. Recomputed per query, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct EvidenceSummary {
    pub credibility_score: u8,
    pub verdict: EvidenceVerdict,
    pub counts: EvidenceCounts,
}
