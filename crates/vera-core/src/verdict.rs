//! The reconciled, user-facing verdict.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{AnalysisMode, Prediction};
use crate::opinion::FabricationOpinion;
use crate::scorer::ScorerResult;

/// Judge contribution embedded in a [`HybridVerdict`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AiAnalysis {
    Available(FabricationOpinion),
    Unavailable { error: String },
}

impl AiAnalysis {
    #[must_use]
    pub const fn opinion(&self) -> Option<&FabricationOpinion> {
        match self {
            Self::Available(opinion) => Some(opinion),
            Self::Unavailable { .. } => None,
        }
    }
}

/// Final output of the reconciliation engine. Always produced, even when the
/// judge is unavailable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct HybridVerdict {
    pub prediction: Prediction,
    pub confidence: f64,
    pub hybrid_score: f64,
    pub analysis_mode: AnalysisMode,
    pub red_flags: Vec<String>,
    pub green_flags: Vec<String>,
    #[serde(rename = "recommendations")]
    pub recommendation: String,
    pub ml_prediction: ScorerResult,
    pub ai_analysis: AiAnalysis,
}
