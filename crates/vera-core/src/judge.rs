//! Tagged result of a judge evaluation.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::opinion::FabricationOpinion;

/// What the LLM judge produced for one text.
///
/// Callers must handle every branch: `Unavailable` is a permanent
/// configuration state (no credentials), `Failed` covers any transport or
/// decoding problem and is not further distinguished.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum JudgeOutcome {
    Opinion {
        opinion: FabricationOpinion,
        raw_text: String,
    },
    Unavailable {
        reason: String,
    },
    Failed {
        reason: String,
    },
}

impl JudgeOutcome {
    #[must_use]
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable {
            reason: reason.into(),
        }
    }

    #[must_use]
    pub fn failed(reason: impl Into<String>) -> Self {
        Self::Failed {
            reason: reason.into(),
        }
    }

    /// The opinion, if the judge produced one.
    #[must_use]
    pub const fn opinion(&self) -> Option<&FabricationOpinion> {
        match self {
            Self::Opinion { opinion, .. } => Some(opinion),
            Self::Unavailable { .. } | Self::Failed { .. } => None,
        }
    }

    #[must_use]
    pub const fn is_opinion(&self) -> bool {
        matches!(self, Self::Opinion { .. })
    }
}
