//! Categorical labels shared by the scorer, judge, evidence, and verdict types.
//!
//! Labels that appear verbatim in user-facing output (`FAKE`, `LIKELY_REAL`, ...)
//! serialize in `SCREAMING_SNAKE_CASE`; per-item annotations serialize in
//! `snake_case`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Prediction
// ---------------------------------------------------------------------------

/// Final categorical prediction for a news text.
///
/// `Unknown` is only produced when no scorer result exists, which the
/// pipeline never allows once lazy training is in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Prediction {
    Fake,
    Real,
    Unknown,
}

impl Prediction {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fake => "FAKE",
            Self::Real => "REAL",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for Prediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// AnalysisMode
// ---------------------------------------------------------------------------

/// Which signals contributed to a [`crate::HybridVerdict`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisMode {
    /// Scorer and judge were both weighed.
    Hybrid,
    /// The judge was unavailable, failed, or disabled.
    MlOnly,
}

impl AnalysisMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hybrid => "hybrid",
            Self::MlOnly => "ml_only",
        }
    }
}

impl fmt::Display for AnalysisMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// CredibilityLabel
// ---------------------------------------------------------------------------

/// Trust label of the domain an evidence item came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum CredibilityLabel {
    Trusted,
    Suspect,
    Unknown,
}

impl CredibilityLabel {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Trusted => "trusted",
            Self::Suspect => "suspect",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for CredibilityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Stance
// ---------------------------------------------------------------------------

/// Inferred relationship of a search snippet to the claim being checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Stance {
    Supports,
    Refutes,
    Neutral,
}

impl Stance {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Supports => "supports",
            Self::Refutes => "refutes",
            Self::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Stance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// EvidenceVerdict
// ---------------------------------------------------------------------------

/// Corroboration verdict derived from a set of evidence items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EvidenceVerdict {
    LikelyFake,
    LikelyReal,
    Inconclusive,
}

impl EvidenceVerdict {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LikelyFake => "LIKELY_FAKE",
            Self::LikelyReal => "LIKELY_REAL",
            Self::Inconclusive => "INCONCLUSIVE",
        }
    }
}

impl fmt::Display for EvidenceVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
