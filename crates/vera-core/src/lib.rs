//! # vera-core
//!
//! Shared shapes for Vera.
//!
//! Every signal source produces one of the types in this crate, and the
//! reconciliation engine consumes only these types:
//! - [`ScorerResult`] from the statistical classifier
//! - [`JudgeOutcome`] / [`FabricationOpinion`] from the LLM judge
//! - [`EvidenceItem`] / [`EvidenceSummary`] from web corroboration
//! - [`HybridVerdict`], the final reconciled output
//!
//! Input validation for news text and the cross-cutting [`CoreError`] also
//! live here.

pub mod enums;
pub mod errors;
pub mod evidence;
pub mod input;
pub mod judge;
pub mod opinion;
pub mod scorer;
pub mod verdict;

pub use enums::{AnalysisMode, CredibilityLabel, EvidenceVerdict, Prediction, Stance};
pub use errors::CoreError;
pub use evidence::{EvidenceCounts, EvidenceItem, EvidenceSummary};
pub use judge::JudgeOutcome;
pub use opinion::FabricationOpinion;
pub use scorer::{FeatureSnapshot, ScorerResult};
pub use verdict::{AiAnalysis, HybridVerdict};
