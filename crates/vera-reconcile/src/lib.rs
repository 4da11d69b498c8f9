//! # vera-reconcile
//!
//! The reconciliation engine. Two independent, composable operations:
//!
//! - [`reconcile`]: merge a [`ScorerResult`](vera_core::ScorerResult) and a
//!   [`JudgeOutcome`](vera_core::JudgeOutcome) into one weighted
//!   [`HybridVerdict`](vera_core::HybridVerdict).
//! - [`summarize`]: merge annotated evidence items into an
//!   [`EvidenceSummary`](vera_core::EvidenceSummary).
//!
//! The engine depends only on the shapes in `vera-core`, never on the
//! adapters that produce them. Both operations are pure and never fail.
//!
//! Per-item annotation (domain extraction, trust classification, stance
//! inference) lives here too, so evidence adapters only supply raw
//! `{title, snippet, url}` records.

pub mod corroboration;
pub mod domain;
pub mod hybrid;
pub mod stance;

pub use corroboration::{BASELINE_CREDIBILITY, annotate, summarize};
pub use domain::{DomainPolicy, extract_domain};
pub use hybrid::{
    AI_WEIGHT, DECISION_THRESHOLD, ML_ONLY_RECOMMENDATION, ML_WEIGHT, prediction_for_score,
    reconcile, reconcile_scorer_only,
};
pub use stance::infer_stance;
