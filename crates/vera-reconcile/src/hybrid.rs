//! Weighted merge of scorer and judge signals into a [`HybridVerdict`].
//!
//! ```text
//! judge = Opinion     → hybrid = 0.3 · ml_conf + 0.7 · credibility/100
//!                       prediction = FAKE iff hybrid < 0.5
//! judge = Unavailable → scorer only: prediction = scorer label,
//!         or Failed     hybrid = confidence = ml_conf
//! ```
//!
//! `ml_conf` is the scorer's confidence in its own top class, not the raw
//! fabrication probability.

use vera_core::{
    AiAnalysis, AnalysisMode, FabricationOpinion, HybridVerdict, JudgeOutcome, Prediction,
    ScorerResult,
};

/// Weight of the scorer's confidence in the hybrid score.
pub const ML_WEIGHT: f64 = 0.3;

/// Weight of the judge's credibility in the hybrid score.
pub const AI_WEIGHT: f64 = 0.7;

/// Hybrid scores strictly below this are `FAKE`; the threshold itself is `REAL`.
pub const DECISION_THRESHOLD: f64 = 0.5;

/// Recommendation attached to every scorer-only verdict.
pub const ML_ONLY_RECOMMENDATION: &str = "Use ML prediction only";

const DISABLED_REASON: &str = "AI analysis disabled";

/// Map a hybrid score to a prediction. Strict `<` for `FAKE`.
#[must_use]
pub fn prediction_for_score(hybrid_score: f64) -> Prediction {
    if hybrid_score < DECISION_THRESHOLD {
        Prediction::Fake
    } else {
        Prediction::Real
    }
}

/// Reconcile a scorer result with a judge outcome.
///
/// Never fails: judge unavailability and judge failure both degrade to a
/// scorer-only verdict.
#[must_use]
pub fn reconcile(scorer: ScorerResult, judge: JudgeOutcome) -> HybridVerdict {
    match judge {
        JudgeOutcome::Opinion { opinion, .. } => weigh(scorer, opinion),
        JudgeOutcome::Unavailable { reason } => {
            tracing::debug!(%reason, "judge unavailable; using scorer only");
            scorer_only(scorer, reason)
        }
        JudgeOutcome::Failed { reason } => {
            tracing::debug!(%reason, "judge failed; using scorer only");
            scorer_only(scorer, reason)
        }
    }
}

/// Scorer-only verdict for callers that opted out of the judge.
#[must_use]
pub fn reconcile_scorer_only(scorer: ScorerResult) -> HybridVerdict {
    scorer_only(scorer, DISABLED_REASON.to_string())
}

fn ml_confidence(scorer: &ScorerResult) -> f64 {
    scorer.confidence().clamp(0.0, 1.0)
}

fn weigh(scorer: ScorerResult, opinion: FabricationOpinion) -> HybridVerdict {
    let ml_conf = ml_confidence(&scorer);
    let ai_conf = opinion.credibility_fraction();
    let hybrid_score = (ML_WEIGHT * ml_conf + AI_WEIGHT * ai_conf).clamp(0.0, 1.0);
    let prediction = prediction_for_score(hybrid_score);

    tracing::debug!(
        ml_conf,
        ai_conf,
        hybrid_score,
        %prediction,
        "reconciled scorer and judge"
    );

    HybridVerdict {
        prediction,
        confidence: hybrid_score,
        hybrid_score,
        analysis_mode: AnalysisMode::Hybrid,
        red_flags: opinion.red_flags.clone(),
        green_flags: opinion.green_flags.clone(),
        recommendation: opinion.recommendation.clone(),
        ml_prediction: scorer,
        ai_analysis: AiAnalysis::Available(opinion),
    }
}

fn scorer_only(scorer: ScorerResult, reason: String) -> HybridVerdict {
    let ml_conf = ml_confidence(&scorer);
    HybridVerdict {
        prediction: scorer.label(),
        confidence: ml_conf,
        hybrid_score: ml_conf,
        analysis_mode: AnalysisMode::MlOnly,
        red_flags: Vec::new(),
        green_flags: Vec::new(),
        recommendation: ML_ONLY_RECOMMENDATION.to_string(),
        ml_prediction: scorer,
        ai_analysis: AiAnalysis::Unavailable { error: reason },
    }
}
