//! Analysis pipeline: validate → lazy-train → score → judge → reconcile.
//!
//! The judge call and the optional web corroboration run concurrently; the
//! scorer always runs first so a verdict exists even when both fail.

use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::{DateTime, Utc};
use serde::Serialize;
use vera_config::ScorerConfig;
use vera_core::input::validate_news_text;
use vera_core::{AnalysisMode, HybridVerdict, JudgeOutcome, Prediction, ScorerResult};
use vera_evidence::VerificationOutcome;
use vera_reconcile::{reconcile, reconcile_scorer_only};
use vera_scorer::{LabeledText, ScorerError, TrainingReport, corpus};

use crate::context::AppContext;

/// Label for the built-in seed corpus in reports.
pub const BUILTIN_DATASET: &str = "builtin";

/// Training corpus plus a human-readable description of where it came from.
pub struct LoadedCorpus {
    pub examples: Vec<LabeledText>,
    pub source: String,
}

/// Load the training corpus: explicit path, else `scorer.dataset_path`, else
/// the built-in seed corpus.
pub fn load_corpus(
    config: &ScorerConfig,
    dataset: Option<&Path>,
) -> Result<LoadedCorpus, ScorerError> {
    let path = dataset
        .map(Path::to_path_buf)
        .or_else(|| config.has_dataset().then(|| PathBuf::from(&config.dataset_path)));

    match path {
        Some(path) => Ok(LoadedCorpus {
            examples: corpus::load_jsonl(&path)?,
            source: path.display().to_string(),
        }),
        None => Ok(LoadedCorpus {
            examples: corpus::builtin_corpus(),
            source: BUILTIN_DATASET.to_string(),
        }),
    }
}

/// Train the scorer on the configured corpus unless a model already exists.
pub fn ensure_scorer(ctx: &AppContext) -> anyhow::Result<Option<TrainingReport>> {
    ctx.scorer
        .ensure_trained(|| load_corpus(&ctx.config.scorer, None).map(|loaded| loaded.examples))
        .context("failed to train scorer")
}

/// Per-call switches for [`analyze`].
#[derive(Clone, Copy, Debug)]
pub struct AnalyzeOptions {
    pub use_ai: bool,
    pub verify: bool,
}

/// `HybridVerdict` plus request metadata and the optional evidence report.
#[derive(Debug, Serialize)]
pub struct AnalysisReport {
    pub analyzed_at: DateTime<Utc>,
    pub text_length: usize,
    #[serde(flatten)]
    pub verdict: HybridVerdict,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub web_verification: Option<VerificationOutcome>,
}

fn judge_enabled(ctx: &AppContext, requested: bool) -> bool {
    requested && ctx.config.general.use_ai
}

fn merge(scorer: ScorerResult, judged: Option<JudgeOutcome>) -> HybridVerdict {
    match judged {
        Some(outcome) => reconcile(scorer, outcome),
        None => reconcile_scorer_only(scorer),
    }
}

/// Analyze one text.
pub async fn analyze(
    ctx: &AppContext,
    text: &str,
    options: AnalyzeOptions,
) -> anyhow::Result<AnalysisReport> {
    let text = validate_news_text(text, ctx.config.general.max_text_length)?;
    ensure_scorer(ctx)?;
    let scored = ctx.scorer.score(text)?;

    let use_ai = judge_enabled(ctx, options.use_ai);
    let judge = async {
        if use_ai {
            Some(ctx.judge.evaluate(text, ctx.config.judge.max_chars).await)
        } else {
            None
        }
    };
    let evidence = async {
        if options.verify {
            Some(ctx.verifier.verify_outcome(text).await)
        } else {
            None
        }
    };
    let (judged, web_verification) = tokio::join!(judge, evidence);

    let verdict = merge(scored, judged);
    tracing::debug!(
        prediction = %verdict.prediction,
        mode = %verdict.analysis_mode,
        hybrid_score = verdict.hybrid_score,
        "analysis complete"
    );

    Ok(AnalysisReport {
        analyzed_at: Utc::now(),
        text_length: text.chars().count(),
        verdict,
        web_verification,
    })
}

/// Validate one text and run web corroboration only.
pub async fn verify(ctx: &AppContext, text: &str) -> anyhow::Result<VerificationOutcome> {
    let text = validate_news_text(text, ctx.config.general.max_text_length)?;
    Ok(ctx.verifier.verify_outcome(text).await)
}

/// One line of a batch run. Invalid lines carry `error` instead of a verdict.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchEntry {
    pub line: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prediction: Option<Prediction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis_mode: Option<AnalysisMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl BatchEntry {
    fn from_verdict(line: usize, verdict: &HybridVerdict) -> Self {
        Self {
            line,
            prediction: Some(verdict.prediction),
            confidence: Some(verdict.confidence),
            analysis_mode: Some(verdict.analysis_mode),
            error: None,
        }
    }

    const fn rejected(line: usize, error: String) -> Self {
        Self {
            line,
            prediction: None,
            confidence: None,
            analysis_mode: None,
            error: Some(error),
        }
    }
}

/// Analyze many texts in order. Judge calls are sequential with the
/// configured inter-call delay; `on_scored` fires once per input line.
pub async fn analyze_batch<F>(
    ctx: &AppContext,
    lines: &[String],
    use_ai: bool,
    on_scored: F,
) -> anyhow::Result<Vec<BatchEntry>>
where
    F: Fn(),
{
    ensure_scorer(ctx)?;

    let mut entries = Vec::with_capacity(lines.len());
    let mut accepted: Vec<(usize, &str, ScorerResult)> = Vec::new();
    for (index, raw) in lines.iter().enumerate() {
        let line = index + 1;
        match validate_news_text(raw, ctx.config.general.max_text_length) {
            Ok(text) => {
                let scored = ctx.scorer.score(text)?;
                accepted.push((line, text, scored));
            }
            Err(e) => entries.push(BatchEntry::rejected(line, e.to_string())),
        }
        on_scored();
    }

    let judged: Vec<Option<JudgeOutcome>> = if judge_enabled(ctx, use_ai) {
        let texts: Vec<&str> = accepted.iter().map(|(_, text, _)| *text).collect();
        ctx.judge
            .evaluate_batch(&texts, ctx.config.judge.max_chars)
            .await
            .into_iter()
            .map(Some)
            .collect()
    } else {
        vec![None; accepted.len()]
    };

    for ((line, _, scored), outcome) in accepted.into_iter().zip(judged) {
        entries.push(BatchEntry::from_verdict(line, &merge(scored, outcome)));
    }
    entries.sort_by_key(|entry| entry.line);
    Ok(entries)
}
