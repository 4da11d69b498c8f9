use serde::Serialize;
use vera_judge::{DEFAULT_FACT_CHECK_LIMIT, fact_check_sources};

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;
use crate::pipeline::BUILTIN_DATASET;

#[derive(Debug, Serialize)]
struct ScorerStatus {
    trained: bool,
    dataset: String,
    max_features: usize,
}

#[derive(Debug, Serialize)]
struct JudgeStatus {
    available: bool,
    enabled: bool,
    model: String,
}

#[derive(Debug, Serialize)]
struct EvidenceStatus {
    provider: String,
    max_results: usize,
    fetch_titles: bool,
}

#[derive(Debug, Serialize)]
struct StatusResponse {
    status: &'static str,
    scorer: ScorerStatus,
    judge: JudgeStatus,
    evidence: EvidenceStatus,
    capabilities: Vec<&'static str>,
    fact_check_sources: Vec<&'static str>,
}

fn collect(ctx: &AppContext) -> StatusResponse {
    let judge_enabled = ctx.config.general.use_ai && ctx.judge.is_available();

    let mut capabilities = vec!["ml_scoring"];
    if judge_enabled {
        capabilities.push("ai_judgment");
        capabilities.push("hybrid_reconciliation");
    }
    capabilities.push("web_verification");

    StatusResponse {
        status: "healthy",
        scorer: ScorerStatus {
            trained: ctx.scorer.is_trained(),
            dataset: if ctx.config.scorer.has_dataset() {
                ctx.config.scorer.dataset_path.clone()
            } else {
                BUILTIN_DATASET.to_string()
            },
            max_features: ctx.config.scorer.max_features,
        },
        judge: JudgeStatus {
            available: ctx.judge.is_available(),
            enabled: ctx.config.general.use_ai,
            model: ctx.judge.model().to_string(),
        },
        evidence: EvidenceStatus {
            provider: ctx.verifier.provider_name().to_string(),
            max_results: ctx.config.evidence.max_results,
            fetch_titles: ctx.config.evidence.fetch_titles,
        },
        capabilities,
        fact_check_sources: fact_check_sources(DEFAULT_FACT_CHECK_LIMIT).to_vec(),
    }
}

/// Handle `vera status`. Reports readiness without training or calling out.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&collect(ctx), flags.format)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use vera_config::VeraConfig;

    use super::collect;
    use crate::context::AppContext;

    #[test]
    fn default_config_is_scorer_only() {
        let mut config = VeraConfig::default();
        config.judge.api_key.clear();
        let ctx = AppContext::init(config).unwrap();

        let status = collect(&ctx);
        assert!(!status.scorer.trained);
        assert_eq!(status.scorer.dataset, "builtin");
        assert!(!status.judge.available);
        assert_eq!(status.judge.model, "gpt-3.5-turbo");
        assert_eq!(status.evidence.provider, "duckduckgo");
        assert_eq!(status.capabilities, vec!["ml_scoring", "web_verification"]);
        assert_eq!(status.fact_check_sources.len(), 5);
        assert_eq!(status.fact_check_sources[0], "Snopes.com");
    }

    #[test]
    fn configured_judge_adds_capabilities() {
        let mut config = VeraConfig::default();
        config.judge.api_key = "sk-test".to_string();
        let ctx = AppContext::init(config).unwrap();

        let status = collect(&ctx);
        assert!(status.judge.available);
        assert!(status.capabilities.contains(&"ai_judgment"));
    }
}
