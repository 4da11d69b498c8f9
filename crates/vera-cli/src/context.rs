use anyhow::Context;
use vera_config::{ScorerConfig, VeraConfig};
use vera_evidence::EvidenceVerifier;
use vera_judge::Judge;
use vera_scorer::{Scorer, TrainingParams};

/// Shared adapters built once at startup.
pub struct AppContext {
    pub config: VeraConfig,
    pub scorer: Scorer,
    pub judge: Judge,
    pub verifier: EvidenceVerifier,
}

impl AppContext {
    /// Build every adapter from configuration. The scorer starts untrained.
    pub fn init(config: VeraConfig) -> anyhow::Result<Self> {
        let scorer = Scorer::new(training_params(&config.scorer));
        let judge = Judge::from_config(&config.judge).context("failed to build judge client")?;
        let verifier = EvidenceVerifier::from_config(&config.evidence)
            .context("failed to build evidence search client")?;

        tracing::debug!(
            judge_available = judge.is_available(),
            provider = verifier.provider_name(),
            "application context ready"
        );

        Ok(Self {
            config,
            scorer,
            judge,
            verifier,
        })
    }
}

pub const fn training_params(config: &ScorerConfig) -> TrainingParams {
    TrainingParams {
        max_features: config.max_features,
        epochs: config.epochs,
        learning_rate: config.learning_rate,
        l2: config.l2,
    }
}
