use anyhow::Context;
use vera_config::VeraConfig;

/// Load `.env`, then the layered configuration.
pub fn load_config() -> anyhow::Result<VeraConfig> {
    VeraConfig::load_with_dotenv().context("failed to load vera configuration")
}

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &VeraConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &VeraConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();
    let mut warnings = Vec::new();

    if config.general.use_ai
        && !config.judge.is_configured()
        && has_env_prefix(&env_keys, "VERA_JUDGE")
    {
        warnings.push(
            "Judge API key appears unset while VERA_JUDGE* env vars exist. Use double underscores (example: VERA_JUDGE__API_KEY)."
                .to_string(),
        );
    }

    if !config.scorer.has_dataset() && has_env_prefix(&env_keys, "VERA_SCORER_DATASET") {
        warnings.push(
            "Scorer dataset appears unset while VERA_SCORER_DATASET* env vars exist. Use double underscores (example: VERA_SCORER__DATASET_PATH)."
                .to_string(),
        );
    }

    warnings
}

fn has_env_prefix(keys: &[String], prefix: &str) -> bool {
    keys.iter().any(|key| key.starts_with(prefix))
}
