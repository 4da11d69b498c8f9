use anyhow::Context;
use serde::Serialize;
use vera_scorer::{SyntheticGenerator, corpus};

use crate::cli::GlobalFlags;
use crate::cli::DatasetCommands;
use crate::cli::root_commands::GenerateArgs;
use crate::output::output;

#[derive(Debug, Serialize)]
struct GenerateResponse {
    path: String,
    samples: usize,
    fake: usize,
    real: usize,
    seed: u64,
}

/// Handle `vera dataset`.
pub fn handle(action: &DatasetCommands, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        DatasetCommands::Generate(args) => output(&generate(args)?, flags.format),
    }
}

fn generate(args: &GenerateArgs) -> anyhow::Result<GenerateResponse> {
    if args.fake == 0 || args.real == 0 {
        anyhow::bail!("a trainable dataset needs at least one fake and one real example");
    }

    let examples = SyntheticGenerator::new(args.seed).generate(args.fake, args.real);
    if let Some(parent) = args.out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    corpus::save_jsonl(&args.out, &examples).context("failed to write dataset")?;
    tracing::info!(path = %args.out.display(), samples = examples.len(), "dataset written");

    Ok(GenerateResponse {
        path: args.out.display().to_string(),
        samples: examples.len(),
        fake: args.fake,
        real: args.real,
        seed: args.seed,
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use vera_scorer::corpus::{LABEL_FAKE, load_jsonl};

    use super::*;

    #[test]
    fn writes_loadable_corpus() {
        let dir = tempfile::tempdir().unwrap();
        let args = GenerateArgs {
            out: dir.path().join("nested").join("corpus.jsonl"),
            fake: 7,
            real: 5,
            seed: 9,
        };

        let response = generate(&args).unwrap();
        assert_eq!(response.samples, 12);

        let loaded = load_jsonl(&args.out).unwrap();
        assert_eq!(loaded.len(), 12);
        assert_eq!(loaded.iter().filter(|e| e.label == LABEL_FAKE).count(), 7);
        assert!(corpus::validate(&loaded).is_ok());
    }

    #[test]
    fn rejects_single_class_request() {
        let dir = tempfile::tempdir().unwrap();
        let args = GenerateArgs {
            out: dir.path().join("corpus.jsonl"),
            fake: 3,
            real: 0,
            seed: 1,
        };
        assert!(generate(&args).is_err());
        assert!(!args.out.exists());
    }
}
