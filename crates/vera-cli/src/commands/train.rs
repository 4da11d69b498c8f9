use anyhow::Context;
use serde::Serialize;
use vera_scorer::TrainingReport;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::TrainArgs;
use crate::context::AppContext;
use crate::output::output;
use crate::pipeline::load_corpus;
use crate::progress::Progress;

#[derive(Debug, Serialize)]
struct TrainResponse {
    dataset: String,
    #[serde(flatten)]
    report: TrainingReport,
}

/// Handle `vera train`.
pub fn handle(args: &TrainArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let loaded = load_corpus(&ctx.config.scorer, args.dataset.as_deref())
        .context("failed to load training dataset")?;

    let progress = Progress::spinner(&format!("Training on {} examples", loaded.examples.len()));
    let report = ctx.scorer.train(&loaded.examples);
    progress.finish_clear();

    let report = report.context("failed to train scorer")?;
    output(
        &TrainResponse {
            dataset: loaded.source,
            report,
        },
        flags.format,
    )
}
