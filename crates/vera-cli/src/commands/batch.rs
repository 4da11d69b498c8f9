use crate::cli::GlobalFlags;
use crate::cli::root_commands::BatchArgs;
use crate::commands::shared::input::read_lines;
use crate::context::AppContext;
use crate::output::output;
use crate::pipeline;
use crate::progress::Progress;

/// Handle `vera batch`.
pub async fn handle(args: &BatchArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let lines = read_lines(&args.file)?;
    if lines.is_empty() {
        anyhow::bail!("batch file {} contains no news texts", args.file.display());
    }

    let progress = Progress::bar(lines.len() as u64, "scoring");
    let entries = pipeline::analyze_batch(ctx, &lines, !args.no_ai, || progress.inc(1)).await;
    progress.finish_clear();

    output(&entries?, flags.format)
}
