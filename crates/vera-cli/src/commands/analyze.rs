use crate::cli::GlobalFlags;
use crate::cli::root_commands::AnalyzeArgs;
use crate::commands::shared::input::read_text;
use crate::context::AppContext;
use crate::output::output;
use crate::pipeline::{self, AnalyzeOptions};
use crate::progress::Progress;

/// Handle `vera analyze`.
pub async fn handle(args: &AnalyzeArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let text = read_text(&args.input)?;
    let options = AnalyzeOptions {
        use_ai: !args.no_ai,
        verify: args.verify,
    };

    let progress = Progress::spinner("Analyzing news text");
    let report = pipeline::analyze(ctx, &text, options).await;
    progress.finish_clear();

    output(&report?, flags.format)
}
