use crate::cli::GlobalFlags;
use crate::cli::root_commands::InputArgs;
use crate::commands::shared::input::read_text;
use crate::context::AppContext;
use crate::output::output;
use crate::pipeline;
use crate::progress::Progress;

/// Handle `vera verify`. A failed search is reported as an error object, not
/// a non-zero exit.
pub async fn handle(args: &InputArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let text = read_text(args)?;

    let progress = Progress::spinner("Searching the web");
    let outcome = pipeline::verify(ctx, &text).await;
    progress.finish_clear();

    output(&outcome?, flags.format)
}
