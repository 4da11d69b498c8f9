use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Analyze(args) => commands::analyze::handle(&args, ctx, flags).await,
        Commands::Verify(args) => commands::verify::handle(&args, ctx, flags).await,
        Commands::Train(args) => commands::train::handle(&args, ctx, flags),
        Commands::Batch(args) => commands::batch::handle(&args, ctx, flags).await,
        Commands::Status => commands::status::handle(ctx, flags),
        Commands::Dataset { action } => commands::dataset::handle(&action, flags),
    }
}
