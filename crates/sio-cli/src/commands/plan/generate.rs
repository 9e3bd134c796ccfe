use anyhow::Context;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::GenerateArgs;
use crate::context::AppContext;
use crate::output::output_plan;

/// Handle `sio plan generate`.
pub async fn handle(
    args: &GenerateArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    ctx.require_login()?;
    let goal = args.goal();

    let plan = ctx
        .client
        .generate_study_plan(&goal)
        .await
        .context("failed to generate study plan")?;

    tracing::debug!(tasks = plan.tasks.len(), "study plan received");
    output_plan(&plan, flags.format)
}
