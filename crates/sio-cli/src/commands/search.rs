use anyhow::Context;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::SearchArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `sio search`.
pub async fn handle(args: &SearchArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.require_login()?;
    let k = args.k.unwrap_or(ctx.config.general.default_search_k);

    let response = ctx
        .client
        .search(&args.query, k)
        .await
        .context("search failed")?;

    if flags.format == crate::cli::OutputFormat::Text && response.results.is_empty() {
        println!("No matching reports.");
        return Ok(());
    }
    output(&response.results, flags.format)
}
