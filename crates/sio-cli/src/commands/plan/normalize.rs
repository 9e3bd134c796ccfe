use std::io::Read as _;

use anyhow::Context;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::NormalizeArgs;
use crate::output::output_plan;

/// Handle `sio plan normalize`; works offline.
pub fn handle(args: &NormalizeArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let body = match &args.file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut body = String::new();
            std::io::stdin()
                .read_to_string(&mut body)
                .context("failed to read stdin")?;
            body
        }
    };

    let plan = sio_plan::normalize_body(&body);
    output_plan(&plan, flags.format)
}
