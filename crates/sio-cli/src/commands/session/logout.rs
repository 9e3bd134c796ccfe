use anyhow::Context;
use serde::Serialize;
use sio_session::TokenSink;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct LogoutResponse {
    cleared: bool,
    note: Option<String>,
}

/// Handle `sio session logout`.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.store.clear().context("failed to clear stored token")?;

    // An env var token outlives logout; say so instead of pretending.
    let note = ctx.store.detect_source().map(|source| {
        format!("a token is still available from the {source} tier; remove it to log out fully")
    });

    output(
        &LogoutResponse {
            cleared: true,
            note,
        },
        flags.format,
    )
}
