use anyhow::Context;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Local role check. The backend enforces the same rule and remains the
/// authority; this only saves a round trip.
fn require_admin(ctx: &AppContext) -> anyhow::Result<()> {
    let session = ctx.require_login()?;
    if !session.is_admin() {
        anyhow::bail!("admin role required (current role: {})", session.role());
    }
    Ok(())
}

/// Handle `sio admin reindex`.
pub async fn reindex(student_id: i64, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    require_admin(ctx)?;
    let response = ctx
        .client
        .reindex_student(student_id)
        .await
        .with_context(|| format!("failed to reindex student {student_id}"))?;
    output(&response, flags.format)
}

/// Handle `sio admin purge-and-reindex`.
pub async fn purge_and_reindex(
    student_id: i64,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    require_admin(ctx)?;
    let response = ctx
        .client
        .purge_and_reindex_student(student_id)
        .await
        .with_context(|| format!("failed to purge and reindex student {student_id}"))?;
    tracing::info!(
        student_id,
        deleted = response.deleted,
        reindexed = response.reindexed,
        "purge and reindex finished"
    );
    output(&response, flags.format)
}
