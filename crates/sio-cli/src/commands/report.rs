use anyhow::Context;
use serde::Serialize;
use sio_core::responses::UpsertEmbeddingRequest;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct EmbedResponse {
    report_id: i64,
    embedded: bool,
}

/// Handle `sio report embed`.
pub async fn embed(
    report_id: i64,
    content: String,
    subject: Option<String>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    ctx.require_login()?;

    ctx.client
        .upsert_report_embedding(report_id, &UpsertEmbeddingRequest { subject, content })
        .await
        .with_context(|| format!("failed to embed report {report_id}"))?;

    output(
        &EmbedResponse {
            report_id,
            embedded: true,
        },
        flags.format,
    )
}
