use anyhow::Context;
use serde::Serialize;
use sio_core::Role;
use sio_session::{SystemClock, TokenSink, decode_claims, is_expired};

use super::SessionSummary;
use crate::cli::GlobalFlags;
use crate::cli::subcommands::LoginArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct LoginResponse {
    stored: bool,
    #[serde(flatten)]
    summary: SessionSummary,
    note: Option<String>,
}

/// Handle `sio session login`.
pub async fn handle(args: &LoginArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let token = match (&args.with_token, &args.email, &args.password) {
        (Some(token), _, _) => token.trim().to_string(),
        (None, Some(email), Some(password)) => ctx
            .client
            .login(email, password)
            .await
            .context("login failed")?,
        _ => anyhow::bail!("provide --email and --password, or --with-token"),
    };

    let claims = decode_claims(&token).context("not a decodable bearer token")?;
    if is_expired(Some(&claims), &SystemClock) {
        anyhow::bail!("token is already expired");
    }

    ctx.store.store(&token).context("failed to store token")?;
    tracing::info!(subject = %claims.subject, "session stored");

    let summary = SessionSummary::from_claims(&claims);
    let note = matches!(summary.role, Role::Unknown).then(|| {
        String::from("unrecognized role: student and admin features will be refused")
    });

    output(
        &LoginResponse {
            stored: true,
            summary,
            note,
        },
        flags.format,
    )
}
