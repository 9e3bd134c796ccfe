use serde::Serialize;
use sio_session::{SystemClock, is_expired};

use super::SessionSummary;
use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct SessionStatusResponse {
    logged_in: bool,
    #[serde(flatten)]
    summary: SessionSummary,
    token_source: Option<String>,
    note: Option<String>,
}

/// Handle `sio session status`.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let token_source = if flags.token.is_some() {
        Some(String::from("flag"))
    } else {
        ctx.store.detect_source().map(|source| source.to_string())
    };

    let response = match ctx.session().try_claims() {
        Ok(Some(claims)) => {
            let expired = is_expired(Some(&claims), &SystemClock);
            SessionStatusResponse {
                logged_in: !expired,
                summary: SessionSummary::from_claims(&claims),
                token_source,
                note: expired.then(|| String::from("token expired: run `sio session login`")),
            }
        }
        Ok(None) => SessionStatusResponse {
            logged_in: false,
            summary: SessionSummary::anonymous(),
            token_source,
            note: Some(String::from("no token stored: run `sio session login`")),
        },
        Err(error) => SessionStatusResponse {
            logged_in: false,
            summary: SessionSummary::anonymous(),
            token_source,
            note: Some(format!("stored token could not be decoded: {error}")),
        },
    };

    output(&response, flags.format)
}
