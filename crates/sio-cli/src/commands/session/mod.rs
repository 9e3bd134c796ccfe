pub mod login;
pub mod logout;
pub mod status;

use serde::Serialize;
use sio_core::Role;
use sio_session::BearerClaims;

/// Session facts shared by `login` and `status` output.
#[derive(Debug, Serialize)]
pub struct SessionSummary {
    pub email: Option<String>,
    pub role: Role,
    pub expires_at: Option<String>,
}

impl SessionSummary {
    pub fn from_claims(claims: &BearerClaims) -> Self {
        Self {
            email: Some(claims.subject.clone()),
            role: claims.role(),
            expires_at: claims.expires_at().map(|at| at.to_rfc3339()),
        }
    }

    pub const fn anonymous() -> Self {
        Self {
            email: None,
            role: Role::Unknown,
            expires_at: None,
        }
    }
}
