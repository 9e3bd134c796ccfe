use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::Role;

/// Lightweight identity of the signed-in user for cross-crate passing.
///
/// Produced by `sio-session`, consumed by `sio-cli`. Contains only data
/// fields, no token handling.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SessionIdentity {
    /// Token subject (the account email).
    pub email: String,
    pub role: Role,
    /// Expiry as epoch seconds. `None` = the token never expires.
    pub expires_at: Option<i64>,
}
