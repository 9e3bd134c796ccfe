use std::path::PathBuf;

use thiserror::Error;

/// Why a bearer token could not be read as a claim set.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("token is empty")]
    Empty,

    #[error("invalid token format: expected 3 segments, found {segments}")]
    Malformed { segments: usize },

    #[error("claims segment is not base64url: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("claims segment is not a valid claim set: {0}")]
    Claims(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum TokenStoreError {
    #[error("keyring error: {0}")]
    Keyring(String),

    #[error("{action} {}: {source}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("home directory not found, cannot locate credentials")]
    NoHomeDir,
}
