//! Token storage configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_keyring_service() -> String {
    "sounditout-cli".to_string()
}

fn default_token_env_var() -> String {
    "SOUNDITOUT_AUTH__TOKEN".to_string()
}

const fn default_use_keyring() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SessionConfig {
    /// Whether the OS keychain is consulted before the env var and file.
    #[serde(default = "default_use_keyring")]
    pub use_keyring: bool,

    /// Keychain service name (override in tests to avoid real credentials).
    #[serde(default = "default_keyring_service")]
    pub keyring_service: String,

    /// Environment variable holding a token for CI/headless use.
    #[serde(default = "default_token_env_var")]
    pub token_env_var: String,

    /// Credentials file. `None` = `~/.sounditout/credentials`.
    #[serde(default)]
    pub credentials_file: Option<PathBuf>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            use_keyring: default_use_keyring(),
            keyring_service: default_keyring_service(),
            token_env_var: default_token_env_var(),
            credentials_file: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = SessionConfig::default();
        assert!(config.use_keyring);
        assert_eq!(config.keyring_service, "sounditout-cli");
        assert_eq!(config.token_env_var, "SOUNDITOUT_AUTH__TOKEN");
        assert!(config.credentials_file.is_none());
    }
}
