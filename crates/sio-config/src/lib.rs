//! # sio-config
//!
//! Layered configuration loading for the SoundItOut client using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`SOUNDITOUT_*` prefix, `__` as separator)
//! 2. Project-level `.sounditout/config.toml`
//! 3. User-level `~/.config/sounditout/config.toml`
//! 4. Built-in defaults
//!
//! Figment maps `SOUNDITOUT_API__BASE_URL` -> `api.base_url`,
//! `SOUNDITOUT_SESSION__USE_KEYRING` -> `session.use_keyring`, etc.
//!
//! ```no_run
//! use sio_config::SioConfig;
//!
//! let config = SioConfig::load_with_dotenv().expect("config");
//! println!("backend: {}", config.api.base_url());
//! ```

mod api;
mod error;
mod general;
mod session;

pub use api::ApiConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;
pub use session::SessionConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SioConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl SioConfig {
    /// Load configuration from all sources (TOML files + environment variables)
    /// and validate it.
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source cannot be parsed or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.api.validate()?;
        Ok(config)
    }

    /// Load `.env` from the current directory (if any), then [`Self::load`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source cannot be parsed or a value is invalid.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or layer providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        let local_path = PathBuf::from(".sounditout/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("SOUNDITOUT_").split("__"))
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("sounditout").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = SioConfig::default();
        assert!(config.api.validate().is_ok());
        assert!(config.session.use_keyring);
        assert_eq!(config.general.default_search_k, 5);
    }
}
