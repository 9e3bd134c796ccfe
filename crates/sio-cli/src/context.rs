use std::sync::Arc;

use anyhow::Context;
use sio_api::CoachClient;
use sio_config::{SessionConfig, SioConfig};
use sio_session::{
    EnvToken, FileTokenStore, KeyringTokenStore, LayeredTokenStore, Session, StaticToken,
    TokenProvider, TokenStoreError,
};

use crate::cli::GlobalFlags;

/// Shared state for command handlers.
pub struct AppContext {
    pub config: SioConfig,
    /// Where `session login` writes and `session logout` clears.
    pub store: LayeredTokenStore,
    /// What every other command reads; `--token` overrides the store.
    pub tokens: Arc<dyn TokenProvider>,
    pub client: CoachClient,
}

impl AppContext {
    pub fn init(config: SioConfig, flags: &GlobalFlags) -> anyhow::Result<Self> {
        let store = token_store(&config.session).context("failed to open token storage")?;
        let tokens: Arc<dyn TokenProvider> = match &flags.token {
            Some(token) => Arc::new(StaticToken::new(token.clone())),
            None => Arc::new(store.clone()),
        };
        let client = CoachClient::from_config(&config.api, Arc::clone(&tokens))
            .context("failed to build HTTP client")?;

        tracing::debug!(base_url = client.base_url(), "app context ready");

        Ok(Self {
            config,
            store,
            tokens,
            client,
        })
    }

    /// Session view over the active token.
    pub fn session(&self) -> Session<Arc<dyn TokenProvider>> {
        Session::new(Arc::clone(&self.tokens))
    }

    /// Fail unless a decodable, unexpired token is present.
    pub fn require_login(&self) -> anyhow::Result<Session<Arc<dyn TokenProvider>>> {
        let session = self.session();
        if !session.is_logged_in() {
            anyhow::bail!("not logged in: run `sio session login`");
        }
        Ok(session)
    }
}

fn token_store(config: &SessionConfig) -> Result<LayeredTokenStore, TokenStoreError> {
    let file = match &config.credentials_file {
        Some(path) => FileTokenStore::new(path),
        None => FileTokenStore::at_default_path()?,
    };
    let store = LayeredTokenStore::new(EnvToken::new(&config.token_env_var), file);
    if config.use_keyring {
        Ok(store.with_keyring(KeyringTokenStore::new(&config.keyring_service)))
    } else {
        Ok(store)
    }
}
