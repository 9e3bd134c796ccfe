//! Where the current session token comes from.
//!
//! Session predicates never reach into global state: they are handed a
//! [`TokenProvider`]. The login and logout flows write through [`TokenSink`].

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::TokenStoreError;

pub const DEFAULT_KEYRING_SERVICE: &str = "sounditout-cli";
pub const DEFAULT_TOKEN_ENV_VAR: &str = "SOUNDITOUT_AUTH__TOKEN";
const KEYRING_USER: &str = "token";
const CREDENTIALS_DIR: &str = ".sounditout";
const CREDENTIALS_FILE_NAME: &str = "credentials";

/// Read access to the current bearer token.
pub trait TokenProvider: Send + Sync {
    /// The stored token, or `None` if nothing (or only whitespace) is stored.
    fn current_token(&self) -> Option<String>;
}

/// Write access used by login/logout.
pub trait TokenSink {
    /// Persist `token`, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns [`TokenStoreError`] if the backing store cannot be written.
    fn store(&self, token: &str) -> Result<(), TokenStoreError>;

    /// Remove the stored token. Clearing an empty store is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`TokenStoreError`] if the backing store cannot be modified.
    fn clear(&self) -> Result<(), TokenStoreError>;
}

impl<T: TokenProvider + ?Sized> TokenProvider for &T {
    fn current_token(&self) -> Option<String> {
        (**self).current_token()
    }
}

impl<T: TokenProvider + ?Sized> TokenProvider for Box<T> {
    fn current_token(&self) -> Option<String> {
        (**self).current_token()
    }
}

impl<T: TokenProvider + ?Sized> TokenProvider for Arc<T> {
    fn current_token(&self) -> Option<String> {
        (**self).current_token()
    }
}

fn non_blank(token: &str) -> Option<String> {
    let token = token.trim();
    (!token.is_empty()).then(|| token.to_string())
}

// --- Static ---

/// A fixed token, e.g. from a `--token` flag or a test.
#[derive(Debug, Clone, Default)]
pub struct StaticToken(Option<String>);

impl StaticToken {
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(Some(token.into()))
    }

    #[must_use]
    pub const fn none() -> Self {
        Self(None)
    }
}

impl TokenProvider for StaticToken {
    fn current_token(&self) -> Option<String> {
        self.0.as_deref().and_then(non_blank)
    }
}

// --- Environment ---

/// Token read from an environment variable on every call.
#[derive(Debug, Clone)]
pub struct EnvToken {
    var: String,
}

impl EnvToken {
    #[must_use]
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }

    #[must_use]
    pub fn var(&self) -> &str {
        &self.var
    }
}

impl Default for EnvToken {
    fn default() -> Self {
        Self::new(DEFAULT_TOKEN_ENV_VAR)
    }
}

impl TokenProvider for EnvToken {
    fn current_token(&self) -> Option<String> {
        std::env::var(&self.var).ok().as_deref().and_then(non_blank)
    }
}

// --- File ---

/// Token kept in a plain credentials file (0600 on Unix).
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `~/.sounditout/credentials`.
    ///
    /// # Errors
    ///
    /// Returns [`TokenStoreError::NoHomeDir`] if the home directory is unknown.
    pub fn at_default_path() -> Result<Self, TokenStoreError> {
        dirs::home_dir()
            .map(|home| Self::new(home.join(CREDENTIALS_DIR).join(CREDENTIALS_FILE_NAME)))
            .ok_or(TokenStoreError::NoHomeDir)
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TokenProvider for FileTokenStore {
    fn current_token(&self) -> Option<String> {
        fs::read_to_string(&self.path)
            .ok()
            .as_deref()
            .and_then(non_blank)
    }
}

impl TokenSink for FileTokenStore {
    fn store(&self, token: &str) -> Result<(), TokenStoreError> {
        let io_err = |action: &'static str, path: &Path| {
            let path = path.to_path_buf();
            move |source| TokenStoreError::Io {
                action,
                path,
                source,
            }
        };

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(io_err("mkdir", parent))?;
            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                if let Err(e) = fs::set_permissions(parent, fs::Permissions::from_mode(0o700)) {
                    tracing::warn!("failed to chmod 0700 {}: {e}", parent.display());
                }
            }
        }
        fs::write(&self.path, token).map_err(io_err("write", &self.path))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&self.path, fs::Permissions::from_mode(0o600))
                .map_err(io_err("chmod", &self.path))?;
        }

        Ok(())
    }

    fn clear(&self) -> Result<(), TokenStoreError> {
        if self.path.exists() {
            fs::remove_file(&self.path).map_err(|source| TokenStoreError::Io {
                action: "delete",
                path: self.path.clone(),
                source,
            })?;
        }
        Ok(())
    }
}

// --- Keyring ---

/// Token kept in the OS keychain.
#[derive(Debug, Clone)]
pub struct KeyringTokenStore {
    service: String,
}

impl KeyringTokenStore {
    #[must_use]
    pub fn new(service: impl Into<String>) -> Self {
        Self {
            service: service.into(),
        }
    }

    fn entry(&self) -> Result<keyring::Entry, TokenStoreError> {
        keyring::Entry::new(&self.service, KEYRING_USER)
            .map_err(|e| TokenStoreError::Keyring(e.to_string()))
    }
}

impl Default for KeyringTokenStore {
    fn default() -> Self {
        Self::new(DEFAULT_KEYRING_SERVICE)
    }
}

impl TokenProvider for KeyringTokenStore {
    fn current_token(&self) -> Option<String> {
        let password = self.entry().ok()?.get_password().ok()?;
        non_blank(&password)
    }
}

impl TokenSink for KeyringTokenStore {
    /// Write the token, then read it back through a fresh entry.
    ///
    /// Backends that accept the write but do not persist it (the in-memory
    /// mock credential used when no platform store is compiled in) are
    /// reported as [`TokenStoreError::Keyring`].
    fn store(&self, token: &str) -> Result<(), TokenStoreError> {
        self.entry()?
            .set_password(token)
            .map_err(|e| TokenStoreError::Keyring(e.to_string()))?;
        if self.current_token().as_deref() == non_blank(token).as_deref() {
            Ok(())
        } else {
            Err(TokenStoreError::Keyring(String::from(
                "token did not persist in the keyring",
            )))
        }
    }

    fn clear(&self) -> Result<(), TokenStoreError> {
        match self.entry()?.delete_credential() {
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(e) => Err(TokenStoreError::Keyring(e.to_string())),
        }
    }
}

// --- Layered ---

/// Which tier of a [`LayeredTokenStore`] supplied the token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenSource {
    Keyring,
    Env,
    File,
}

impl TokenSource {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Keyring => "keyring",
            Self::Env => "env",
            Self::File => "file",
        }
    }
}

impl fmt::Display for TokenSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Keyring, then environment variable, then credentials file.
///
/// The first tier holding a non-blank token wins. Writes go to the keyring
/// and fall back to the file when the keyring is unavailable.
#[derive(Debug, Clone)]
pub struct LayeredTokenStore {
    keyring: Option<KeyringTokenStore>,
    env: EnvToken,
    file: FileTokenStore,
}

impl LayeredTokenStore {
    /// A store without a keyring tier.
    #[must_use]
    pub const fn new(env: EnvToken, file: FileTokenStore) -> Self {
        Self {
            keyring: None,
            env,
            file,
        }
    }

    #[must_use]
    pub fn with_keyring(mut self, keyring: KeyringTokenStore) -> Self {
        self.keyring = Some(keyring);
        self
    }

    /// Default keyring service, default env var, `~/.sounditout/credentials`.
    ///
    /// # Errors
    ///
    /// Returns [`TokenStoreError::NoHomeDir`] if the home directory is unknown.
    pub fn with_defaults() -> Result<Self, TokenStoreError> {
        Ok(Self::new(EnvToken::default(), FileTokenStore::at_default_path()?)
            .with_keyring(KeyringTokenStore::default()))
    }

    /// Detect which tier the current token comes from (for status display).
    #[must_use]
    pub fn detect_source(&self) -> Option<TokenSource> {
        self.resolve().map(|(source, _)| source)
    }

    fn resolve(&self) -> Option<(TokenSource, String)> {
        if let Some(token) = self.keyring.as_ref().and_then(TokenProvider::current_token) {
            return Some((TokenSource::Keyring, token));
        }
        if let Some(token) = self.env.current_token() {
            return Some((TokenSource::Env, token));
        }
        self.file
            .current_token()
            .map(|token| (TokenSource::File, token))
    }
}

impl TokenProvider for LayeredTokenStore {
    fn current_token(&self) -> Option<String> {
        self.resolve().map(|(_, token)| token)
    }
}

impl TokenSink for LayeredTokenStore {
    fn store(&self, token: &str) -> Result<(), TokenStoreError> {
        if let Some(keyring) = &self.keyring {
            match keyring.store(token) {
                Ok(()) => return Ok(()),
                Err(error) => {
                    tracing::warn!(%error, "keyring store failed; falling back to file");
                }
            }
        }
        self.file.store(token)
    }

    fn clear(&self) -> Result<(), TokenStoreError> {
        if let Some(keyring) = &self.keyring
            && let Err(error) = keyring.clear()
        {
            tracing::warn!(%error, "failed to clear keyring entry");
        }
        self.file.clear()
    }
}
