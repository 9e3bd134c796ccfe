//! # sio-api
//!
//! HTTP client for the SoundItOut REST backend.
//!
//! Attaches the stored bearer token to every non-public request and runs
//! study-plan responses through `sio-plan` so callers always get a concrete
//! task list.

mod admin;
mod auth;
mod error;
mod http;
mod plan;
mod search;

pub use error::ApiError;

use std::sync::Arc;
use std::time::Duration;

use sio_config::ApiConfig;
use sio_session::{Session, TokenProvider};

/// Endpoints that never receive the bearer header.
const PUBLIC_ENDPOINTS: &[&str] = &["/auth/register", "/auth/login"];

/// Client for the SoundItOut backend.
#[derive(Clone)]
pub struct CoachClient {
    http: reqwest::Client,
    base_url: String,
    tokens: Arc<dyn TokenProvider>,
}

impl std::fmt::Debug for CoachClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CoachClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl CoachClient {
    /// Create a client for `base_url` (including the `/api` prefix).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if the underlying `reqwest::Client` fails to build.
    pub fn new(
        base_url: &str,
        timeout: Duration,
        tokens: impl TokenProvider + 'static,
    ) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("sounditout-cli/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.trim().trim_end_matches('/').to_string(),
            tokens: Arc::new(tokens),
        })
    }

    /// Create a client from the `[api]` configuration section.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if the underlying `reqwest::Client` fails to build.
    pub fn from_config(
        config: &ApiConfig,
        tokens: impl TokenProvider + 'static,
    ) -> Result<Self, ApiError> {
        Self::new(
            config.base_url(),
            Duration::from_secs(config.timeout_secs),
            tokens,
        )
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.authorize(self.http.get(self.url(path)), path)
    }

    fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.authorize(self.http.post(self.url(path)), path)
    }

    fn authorize(&self, builder: reqwest::RequestBuilder, path: &str) -> reqwest::RequestBuilder {
        if is_public(path) {
            return builder;
        }
        match Session::new(&*self.tokens).auth_header() {
            Some(header) => builder.header(reqwest::header::AUTHORIZATION, header),
            None => {
                tracing::debug!(path, "no stored token; sending request without bearer header");
                builder
            }
        }
    }
}

fn is_public(path: &str) -> bool {
    PUBLIC_ENDPOINTS.iter().any(|public| path.contains(public))
}

fn require_non_blank(field: &str, value: &str) -> Result<(), ApiError> {
    if value.trim().is_empty() {
        return Err(ApiError::InvalidInput(format!("{field} must not be blank")));
    }
    Ok(())
}
