//! # sio-session
//!
//! Client-side session facts for SoundItOut.
//!
//! Decodes the claims of the stored bearer token (without signature
//! verification), derives expiry and role from them, and keeps the token in
//! the OS keychain, an environment variable, or a credentials file.

pub mod claims;
pub mod clock;
pub mod error;
pub mod session;
pub mod token_store;

pub use claims::{BearerClaims, decode_claims, derive_role, is_expired};
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{DecodeError, TokenStoreError};
pub use session::Session;
pub use token_store::{
    EnvToken, FileTokenStore, KeyringTokenStore, LayeredTokenStore, StaticToken, TokenProvider,
    TokenSink, TokenSource,
};

/// Whether `provider` currently holds a decodable, unexpired token.
///
/// A token that fails to decode means "not logged in", never an error.
#[must_use]
pub fn is_logged_in(provider: &impl TokenProvider) -> bool {
    Session::new(provider).is_logged_in()
}
