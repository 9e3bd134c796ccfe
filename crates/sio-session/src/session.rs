use sio_core::{Role, SessionIdentity};

use crate::claims::{BearerClaims, decode_claims, is_expired};
use crate::clock::{Clock, SystemClock};
use crate::error::DecodeError;
use crate::token_store::TokenProvider;

/// Session queries over an injected token provider.
///
/// Nothing is cached: every call reads the provider and decodes again, so a
/// login or logout through the backing store is visible immediately.
#[derive(Debug, Clone)]
pub struct Session<P, C = SystemClock> {
    provider: P,
    clock: C,
}

impl<P: TokenProvider> Session<P> {
    #[must_use]
    pub const fn new(provider: P) -> Self {
        Self {
            provider,
            clock: SystemClock,
        }
    }
}

impl<P: TokenProvider, C: Clock> Session<P, C> {
    #[must_use]
    pub fn with_clock<D: Clock>(self, clock: D) -> Session<P, D> {
        Session {
            provider: self.provider,
            clock,
        }
    }

    #[must_use]
    pub const fn provider(&self) -> &P {
        &self.provider
    }

    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.provider.current_token()
    }

    /// Decode the current token, if any.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError`] if a token is stored but cannot be decoded.
    pub fn try_claims(&self) -> Result<Option<BearerClaims>, DecodeError> {
        self.token().as_deref().map(decode_claims).transpose()
    }

    /// Decoded claims of the current token. An undecodable token counts as
    /// no token.
    #[must_use]
    pub fn claims(&self) -> Option<BearerClaims> {
        self.try_claims().unwrap_or_else(|error| {
            tracing::debug!(%error, "stored token could not be decoded");
            None
        })
    }

    /// A token is stored, decodes, and has not expired.
    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.claims()
            .is_some_and(|claims| !is_expired(Some(&claims), &self.clock))
    }

    /// Subject of the stored token, whether or not it has expired.
    #[must_use]
    pub fn email(&self) -> Option<String> {
        self.claims().map(|claims| claims.subject)
    }

    /// Role of the stored token; [`Role::Unknown`] without one.
    #[must_use]
    pub fn role(&self) -> Role {
        self.claims().map_or(Role::Unknown, |claims| claims.role())
    }

    /// Whether the stored token carries `role`. Never true for
    /// [`Role::Unknown`].
    #[must_use]
    pub fn has_role(&self, role: Role) -> bool {
        role != Role::Unknown && self.role() == role
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.has_role(Role::Admin)
    }

    #[must_use]
    pub fn is_student(&self) -> bool {
        self.has_role(Role::Student)
    }

    /// Identity of a live (decodable, unexpired) session.
    #[must_use]
    pub fn identity(&self) -> Option<SessionIdentity> {
        self.claims()
            .filter(|claims| !is_expired(Some(claims), &self.clock))
            .map(|claims| claims.to_identity())
    }

    /// `Authorization` header value for the stored token.
    #[must_use]
    pub fn auth_header(&self) -> Option<String> {
        self.token().map(|token| format!("Bearer {token}"))
    }
}
