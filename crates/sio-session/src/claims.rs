use base64::Engine as _;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use sio_core::{Role, SessionIdentity};

use crate::clock::Clock;
use crate::error::DecodeError;

/// Claims carried in the payload segment of a session token.
///
/// Only `sub` is required. Any claim not modelled here is kept in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BearerClaims {
    /// Identifying principal (`sub`), the account email.
    #[serde(rename = "sub")]
    pub subject: String,
    /// Raw role claim, e.g. `"STUDENT"` or `"ROLE_ADMIN"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Expiry (`exp`). `None` means the token never expires. Fractional
    /// values are floored to whole seconds.
    #[serde(
        rename = "exp",
        default,
        deserialize_with = "numeric_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub expires_at_epoch_seconds: Option<i64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl BearerClaims {
    /// Expiry as a timestamp, for display.
    #[must_use]
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.expires_at_epoch_seconds
            .and_then(|exp| DateTime::from_timestamp(exp, 0))
    }

    #[must_use]
    pub fn role(&self) -> Role {
        derive_role(self)
    }

    #[must_use]
    pub fn to_identity(&self) -> SessionIdentity {
        SessionIdentity {
            email: self.subject.clone(),
            role: self.role(),
            expires_at: self.expires_at_epoch_seconds,
        }
    }
}

#[allow(clippy::cast_possible_truncation)]
fn numeric_date<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(number) = Option::<serde_json::Number>::deserialize(deserializer)? else {
        return Ok(None);
    };
    number
        .as_i64()
        .or_else(|| {
            number
                .as_f64()
                .filter(|seconds| seconds.is_finite())
                .map(|seconds| seconds.floor() as i64)
        })
        .map(Some)
        .ok_or_else(|| serde::de::Error::custom("exp is not a NumericDate"))
}

/// Decode the claims segment of a `header.claims.signature` token.
///
/// The signature is NOT verified: the claims only drive client-side routing,
/// the backend remains the authority on every request.
///
/// # Errors
///
/// Returns [`DecodeError`] if the token is blank, does not have exactly three
/// segments, or its middle segment is not a base64url JSON object with a
/// string `sub`.
pub fn decode_claims(token: &str) -> Result<BearerClaims, DecodeError> {
    let token = token.trim();
    if token.is_empty() {
        return Err(DecodeError::Empty);
    }

    let segments: Vec<&str> = token.split('.').collect();
    let [_, payload, _] = segments.as_slice() else {
        return Err(DecodeError::Malformed {
            segments: segments.len(),
        });
    };

    let bytes = base64::engine::general_purpose::URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Whether `claims` are past their expiry according to `clock`.
///
/// Absent claims and claims without `exp` are never expired. A token whose
/// `exp` equals the current second is already expired.
#[must_use]
pub fn is_expired(claims: Option<&BearerClaims>, clock: &impl Clock) -> bool {
    claims
        .and_then(|c| c.expires_at_epoch_seconds)
        .is_some_and(|exp| exp <= clock.now_epoch_seconds())
}

/// Derive the session role from the raw `role` claim. Total.
#[must_use]
pub fn derive_role(claims: &BearerClaims) -> Role {
    Role::from_claim(claims.role.as_deref())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::clock::FixedClock;

    fn encode(segment: &str) -> String {
        base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(segment)
    }

    fn make_jwt(payload: &str) -> String {
        format!(
            "{}.{}.{}",
            encode(r#"{"alg":"HS256","typ":"JWT"}"#),
            encode(payload),
            encode("fake_sig")
        )
    }

    fn claims_with(role: Option<&str>, exp: Option<i64>) -> BearerClaims {
        BearerClaims {
            subject: "ada@example.com".into(),
            role: role.map(str::to_string),
            expires_at_epoch_seconds: exp,
            extra: Map::new(),
        }
    }

    #[test]
    fn fractional_exp_is_floored() {
        let jwt = make_jwt(r#"{"sub":"ada@example.com","exp":1700000000.5}"#);
        let claims = decode_claims(&jwt).expect("fractional exp should decode");
        assert_eq!(claims.expires_at_epoch_seconds, Some(1_700_000_000));
        assert!(is_expired(Some(&claims), &FixedClock(1_700_000_000)));
        assert!(!is_expired(Some(&claims), &FixedClock(1_699_999_999)));
    }

    #[test]
    fn non_numeric_exp_is_a_claims_error() {
        let jwt = make_jwt(r#"{"sub":"ada@example.com","exp":"tomorrow"}"#);
        assert!(matches!(decode_claims(&jwt), Err(DecodeError::Claims(_))));
    }

    #[test]
    fn decode_reads_subject_role_and_expiry() {
        let jwt = make_jwt(r#"{"sub":"ada@example.com","role":"ROLE_STUDENT","exp":1700000000}"#);
        let claims = decode_claims(&jwt).expect("should decode");
        assert_eq!(claims.subject, "ada@example.com");
        assert_eq!(claims.role.as_deref(), Some("ROLE_STUDENT"));
        assert_eq!(claims.expires_at_epoch_seconds, Some(1_700_000_000));
        assert!(claims.extra.is_empty());
    }

    #[test]
    fn decode_preserves_unknown_claims() {
        let jwt = make_jwt(r#"{"sub":"ada@example.com","iat":1699990000,"roles":["ROLE_ADMIN"]}"#);
        let claims = decode_claims(&jwt).expect("should decode");
        assert_eq!(claims.role, None);
        assert_eq!(claims.expires_at_epoch_seconds, None);
        assert_eq!(claims.extra["iat"], serde_json::json!(1_699_990_000));
        assert_eq!(claims.extra["roles"], serde_json::json!(["ROLE_ADMIN"]));
    }

    #[test]
    fn decode_tolerates_padded_segment() {
        let payload = base64::engine::general_purpose::URL_SAFE.encode(r#"{"sub":"a"}"#);
        assert!(payload.ends_with('='));
        let jwt = format!("h.{payload}.s");
        assert_eq!(decode_claims(&jwt).expect("should decode").subject, "a");
    }

    #[test]
    fn decode_garbage_is_malformed() {
        let err = decode_claims("garbage").unwrap_err();
        assert!(matches!(err, DecodeError::Malformed { segments: 1 }));
        assert!(err.to_string().contains("invalid token format"));
    }

    #[test]
    fn decode_blank_is_empty() {
        assert!(matches!(decode_claims("  "), Err(DecodeError::Empty)));
    }

    #[test]
    fn decode_bad_base64() {
        let err = decode_claims("header.!!!invalid!!!.signature").unwrap_err();
        assert!(matches!(err, DecodeError::Base64(_)));
    }

    #[test]
    fn decode_non_json_payload() {
        let jwt = format!("h.{}.s", encode("not json"));
        assert!(matches!(decode_claims(&jwt), Err(DecodeError::Claims(_))));
    }

    #[test]
    fn decode_requires_subject() {
        let jwt = make_jwt(r#"{"role":"ADMIN"}"#);
        assert!(matches!(decode_claims(&jwt), Err(DecodeError::Claims(_))));
    }

    #[test]
    fn decode_rejects_extra_segments() {
        let err = decode_claims("a.b.c.d").unwrap_err();
        assert!(matches!(err, DecodeError::Malformed { segments: 4 }));
    }

    #[test]
    fn absent_claims_are_not_expired() {
        assert!(!is_expired(None, &FixedClock(0)));
    }

    #[test]
    fn claims_without_exp_never_expire() {
        let claims = claims_with(Some("STUDENT"), None);
        assert!(!is_expired(Some(&claims), &FixedClock(i64::MAX)));
    }

    #[rstest]
    #[case(999, true)]
    #[case(1000, true)]
    #[case(1001, false)]
    fn expiry_boundary_is_inclusive(#[case] exp: i64, #[case] expired: bool) {
        let claims = claims_with(None, Some(exp));
        assert_eq!(is_expired(Some(&claims), &FixedClock(1000)), expired);
    }

    #[rstest]
    #[case(Some("STUDENT"), Role::Student)]
    #[case(Some("student"), Role::Student)]
    #[case(Some("ROLE_STUDENT"), Role::Student)]
    #[case(Some("ADMIN"), Role::Admin)]
    #[case(Some("ROLE_ADMIN"), Role::Admin)]
    #[case(Some("TUTOR"), Role::Unknown)]
    #[case(None, Role::Unknown)]
    fn derive_role_cases(#[case] raw: Option<&str>, #[case] expected: Role) {
        assert_eq!(derive_role(&claims_with(raw, None)), expected);
    }

    #[test]
    fn expires_at_converts_epoch() {
        let claims = claims_with(None, Some(1_700_000_000));
        assert_eq!(
            claims.expires_at().map(|t| t.timestamp()),
            Some(1_700_000_000)
        );
        assert_eq!(claims_with(None, None).expires_at(), None);
    }

    #[test]
    fn to_identity_maps_fields() {
        let identity = claims_with(Some("role_admin"), Some(5)).to_identity();
        assert_eq!(identity.email, "ada@example.com");
        assert_eq!(identity.role, Role::Admin);
        assert_eq!(identity.expires_at, Some(5));
    }
}
