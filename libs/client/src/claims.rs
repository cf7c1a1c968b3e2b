//! Bearer-token claims reading
//!
//! Decodes the payload segment of a compact three-segment token into a
//! claims record without verifying the signature. Only the backend can
//! verify tokens; the client reads claims to decide what to render and
//! whether the stored session is still worth keeping.

use base64::Engine;
use base64::engine::general_purpose::{STANDARD_NO_PAD, URL_SAFE_NO_PAD};
use chrono::Utc;
use serde_json::Value;
use thiserror::Error;
use tracing::error;

use crate::roles::extract_roles;

/// Errors raised while decoding a token payload
///
/// Callers of the public functions never see these; they exist so the
/// individual failure modes stay observable in logs and tests.
#[derive(Error, Debug)]
pub enum ClaimsError {
    /// The token has no payload segment
    #[error("Token has no payload segment")]
    MissingPayload,

    /// The payload segment is not valid base64
    #[error("Payload is not valid base64: {0}")]
    Base64(#[source] base64::DecodeError),

    /// The decoded payload is not valid JSON
    #[error("Payload is not valid JSON: {0}")]
    Json(#[source] serde_json::Error),
}

/// Claims carried in a bearer token payload
///
/// Every field is optional: the record represents whatever the backend put
/// in the token, not what the client wishes were there.
#[derive(Debug, Clone, PartialEq)]
pub struct Claims {
    /// Subject, the user's email
    pub sub: Option<String>,
    /// Granted authorities: a sequence of names or `{"authority"}` objects
    pub authorities: Option<Value>,
    /// Roles claim: a sequence, or the comma-joined string some backends emit
    pub roles: Option<Value>,
    /// Expiry as epoch seconds
    pub exp: Option<i64>,
    /// Issue time as epoch seconds
    pub iat: Option<i64>,
    /// Numeric user id under the `userId` claim
    pub user_id: Option<i64>,
    /// Numeric user id under the `id` claim
    pub id: Option<i64>,
}

impl Claims {
    fn from_value(value: &Value) -> Self {
        Claims {
            sub: value.get("sub").and_then(Value::as_str).map(String::from),
            authorities: value.get("authorities").cloned(),
            roles: value.get("roles").cloned(),
            exp: value.get("exp").and_then(Value::as_i64),
            iat: value.get("iat").and_then(Value::as_i64),
            user_id: value.get("userId").and_then(Value::as_i64),
            id: value.get("id").and_then(Value::as_i64),
        }
    }

    /// Ordered role names for this token
    ///
    /// Prefers the `authorities` claim; falls back to `roles`, accepting
    /// either a sequence of entries or a comma-joined string. Absent or
    /// unusable claims yield an empty list.
    pub fn role_names(&self) -> Vec<String> {
        if let Some(authorities) = &self.authorities {
            return extract_roles(authorities);
        }

        match &self.roles {
            Some(Value::String(joined)) => joined
                .split(',')
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(String::from)
                .collect(),
            Some(other) => extract_roles(other),
            None => Vec::new(),
        }
    }

    /// Numeric user id, preferring `userId` over `id`
    pub fn numeric_user_id(&self) -> Option<i64> {
        self.user_id.or(self.id)
    }
}

/// Decode a bearer token's payload without verifying its signature
///
/// Returns `None` on any failure (missing segment, bad base64, bad JSON).
/// Failures are logged, never raised.
pub fn decode(token: &str) -> Option<Claims> {
    match decode_payload(token) {
        Ok(claims) => Some(claims),
        Err(e) => {
            error!("Failed to decode token payload: {}", e);
            None
        }
    }
}

fn decode_payload(token: &str) -> Result<Claims, ClaimsError> {
    let payload = token.split('.').nth(1).ok_or(ClaimsError::MissingPayload)?;
    let bytes = decode_segment(payload)?;
    let value: Value = serde_json::from_slice(&bytes).map_err(ClaimsError::Json)?;
    Ok(Claims::from_value(&value))
}

// Tokens in the wild use either base64 alphabet, padded or not.
fn decode_segment(segment: &str) -> Result<Vec<u8>, ClaimsError> {
    let trimmed = segment.trim_end_matches('=');
    URL_SAFE_NO_PAD
        .decode(trimmed)
        .or_else(|_| STANDARD_NO_PAD.decode(trimmed))
        .map_err(ClaimsError::Base64)
}

/// Check whether a token should be treated as expired
///
/// Fails closed: a token that does not decode, or that carries no expiry
/// claim, is expired.
pub fn is_expired(token: &str) -> bool {
    is_expired_at(token, Utc::now().timestamp_millis())
}

/// Expiry check against an explicit clock in epoch milliseconds
pub fn is_expired_at(token: &str, now_ms: i64) -> bool {
    match decode(token).and_then(|claims| claims.exp) {
        Some(exp) => exp.saturating_mul(1000) < now_ms,
        None => true,
    }
}

/// Numeric user id from a token, preferring `userId` over `id`
///
/// Absent when the token does not decode or carries neither claim.
pub fn user_id(token: &str) -> Option<i64> {
    decode(token).and_then(|claims| claims.numeric_user_id())
}
