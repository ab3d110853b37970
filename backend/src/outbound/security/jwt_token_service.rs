//! HS256 bearer tokens carrying the user id.
//!
//! Claims are `{ "userId": "<uuid>", "iat": <secs>, "exp": <secs> }`. Expiry
//! is checked against the injected clock rather than the system time.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use mockable::Clock;
use serde::{Deserialize, Serialize};

use crate::domain::UserId;
use crate::domain::ports::{IssuedToken, TokenError, TokenService};
use super::TokenSecret;

/// Seven days.
pub const DEFAULT_TOKEN_TTL_HOURS: u32 = 168;

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    #[serde(rename = "userId")]
    user_id: String,
    iat: i64,
    exp: i64,
}

/// [`TokenService`] signing with a shared HMAC secret.
pub struct JwtTokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    ttl: Duration,
    clock: Arc<dyn Clock>,
}

impl JwtTokenService {
    /// Build the signing keys from `secret`, which may be dropped afterwards.
    #[must_use]
    pub fn new(secret: &TokenSecret, ttl_hours: u32, clock: Arc<dyn Clock>) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.set_required_spec_claims(&["exp"]);
        Self {
            encoding: EncodingKey::from_secret(secret.expose()),
            decoding: DecodingKey::from_secret(secret.expose()),
            validation,
            ttl: Duration::hours(i64::from(ttl_hours)),
            clock,
        }
    }

    fn expires_at(&self, issued_at: DateTime<Utc>) -> DateTime<Utc> {
        issued_at + self.ttl
    }
}

impl TokenService for JwtTokenService {
    fn issue(&self, user_id: &UserId) -> Result<IssuedToken, TokenError> {
        let issued_at = self.clock.utc();
        let expires_at = self.expires_at(issued_at);
        let claims = Claims {
            user_id: user_id.to_string(),
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        };
        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|err| TokenError::issue(err.to_string()))?;
        Ok(IssuedToken { token, expires_at })
    }

    fn verify(&self, token: &str) -> Result<UserId, TokenError> {
        let data = decode::<Claims>(token, &self.decoding, &self.validation)
            .map_err(|err| TokenError::invalid(err.to_string()))?;
        if data.claims.exp <= self.clock.utc().timestamp() {
            return Err(TokenError::invalid("token expired"));
        }
        UserId::new(&data.claims.user_id).map_err(|err| TokenError::invalid(err.to_string()))
    }
}
