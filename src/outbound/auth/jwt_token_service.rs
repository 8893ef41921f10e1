//! JWT-backed `TokenService` implementation.
//!
//! Tokens are HS256-signed and carry the user id, role, and issue/expiry
//! timestamps. Verification validates the signature and expiry; the default
//! validity window is one day.

use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::ports::{AuthClaims, TokenService, TokenServiceError};
use crate::domain::{Role, UserId};

/// Default token validity window.
const DEFAULT_TTL_HOURS: i64 = 24;

/// Wire shape of the signed claims.
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    /// Subject: the user id.
    sub: Uuid,
    role: String,
    iat: i64,
    exp: i64,
}

/// HS256 token service over a shared secret.
#[derive(Clone)]
pub struct JwtTokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl: Duration,
}

impl JwtTokenService {
    /// Create a service signing with `secret` and the given validity window.
    pub fn new(secret: &str, ttl: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            ttl,
        }
    }

    /// Create a service with the default one-day validity window.
    pub fn with_default_ttl(secret: &str) -> Self {
        Self::new(secret, Duration::hours(DEFAULT_TTL_HOURS))
    }
}

impl TokenService for JwtTokenService {
    fn issue(&self, user_id: &UserId, role: Role) -> Result<String, TokenServiceError> {
        let now = Utc::now();
        let claims = Claims {
            sub: *user_id.as_uuid(),
            role: role.as_str().to_owned(),
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
        };
        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|err| TokenServiceError::issue(err.to_string()))
    }

    fn verify(&self, token: &str) -> Result<AuthClaims, TokenServiceError> {
        let data = decode::<Claims>(token, &self.decoding_key, &Validation::default())
            .map_err(|err| TokenServiceError::invalid(err.to_string()))?;
        let role = data
            .claims
            .role
            .parse::<Role>()
            .map_err(TokenServiceError::invalid)?;
        Ok(AuthClaims {
            user_id: UserId::from_uuid(data.claims.sub),
            role,
        })
    }
}
