//! Port for issuing and verifying bearer tokens.

use crate::domain::{Role, UserId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by token service adapters.
    pub enum TokenServiceError {
        /// Signing a new token failed.
        Issue { message: String } =>
            "token issue failed: {message}",
        /// The presented token is missing claims, malformed, tampered with,
        /// or expired.
        Invalid { message: String } =>
            "invalid token: {message}",
    }
}

/// Identity carried by a verified bearer token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthClaims {
    pub user_id: UserId,
    pub role: Role,
}

/// Port for the identity provider.
///
/// Token operations are pure CPU work (HMAC signing), so the trait is
/// synchronous; every protected endpoint verifies before any side effect.
#[cfg_attr(test, mockall::automock)]
pub trait TokenService: Send + Sync {
    /// Sign a token encoding identity and role, valid for the configured
    /// window (one day by default).
    fn issue(&self, user_id: &UserId, role: Role) -> Result<String, TokenServiceError>;

    /// Verify a presented token and return its claims.
    fn verify(&self, token: &str) -> Result<AuthClaims, TokenServiceError>;
}
