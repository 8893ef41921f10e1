//! Driving ports for registration, login, and profile lookup.

use async_trait::async_trait;

use crate::domain::{Error, LoginCredentials, User, UserId};

/// A user together with the bearer token issued for them.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user: User,
    pub token: String,
}

/// Driving port for the auth use-cases.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthCommand: Send + Sync {
    /// Register a new account and issue a token for it.
    ///
    /// Fails with an invalid-request error when the username is already
    /// taken; the first registrant is unaffected.
    async fn register(&self, credentials: LoginCredentials) -> Result<AuthenticatedUser, Error>;

    /// Authenticate existing credentials and issue a token.
    ///
    /// Unknown usernames and wrong passwords fail identically so the
    /// response does not reveal which part was wrong.
    async fn login(&self, credentials: LoginCredentials) -> Result<AuthenticatedUser, Error>;
}

/// Driving port for reading the authenticated user's own record.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserProfileQuery: Send + Sync {
    /// Fetch the caller's user record.
    async fn profile(&self, user_id: &UserId) -> Result<User, Error>;
}
