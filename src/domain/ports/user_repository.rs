//! Port for user persistence.

use async_trait::async_trait;

use crate::domain::{User, UserId, Username};

use super::define_port_error;

define_port_error! {
    /// Errors raised by user repository adapters.
    pub enum UserRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "user repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "user repository query failed: {message}",
        /// The unique username constraint was violated on insert.
        DuplicateUsername { username: String } =>
            "username already taken: {username}",
    }
}

/// Port for durable user storage.
///
/// The username column carries a unique constraint; adapters must surface a
/// constraint violation as [`UserRepositoryError::DuplicateUsername`] so the
/// auth service can map it to the registration failure contract.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a freshly registered user.
    async fn insert(&self, user: &User) -> Result<(), UserRepositoryError>;

    /// Look a user up by their unique handle.
    async fn find_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<User>, UserRepositoryError>;

    /// Look a user up by id.
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserRepositoryError>;
}
