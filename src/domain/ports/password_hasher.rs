//! Port for password hashing.

use crate::domain::PasswordHash;

use super::define_port_error;

define_port_error! {
    /// Errors raised by password hasher adapters.
    pub enum PasswordHasherError {
        /// Producing a hash failed.
        Hash { message: String } =>
            "password hashing failed: {message}",
        /// The stored hash could not be parsed for verification.
        Verify { message: String } =>
            "password verification failed: {message}",
    }
}

/// Port for salted one-way password hashing.
#[cfg_attr(test, mockall::automock)]
pub trait PasswordHasher: Send + Sync {
    /// Hash a clear-text password with a fresh salt.
    fn hash(&self, password: &str) -> Result<PasswordHash, PasswordHasherError>;

    /// Check a clear-text password against a stored hash. A mismatch is
    /// `Ok(false)`, not an error.
    fn verify(&self, password: &str, hash: &PasswordHash)
        -> Result<bool, PasswordHasherError>;
}
