//! Authentication domain service.
//!
//! Registration hashes the password, persists the user, and issues a bearer
//! token in one call. Login deliberately fails identically for an unknown
//! username and a wrong password.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;

use crate::domain::ports::{
    AuthCommand, AuthenticatedUser, PasswordHasher, PasswordHasherError, TokenService,
    TokenServiceError, UserProfileQuery, UserRepository, UserRepositoryError,
};
use crate::domain::{Error, LoginCredentials, User, UserId, Username};

const INVALID_CREDENTIALS: &str = "invalid credentials";

/// Auth service implementing the driving ports.
#[derive(Clone)]
pub struct AuthService<R, H, T> {
    users: Arc<R>,
    hasher: Arc<H>,
    tokens: Arc<T>,
}

impl<R, H, T> AuthService<R, H, T> {
    /// Create a new service over the user repository, hasher, and token
    /// service.
    pub fn new(users: Arc<R>, hasher: Arc<H>, tokens: Arc<T>) -> Self {
        Self {
            users,
            hasher,
            tokens,
        }
    }
}

fn map_repository_error(error: UserRepositoryError) -> Error {
    match error {
        UserRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("user repository unavailable: {message}"))
        }
        UserRepositoryError::Query { message } => {
            Error::internal(format!("user repository error: {message}"))
        }
        UserRepositoryError::DuplicateUsername { username } => {
            Error::invalid_request("username already taken")
                .with_details(json!({ "username": username }))
        }
    }
}

fn map_hasher_error(error: PasswordHasherError) -> Error {
    Error::internal(error.to_string())
}

fn map_token_error(error: TokenServiceError) -> Error {
    Error::internal(error.to_string())
}

impl<R, H, T> AuthService<R, H, T>
where
    R: UserRepository,
    H: PasswordHasher,
    T: TokenService,
{
    fn issue_for(&self, user: User) -> Result<AuthenticatedUser, Error> {
        let token = self
            .tokens
            .issue(&user.id, user.role)
            .map_err(map_token_error)?;
        Ok(AuthenticatedUser { user, token })
    }
}

#[async_trait]
impl<R, H, T> AuthCommand for AuthService<R, H, T>
where
    R: UserRepository,
    H: PasswordHasher,
    T: TokenService,
{
    async fn register(&self, credentials: LoginCredentials) -> Result<AuthenticatedUser, Error> {
        let username = Username::new(credentials.username())
            .map_err(|error| Error::invalid_request(error.to_string()))?;

        // The unique constraint is the source of truth for duplicates; a
        // racing insert with the same name loses there, not here.
        let password_hash = self
            .hasher
            .hash(credentials.password())
            .map_err(map_hasher_error)?;
        let user = User::register(username, password_hash);
        self.users
            .insert(&user)
            .await
            .map_err(map_repository_error)?;

        self.issue_for(user)
    }

    async fn login(&self, credentials: LoginCredentials) -> Result<AuthenticatedUser, Error> {
        let username = Username::new(credentials.username())
            .map_err(|_| Error::invalid_request(INVALID_CREDENTIALS))?;

        let user = self
            .users
            .find_by_username(&username)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| Error::invalid_request(INVALID_CREDENTIALS))?;

        let matches = self
            .hasher
            .verify(credentials.password(), &user.password_hash)
            .map_err(map_hasher_error)?;
        if !matches {
            return Err(Error::invalid_request(INVALID_CREDENTIALS));
        }

        self.issue_for(user)
    }
}

#[async_trait]
impl<R, H, T> UserProfileQuery for AuthService<R, H, T>
where
    R: UserRepository,
    H: PasswordHasher,
    T: TokenService,
{
    async fn profile(&self, user_id: &UserId) -> Result<User, Error> {
        self.users
            .find_by_id(user_id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| Error::not_found("user not found"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::{MockPasswordHasher, MockTokenService, MockUserRepository};
    use crate::domain::{ErrorCode, PasswordHash, Role};

    fn service(
        users: MockUserRepository,
        hasher: MockPasswordHasher,
        tokens: MockTokenService,
    ) -> AuthService<MockUserRepository, MockPasswordHasher, MockTokenService> {
        AuthService::new(Arc::new(users), Arc::new(hasher), Arc::new(tokens))
    }

    fn credentials(username: &str, password: &str) -> LoginCredentials {
        LoginCredentials::try_from_parts(username, password).expect("valid credentials")
    }

    fn stored_user(username: &str) -> User {
        User::register(
            Username::new(username).expect("valid"),
            PasswordHash::new("$argon2id$v=19$stored"),
        )
    }

    #[tokio::test]
    async fn register_hashes_persists_and_issues_token() {
        let mut hasher = MockPasswordHasher::new();
        hasher
            .expect_hash()
            .withf(|password| password == "hunter22")
            .times(1)
            .return_once(|_| Ok(PasswordHash::new("$argon2id$v=19$fresh")));

        let mut users = MockUserRepository::new();
        users
            .expect_insert()
            .withf(|user: &User| {
                user.username.as_str() == "alice" && user.role == Role::User
            })
            .times(1)
            .return_once(|_| Ok(()));

        let mut tokens = MockTokenService::new();
        tokens
            .expect_issue()
            .times(1)
            .return_once(|_, _| Ok("signed.jwt".into()));

        let authenticated = service(users, hasher, tokens)
            .register(credentials("alice", "hunter22"))
            .await
            .expect("registration succeeds");
        assert_eq!(authenticated.token, "signed.jwt");
        assert_eq!(authenticated.user.username.as_str(), "alice");
    }

    #[tokio::test]
    async fn duplicate_username_is_invalid_request() {
        let mut hasher = MockPasswordHasher::new();
        hasher
            .expect_hash()
            .times(1)
            .return_once(|_| Ok(PasswordHash::new("$argon2id$v=19$fresh")));

        let mut users = MockUserRepository::new();
        users
            .expect_insert()
            .times(1)
            .return_once(|_| Err(UserRepositoryError::duplicate_username("alice")));

        let mut tokens = MockTokenService::new();
        tokens.expect_issue().times(0);

        let error = service(users, hasher, tokens)
            .register(credentials("alice", "hunter22"))
            .await
            .expect_err("duplicate registration");
        assert_eq!(error.code(), ErrorCode::InvalidRequest);
        assert_eq!(
            error.details().and_then(|d| d.get("username")),
            Some(&serde_json::json!("alice"))
        );
    }

    #[tokio::test]
    async fn register_rejects_malformed_usernames() {
        let mut users = MockUserRepository::new();
        users.expect_insert().times(0);
        let mut hasher = MockPasswordHasher::new();
        hasher.expect_hash().times(0);

        let error = service(users, hasher, MockTokenService::new())
            .register(credentials("bad handle", "hunter22"))
            .await
            .expect_err("invalid username");
        assert_eq!(error.code(), ErrorCode::InvalidRequest);
    }

    #[tokio::test]
    async fn login_issues_token_for_matching_password() {
        let user = stored_user("alice");
        let user_id = user.id;

        let mut users = MockUserRepository::new();
        users
            .expect_find_by_username()
            .withf(|username: &Username| username.as_str() == "alice")
            .times(1)
            .return_once(move |_| Ok(Some(user)));

        let mut hasher = MockPasswordHasher::new();
        hasher
            .expect_verify()
            .times(1)
            .return_once(|_, _| Ok(true));

        let mut tokens = MockTokenService::new();
        tokens
            .expect_issue()
            .withf(move |id, role| *id == user_id && *role == Role::User)
            .times(1)
            .return_once(|_, _| Ok("signed.jwt".into()));

        let authenticated = service(users, hasher, tokens)
            .login(credentials("alice", "hunter22"))
            .await
            .expect("login succeeds");
        assert_eq!(authenticated.token, "signed.jwt");
    }

    #[tokio::test]
    async fn unknown_user_and_wrong_password_fail_identically() {
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_username()
            .times(1)
            .return_once(|_| Ok(None));
        let unknown = service(users, MockPasswordHasher::new(), MockTokenService::new())
            .login(credentials("nobody", "pw"))
            .await
            .expect_err("unknown username");

        let mut users = MockUserRepository::new();
        let user = stored_user("alice");
        users
            .expect_find_by_username()
            .times(1)
            .return_once(move |_| Ok(Some(user)));
        let mut hasher = MockPasswordHasher::new();
        hasher
            .expect_verify()
            .times(1)
            .return_once(|_, _| Ok(false));
        let wrong = service(users, hasher, MockTokenService::new())
            .login(credentials("alice", "wrong"))
            .await
            .expect_err("wrong password");

        assert_eq!(unknown.code(), wrong.code());
        assert_eq!(unknown.message(), wrong.message());
    }

    #[tokio::test]
    async fn profile_of_missing_user_is_not_found() {
        let mut users = MockUserRepository::new();
        users.expect_find_by_id().times(1).return_once(|_| Ok(None));

        let error = service(users, MockPasswordHasher::new(), MockTokenService::new())
            .profile(&UserId::random())
            .await
            .expect_err("missing user");
        assert_eq!(error.code(), ErrorCode::NotFound);
    }

    #[tokio::test]
    async fn profile_returns_stored_user() {
        let user = stored_user("alice");
        let user_id = user.id;
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_id()
            .withf(move |id: &UserId| *id == user_id)
            .times(1)
            .return_once(move |_| Ok(Some(user)));

        let fetched = service(users, MockPasswordHasher::new(), MockTokenService::new())
            .profile(&user_id)
            .await
            .expect("profile found");
        assert_eq!(fetched.id, user_id);
    }
}
