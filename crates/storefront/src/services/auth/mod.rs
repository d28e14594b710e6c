//! Authentication service.
//!
//! Implements the two-state session flow: an anonymous client signs up or
//! logs in with an email and password and receives a bearer token; the token
//! then proves identity on gated routes until the client discards it.

mod error;

pub use error::AuthError;

use sqlx::SqlitePool;

use crate::db::RepositoryError;
use crate::db::users::UserRepository;
use crate::services::token::TokenService;

/// Authentication service.
///
/// Handles user signup and login against the credential store.
pub struct AuthService<'a> {
    users: UserRepository<'a>,
    tokens: &'a TokenService,
}

impl<'a> AuthService<'a> {
    /// Create a new authentication service.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool, tokens: &'a TokenService) -> Self {
        Self {
            users: UserRepository::new(pool),
            tokens,
        }
    }

    /// Register a new user and return a token for them.
    ///
    /// The new user starts with a fully zeroed cart ledger.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::EmailTaken` if the email is already registered;
    /// no record is created in that case.
    pub async fn signup(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<String, AuthError> {
        let user = self
            .users
            .create(name, email, password)
            .await
            .map_err(|e| match e {
                RepositoryError::Conflict(_) => AuthError::EmailTaken,
                other => AuthError::Repository(other),
            })?;

        Ok(self.tokens.issue(user.id)?)
    }

    /// Login with email and password, returning a token on success.
    ///
    /// The stored password is compared as-is against the submitted one:
    /// no hashing, no constant-time comparison. This preserves the
    /// documented credential-store contract.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` if the email is unknown or
    /// the password does not match; no token is issued in either case.
    pub async fn login(&self, email: &str, password: &str) -> Result<String, AuthError> {
        let user = self
            .users
            .get_by_email(email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if user.password != password {
            return Err(AuthError::InvalidCredentials);
        }

        Ok(self.tokens.issue(user.id)?)
    }
}
