//! Authentication error types.

use thiserror::Error;

use crate::db::RepositoryError;
use crate::services::token::TokenError;

/// Errors from authentication operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Unknown email or wrong password.
    #[error("invalid email or password")]
    InvalidCredentials,

    /// Signup attempted with an email that already has an account.
    #[error("a user with this email already exists")]
    EmailTaken,

    /// A gated route was called without a token.
    #[error("missing auth token")]
    MissingToken,

    /// The presented token failed verification.
    #[error("invalid auth token")]
    InvalidToken,

    /// Database operation failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// Token signing failed.
    #[error(transparent)]
    Token(#[from] TokenError),
}
