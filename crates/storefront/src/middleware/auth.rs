//! Authentication extractor.
//!
//! Gated routes take [`RequireAuth`] as an argument; it reads the bearer
//! token from the `auth-token` header and verifies it against the shared
//! secret. Catalog listing and admin routes are deliberately unguarded,
//! preserving the documented surface.

use axum::{
    extract::FromRequestParts,
    http::request::Parts,
};

use marigold_core::UserId;

use crate::error::AppError;
use crate::services::auth::AuthError;
use crate::state::AppState;

/// Name of the request header carrying the bearer token.
pub const AUTH_TOKEN_HEADER: &str = "auth-token";

/// Extractor that requires a valid bearer token.
///
/// Rejects with 401 when the header is absent or the token does not verify.
///
/// # Example
///
/// ```rust,ignore
/// async fn gated_handler(
///     RequireAuth(user_id): RequireAuth,
/// ) -> impl IntoResponse {
///     format!("Hello, {user_id}!")
/// }
/// ```
pub struct RequireAuth(pub UserId);

impl FromRequestParts<AppState> for RequireAuth {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(AUTH_TOKEN_HEADER)
            .and_then(|value| value.to_str().ok())
            .ok_or(AuthError::MissingToken)?;

        let user_id = state
            .tokens()
            .verify(token)
            .map_err(|_| AuthError::InvalidToken)?;

        tracing::debug!(%user_id, "request authenticated");

        Ok(Self(user_id))
    }
}
