//! Authentication route handlers.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::services::auth::AuthService;
use crate::state::AppState;

/// Login request body.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Signup request body.
#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Successful auth response carrying the bearer token.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub success: bool,
    pub token: String,
}

/// Handle login.
///
/// Returns 400 `{"success": false, "errors": ...}` on unknown email or
/// wrong password; no token is issued in that case.
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<TokenResponse>> {
    let auth = AuthService::new(state.pool(), state.tokens());
    let token = auth.login(&req.email, &req.password).await?;

    Ok(Json(TokenResponse {
        success: true,
        token,
    }))
}

/// Handle signup.
///
/// Creates the user with a freshly zeroed 300-slot cart and logs them in.
/// Returns 400 if the email is already registered.
pub async fn signup(
    State(state): State<AppState>,
    Json(req): Json<SignupRequest>,
) -> Result<Json<TokenResponse>> {
    let auth = AuthService::new(state.pool(), state.tokens());
    let token = auth.signup(&req.username, &req.email, &req.password).await?;

    tracing::info!(email = %req.email, "new user signed up");

    Ok(Json(TokenResponse {
        success: true,
        token,
    }))
}
