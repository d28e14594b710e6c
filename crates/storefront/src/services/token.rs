//! Stateless issuer/verifier for signed bearer tokens.
//!
//! Tokens are HS256-signed JWTs embedding the user id and nothing else.
//! They carry no expiry and are never revoked server-side; the only way to
//! "log out" is for the client to discard its token.

use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use marigold_core::UserId;

/// Errors from token operations.
#[derive(Debug, Error)]
pub enum TokenError {
    /// Signing a new token failed.
    #[error("token encoding failed: {0}")]
    Encode(#[source] jsonwebtoken::errors::Error),

    /// The presented token has a bad signature or malformed payload.
    #[error("invalid token")]
    Invalid,
}

/// Claims embedded in an issued token.
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    /// The user id, as its string form.
    sub: String,
}

/// Signs and verifies bearer tokens with a shared secret.
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Create a token service from the shared signing secret.
    #[must_use]
    pub fn new(secret: &SecretString) -> Self {
        let bytes = secret.expose_secret().as_bytes();

        // Tokens have no expiry, so exp must not be required or validated.
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        Self {
            encoding: EncodingKey::from_secret(bytes),
            decoding: DecodingKey::from_secret(bytes),
            validation,
        }
    }

    /// Issue a signed token embedding the given user id.
    ///
    /// # Errors
    ///
    /// Returns `TokenError::Encode` if signing fails.
    pub fn issue(&self, user_id: UserId) -> Result<String, TokenError> {
        let claims = Claims {
            sub: user_id.to_string(),
        };

        jsonwebtoken::encode(&Header::default(), &claims, &self.encoding)
            .map_err(TokenError::Encode)
    }

    /// Verify a token and return the embedded user id.
    ///
    /// # Errors
    ///
    /// Returns `TokenError::Invalid` if the signature does not validate or
    /// the payload is malformed.
    pub fn verify(&self, token: &str) -> Result<UserId, TokenError> {
        let data = jsonwebtoken::decode::<Claims>(token, &self.decoding, &self.validation)
            .map_err(|_| TokenError::Invalid)?;

        UserId::parse(&data.claims.sub).map_err(|_| TokenError::Invalid)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn service(secret: &str) -> TokenService {
        TokenService::new(&SecretString::from(secret.to_owned()))
    }

    #[test]
    fn test_issue_verify_roundtrip() {
        let tokens = service("0123456789abcdef0123456789abcdef");
        let user_id = UserId::generate();

        let token = tokens.issue(user_id).unwrap();
        assert_eq!(tokens.verify(&token).unwrap(), user_id);
    }

    #[test]
    fn test_verify_rejects_wrong_secret() {
        let issuer = service("0123456789abcdef0123456789abcdef");
        let verifier = service("fedcba9876543210fedcba9876543210");

        let token = issuer.issue(UserId::generate()).unwrap();
        assert!(matches!(verifier.verify(&token), Err(TokenError::Invalid)));
    }

    #[test]
    fn test_verify_rejects_garbage() {
        let tokens = service("0123456789abcdef0123456789abcdef");
        assert!(matches!(tokens.verify("not.a.token"), Err(TokenError::Invalid)));
        assert!(matches!(tokens.verify(""), Err(TokenError::Invalid)));
    }

    #[test]
    fn test_verify_rejects_tampered_payload() {
        let tokens = service("0123456789abcdef0123456789abcdef");
        let token = tokens.issue(UserId::generate()).unwrap();

        // Swap the payload segment for another token's payload
        let other = tokens.issue(UserId::generate()).unwrap();
        let mut parts: Vec<&str> = token.split('.').collect();
        let other_parts: Vec<&str> = other.split('.').collect();
        parts[1] = other_parts[1];
        let tampered = parts.join(".");

        assert!(matches!(tokens.verify(&tampered), Err(TokenError::Invalid)));
    }
}
