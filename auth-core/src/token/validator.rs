use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::TokenError;

/// Verifies token signatures and expiry, extracting the subject claim.
///
/// Must be constructed with the same secret key as the issuing
/// [`TokenIssuer`](super::TokenIssuer).
pub struct TokenValidator {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenValidator {
    /// Create a validator for HS256 tokens signed with `secret`.
    pub fn new(secret: &[u8]) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // No clock leeway: a token is dead the second it expires.
        validation.leeway = 0;

        Self {
            decoding_key: DecodingKey::from_secret(secret),
            validation,
        }
    }

    /// Validate a token and return its subject claim.
    ///
    /// A token is valid iff the signature matches, the claim set parses,
    /// the subject is present and non-empty, and the current time is
    /// before the expiry claim.
    ///
    /// # Arguments
    /// * `token` - Serialized token string
    ///
    /// # Returns
    /// The subject claim
    ///
    /// # Errors
    /// * `InvalidToken` - For every failure cause, indistinguishably
    pub fn validate(&self, token: &str) -> Result<String, TokenError> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|_| TokenError::InvalidToken)?;

        let claims = data.claims;

        // "At or past expiry" is invalid; the library check alone admits
        // the exact expiry second.
        if claims.exp <= Utc::now().timestamp() {
            return Err(TokenError::InvalidToken);
        }

        if claims.sub.is_empty() {
            return Err(TokenError::InvalidToken);
        }

        Ok(claims.sub)
    }
}
