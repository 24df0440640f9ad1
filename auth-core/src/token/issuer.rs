use chrono::Duration;
use chrono::Utc;
use jsonwebtoken::encode;
use jsonwebtoken::Algorithm;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;

use super::claims::Claims;
use super::errors::TokenError;

/// Minutes a token stays valid when no TTL is configured.
pub const DEFAULT_TTL_MINUTES: i64 = 15;

/// Issues signed, time-bounded tokens (HS256).
///
/// The secret key is injected at construction and never read from global
/// state; rotating the key means constructing a new issuer, which
/// invalidates every previously issued token.
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    header: Header,
    default_ttl: Duration,
}

impl TokenIssuer {
    /// Create an issuer with the default 15 minute TTL.
    ///
    /// # Arguments
    /// * `secret` - Symmetric signing key (at least 32 bytes for HS256)
    pub fn new(secret: &[u8]) -> Self {
        Self::with_ttl(secret, Duration::minutes(DEFAULT_TTL_MINUTES))
    }

    /// Create an issuer with an explicit default TTL.
    ///
    /// # Arguments
    /// * `secret` - Symmetric signing key
    /// * `default_ttl` - Lifetime applied by [`TokenIssuer::issue`]
    pub fn with_ttl(secret: &[u8], default_ttl: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            header: Header::new(Algorithm::HS256),
            default_ttl,
        }
    }

    /// Issue a token for a subject using the configured default TTL.
    ///
    /// # Arguments
    /// * `subject` - Identity the token asserts
    ///
    /// # Returns
    /// Signed token string
    ///
    /// # Errors
    /// * `EncodingFailed` - Token signing failed
    pub fn issue(&self, subject: &str) -> Result<String, TokenError> {
        self.issue_with_ttl(subject, self.default_ttl)
    }

    /// Issue a token with an explicit TTL.
    ///
    /// The expiry claim is absolute: `now + ttl`. A zero TTL produces a
    /// token that is already expired.
    ///
    /// # Arguments
    /// * `subject` - Identity the token asserts
    /// * `ttl` - Lifetime of this token
    ///
    /// # Returns
    /// Signed token string
    ///
    /// # Errors
    /// * `EncodingFailed` - Token signing failed
    pub fn issue_with_ttl(&self, subject: &str, ttl: Duration) -> Result<String, TokenError> {
        let now = Utc::now();
        let claims = Claims {
            sub: subject.to_string(),
            exp: (now + ttl).timestamp(),
            iat: now.timestamp(),
        };

        encode(&self.header, &claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingFailed(e.to_string()))
    }
}
