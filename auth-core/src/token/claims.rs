use serde::Deserialize;
use serde::Serialize;

/// Claim set carried by an issued token.
///
/// The subject is the identity the token asserts (here, the user's email);
/// `exp` and `iat` are Unix timestamps. The signature covers all three, so
/// tampering with any claim invalidates the token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (user email)
    pub sub: String,

    /// Expiration time (Unix timestamp)
    pub exp: i64,

    /// Issued at (Unix timestamp)
    pub iat: i64,
}
