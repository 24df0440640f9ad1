//! Serialization convention for the credential carrier.
//!
//! A carrier is the transport container (cookie or header) that moves a
//! token between client and server. This crate does not own the transport,
//! only the wire shape of the value: the scheme word, a single space, and
//! the token.

/// Scheme prefix of a well-formed carrier value.
pub const BEARER_SCHEME: &str = "Bearer";

/// Extract the token from a carrier value.
///
/// Accepts only the exact `"Bearer <token>"` shape: the scheme word, one
/// space, and a non-empty token without embedded whitespace. Anything else
/// is malformed and yields `None`.
///
/// # Examples
/// ```
/// use auth_core::carrier::token_from_carrier;
///
/// assert_eq!(token_from_carrier("Bearer abc.def.ghi"), Some("abc.def.ghi"));
/// assert_eq!(token_from_carrier("bearer abc.def.ghi"), None);
/// assert_eq!(token_from_carrier("Bearer"), None);
/// ```
pub fn token_from_carrier(carrier: &str) -> Option<&str> {
    let token = carrier.strip_prefix(BEARER_SCHEME)?.strip_prefix(' ')?;

    if token.is_empty() || token.contains(char::is_whitespace) {
        return None;
    }

    Some(token)
}

/// Render a token as a carrier value.
pub fn to_carrier(token: &str) -> String {
    format!("{} {}", BEARER_SCHEME, token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_well_formed_carrier() {
        assert_eq!(token_from_carrier("Bearer abc123"), Some("abc123"));
    }

    #[test]
    fn test_roundtrip() {
        let carrier = to_carrier("abc.def.ghi");
        assert_eq!(carrier, "Bearer abc.def.ghi");
        assert_eq!(token_from_carrier(&carrier), Some("abc.def.ghi"));
    }

    #[test]
    fn test_malformed_carriers() {
        for malformed in [
            "",
            "Bearer",
            "Bearer ",
            "Bearer  double-space",
            "Bearer two tokens",
            "bearer abc123",
            "Basic abc123",
            "abc123",
        ] {
            assert_eq!(token_from_carrier(malformed), None, "{:?}", malformed);
        }
    }
}
