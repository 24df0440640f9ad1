use thiserror::Error;

/// Error type for token operations.
///
/// The validate path fails with the single `InvalidToken` kind for every
/// cause (bad signature, malformed token, missing subject, expired). The
/// cause is deliberately not carried: callers must not be able to tell the
/// failure modes apart.
#[derive(Debug, Clone, Error)]
pub enum TokenError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Token is invalid or expired")]
    InvalidToken,
}
