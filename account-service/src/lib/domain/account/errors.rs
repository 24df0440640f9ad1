use thiserror::Error;

/// Error for Username validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UsernameError {
    #[error("Username too short: minimum {min} characters, got {actual}")]
    TooShort { min: usize, actual: usize },

    #[error("Username too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },

    #[error(
        "Username contains invalid characters (only alphanumeric, underscore, and hyphen allowed)"
    )]
    InvalidCharacters,
}

/// Error for EmailAddress validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("Invalid email format: {0}")]
    InvalidFormat(String),
}

/// Error for Role parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RoleError {
    #[error("Unknown role: {0}")]
    Unknown(String),
}

/// Error for user directory operations
#[derive(Debug, Clone, Error)]
pub enum DirectoryError {
    #[error("Email already registered: {0}")]
    DuplicateEmail(String),

    #[error("Username already taken: {0}")]
    DuplicateUsername(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

/// Authentication failure taxonomy surfaced to the boundary layer.
///
/// Two variants are deliberately flat: `InvalidCredentials` never says
/// whether the email or the secret was wrong, and `Unauthenticated` covers
/// missing, malformed, expired, and unknown-subject tokens uniformly. The
/// internal cause must not leak through either of them.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    #[error("An account with this email or username already exists")]
    DuplicateCredential,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Not authenticated")]
    Unauthenticated,

    #[error("Internal error: {0}")]
    Internal(String),
}
