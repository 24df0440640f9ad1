//! Credential and session primitives
//!
//! Provides the building blocks for credential-based authentication:
//! - Password hashing and constant-time verification (Argon2id)
//! - Signed, time-bounded token issuance and validation (HS256)
//! - The `"Bearer <token>"` carrier serialization convention
//!
//! Everything here is pure and side-effect-free: no I/O, no global state.
//! The signing key is injected at construction, so key rotation means
//! constructing new instances and invalidates outstanding tokens.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth_core::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("secret123").unwrap();
//! assert!(hasher.verify("secret123", &hash).unwrap());
//! ```
//!
//! ## Tokens
//! ```
//! use auth_core::{TokenIssuer, TokenValidator};
//!
//! let secret = b"secret_key_at_least_32_bytes_long!!!";
//! let issuer = TokenIssuer::new(secret);
//! let validator = TokenValidator::new(secret);
//!
//! let token = issuer.issue("alice@example.com").unwrap();
//! let subject = validator.validate(&token).unwrap();
//! assert_eq!(subject, "alice@example.com");
//! ```
//!
//! ## Carrier Convention
//! ```
//! use auth_core::carrier;
//!
//! let value = carrier::to_carrier("abc.def.ghi");
//! assert_eq!(carrier::token_from_carrier(&value), Some("abc.def.ghi"));
//! ```

pub mod carrier;
pub mod password;
pub mod token;

// Re-export commonly used items
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use token::Claims;
pub use token::TokenError;
pub use token::TokenIssuer;
pub use token::TokenValidator;
