use async_trait::async_trait;

use crate::account::errors::AuthError;
use crate::account::errors::DirectoryError;
use crate::account::models::NewUser;
use crate::account::models::RegisterCommand;
use crate::account::models::User;

/// Port for the account service operations exposed to the boundary layer.
#[async_trait]
pub trait AccountServicePort: Send + Sync + 'static {
    /// Register a new user with hashed credentials.
    ///
    /// # Arguments
    /// * `command` - Validated username, email, and plaintext secret
    ///
    /// # Returns
    /// Created user with the baseline role and active flag set
    ///
    /// # Errors
    /// * `DuplicateCredential` - Email or username already exists
    /// * `Internal` - Hashing or storage failed
    async fn register(&self, command: RegisterCommand) -> Result<User, AuthError>;

    /// Verify credentials and issue a bearer token.
    ///
    /// The token's subject is the user's email. The failure is flat:
    /// unknown email, failed lookup, and wrong secret are indistinguishable.
    ///
    /// # Arguments
    /// * `email` - Email to look up
    /// * `secret` - Plaintext secret to verify
    ///
    /// # Returns
    /// Token string, ready to be wrapped in the carrier convention
    ///
    /// # Errors
    /// * `InvalidCredentials` - Lookup failed or secret did not match
    /// * `Internal` - Token issuance failed
    async fn login(&self, email: &str, secret: &str) -> Result<String, AuthError>;

    /// Gate a request on its credential carrier.
    ///
    /// Extracts the token from the carrier, validates it, and resolves the
    /// subject to a user. Every failure branch collapses to the same
    /// `Unauthenticated` outcome.
    ///
    /// # Arguments
    /// * `carrier` - Raw carrier value, if the request had one
    ///
    /// # Returns
    /// The authenticated user
    ///
    /// # Errors
    /// * `Unauthenticated` - For every failure cause, indistinguishably
    async fn authenticate(&self, carrier: Option<&str>) -> Result<User, AuthError>;
}

/// Lookup and creation contract for user records.
///
/// Treated as an external collaborator: storage owns id assignment,
/// uniqueness enforcement, and timeout policy for its own I/O.
#[async_trait]
pub trait UserDirectory: Send + Sync + 'static {
    /// Retrieve a user by unique email.
    ///
    /// # Returns
    /// Optional user record (None if not found)
    ///
    /// # Errors
    /// * `Storage` - Lookup failed
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DirectoryError>;

    /// Persist a new user; storage assigns the id and creation time.
    ///
    /// # Errors
    /// * `DuplicateEmail` - Email is already registered
    /// * `DuplicateUsername` - Username is already taken
    /// * `Storage` - Insert failed
    async fn create(&self, new_user: NewUser) -> Result<User, DirectoryError>;
}
