use std::sync::Arc;

use async_trait::async_trait;
use auth_core::carrier;
use auth_core::PasswordHasher;
use auth_core::TokenIssuer;
use auth_core::TokenValidator;
use chrono::Duration;

use crate::account::errors::AuthError;
use crate::account::errors::DirectoryError;
use crate::account::models::NewUser;
use crate::account::models::RegisterCommand;
use crate::account::models::Role;
use crate::account::models::User;
use crate::account::ports::AccountServicePort;
use crate::account::ports::UserDirectory;

/// Domain service implementing registration, login, and the session gate.
///
/// Holds the credential primitives and the injected user directory. The
/// signing key and TTL are bound at construction; rotating the key means
/// constructing a new service, which invalidates outstanding tokens.
pub struct AccountService<D>
where
    D: UserDirectory,
{
    directory: Arc<D>,
    password_hasher: PasswordHasher,
    token_issuer: TokenIssuer,
    token_validator: TokenValidator,
}

impl<D> AccountService<D>
where
    D: UserDirectory,
{
    /// Create a new account service.
    ///
    /// # Arguments
    /// * `directory` - User lookup/creation implementation
    /// * `token_secret` - Symmetric signing key for issued tokens
    /// * `token_ttl` - Lifetime of issued tokens
    pub fn new(directory: Arc<D>, token_secret: &[u8], token_ttl: Duration) -> Self {
        Self {
            directory,
            password_hasher: PasswordHasher::new(),
            token_issuer: TokenIssuer::with_ttl(token_secret, token_ttl),
            token_validator: TokenValidator::new(token_secret),
        }
    }
}

#[async_trait]
impl<D> AccountServicePort for AccountService<D>
where
    D: UserDirectory,
{
    async fn register(&self, command: RegisterCommand) -> Result<User, AuthError> {
        let password_hash = self
            .password_hasher
            .hash(&command.secret)
            .map_err(|e| AuthError::Internal(format!("Password hashing failed: {}", e)))?;

        let new_user = NewUser {
            username: command.username,
            email: command.email,
            password_hash,
            role: Role::default(),
            is_active: true,
        };

        match self.directory.create(new_user).await {
            Ok(user) => Ok(user),
            Err(DirectoryError::DuplicateEmail(_) | DirectoryError::DuplicateUsername(_)) => {
                Err(AuthError::DuplicateCredential)
            }
            Err(DirectoryError::Storage(e)) => Err(AuthError::Internal(e)),
        }
    }

    async fn login(&self, email: &str, secret: &str) -> Result<String, AuthError> {
        // Lookup miss and lookup failure fold into the same flat outcome
        // as a wrong secret; callers must not learn which it was.
        let user = match self.directory.find_by_email(email).await {
            Ok(Some(user)) => user,
            Ok(None) | Err(_) => return Err(AuthError::InvalidCredentials),
        };

        // A stored hash that fails to parse counts as a mismatch.
        let verified = self
            .password_hasher
            .verify(secret, &user.password_hash)
            .unwrap_or(false);

        if !verified {
            return Err(AuthError::InvalidCredentials);
        }

        self.token_issuer
            .issue(user.email.as_str())
            .map_err(|e| AuthError::Internal(format!("Token issuance failed: {}", e)))
    }

    async fn authenticate(&self, carrier: Option<&str>) -> Result<User, AuthError> {
        let token = carrier
            .and_then(carrier::token_from_carrier)
            .ok_or(AuthError::Unauthenticated)?;

        let subject = self
            .token_validator
            .validate(token)
            .map_err(|_| AuthError::Unauthenticated)?;

        match self.directory.find_by_email(&subject).await {
            Ok(Some(user)) => Ok(user),
            Ok(None) | Err(_) => Err(AuthError::Unauthenticated),
        }
    }
}

#[cfg(test)]
mod tests {
    use auth_core::TokenIssuer;
    use chrono::Utc;
    use mockall::mock;

    use super::*;
    use crate::account::models::EmailAddress;
    use crate::account::models::UserId;
    use crate::account::models::Username;

    const SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

    mock! {
        pub TestUserDirectory {}

        #[async_trait]
        impl UserDirectory for TestUserDirectory {
            async fn find_by_email(&self, email: &str) -> Result<Option<User>, DirectoryError>;
            async fn create(&self, new_user: NewUser) -> Result<User, DirectoryError>;
        }
    }

    fn service(directory: MockTestUserDirectory) -> AccountService<MockTestUserDirectory> {
        AccountService::new(Arc::new(directory), SECRET, Duration::minutes(15))
    }

    fn stored_user(password_hash: &str) -> User {
        User {
            id: UserId::new(),
            username: Username::new("alice".to_string()).unwrap(),
            email: EmailAddress::new("alice@example.com".to_string()).unwrap(),
            password_hash: password_hash.to_string(),
            role: Role::Client,
            is_active: true,
            created_at: Utc::now(),
        }
    }

    fn register_command() -> RegisterCommand {
        RegisterCommand::new(
            Username::new("alice".to_string()).unwrap(),
            EmailAddress::new("alice@example.com".to_string()).unwrap(),
            "secret123".to_string(),
        )
    }

    #[tokio::test]
    async fn test_register_success() {
        let mut directory = MockTestUserDirectory::new();

        directory
            .expect_create()
            .withf(|new_user| {
                new_user.username.as_str() == "alice"
                    && new_user.email.as_str() == "alice@example.com"
                    && new_user.password_hash.starts_with("$argon2")
                    && new_user.role == Role::Client
                    && new_user.is_active
            })
            .times(1)
            .returning(|new_user| {
                Ok(User {
                    id: UserId::new(),
                    username: new_user.username,
                    email: new_user.email,
                    password_hash: new_user.password_hash,
                    role: new_user.role,
                    is_active: new_user.is_active,
                    created_at: Utc::now(),
                })
            });

        let user = service(directory)
            .register(register_command())
            .await
            .expect("Registration failed");

        assert_eq!(user.role, Role::Client);
        assert!(user.is_active);
        // Invariant: the raw secret is never stored.
        assert_ne!(user.password_hash, "secret123");
    }

    #[tokio::test]
    async fn test_register_duplicate_email() {
        let mut directory = MockTestUserDirectory::new();

        directory.expect_create().times(1).returning(|new_user| {
            Err(DirectoryError::DuplicateEmail(
                new_user.email.as_str().to_string(),
            ))
        });

        let result = service(directory).register(register_command()).await;
        assert!(matches!(result, Err(AuthError::DuplicateCredential)));
    }

    #[tokio::test]
    async fn test_register_duplicate_username() {
        let mut directory = MockTestUserDirectory::new();

        directory.expect_create().times(1).returning(|new_user| {
            Err(DirectoryError::DuplicateUsername(
                new_user.username.as_str().to_string(),
            ))
        });

        let result = service(directory).register(register_command()).await;
        assert!(matches!(result, Err(AuthError::DuplicateCredential)));
    }

    #[tokio::test]
    async fn test_login_success_token_carries_email_subject() {
        let hash = PasswordHasher::new()
            .hash("secret123")
            .expect("Failed to hash");

        let mut directory = MockTestUserDirectory::new();
        let user = stored_user(&hash);
        directory
            .expect_find_by_email()
            .withf(|email| email == "alice@example.com")
            .times(1)
            .returning(move |_| Ok(Some(user.clone())));

        let token = service(directory)
            .login("alice@example.com", "secret123")
            .await
            .expect("Login failed");

        let subject = TokenValidator::new(SECRET)
            .validate(&token)
            .expect("Issued token failed validation");
        assert_eq!(subject, "alice@example.com");
    }

    #[tokio::test]
    async fn test_login_wrong_secret() {
        let hash = PasswordHasher::new()
            .hash("secret123")
            .expect("Failed to hash");

        let mut directory = MockTestUserDirectory::new();
        let user = stored_user(&hash);
        directory
            .expect_find_by_email()
            .times(1)
            .returning(move |_| Ok(Some(user.clone())));

        let result = service(directory)
            .login("alice@example.com", "wrongpass")
            .await;
        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_login_unknown_email() {
        let mut directory = MockTestUserDirectory::new();
        directory
            .expect_find_by_email()
            .times(1)
            .returning(|_| Ok(None));

        let result = service(directory)
            .login("nobody@example.com", "secret123")
            .await;
        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_login_lookup_failure_is_flat() {
        let mut directory = MockTestUserDirectory::new();
        directory
            .expect_find_by_email()
            .times(1)
            .returning(|_| Err(DirectoryError::Storage("connection lost".to_string())));

        let result = service(directory)
            .login("alice@example.com", "secret123")
            .await;
        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_authenticate_no_carrier() {
        let mut directory = MockTestUserDirectory::new();
        directory.expect_find_by_email().times(0);

        let result = service(directory).authenticate(None).await;
        assert!(matches!(result, Err(AuthError::Unauthenticated)));
    }

    #[tokio::test]
    async fn test_authenticate_malformed_carrier() {
        let mut directory = MockTestUserDirectory::new();
        directory.expect_find_by_email().times(0);

        let service = service(directory);
        for carrier in ["garbage", "bearer abc", "Bearer", "Bearer "] {
            let result = service.authenticate(Some(carrier)).await;
            assert!(matches!(result, Err(AuthError::Unauthenticated)));
        }
    }

    #[tokio::test]
    async fn test_authenticate_invalid_token() {
        let mut directory = MockTestUserDirectory::new();
        directory.expect_find_by_email().times(0);

        let result = service(directory)
            .authenticate(Some("Bearer not.a.token"))
            .await;
        assert!(matches!(result, Err(AuthError::Unauthenticated)));
    }

    #[tokio::test]
    async fn test_authenticate_expired_token() {
        let mut directory = MockTestUserDirectory::new();
        directory.expect_find_by_email().times(0);

        let token = TokenIssuer::new(SECRET)
            .issue_with_ttl("alice@example.com", Duration::zero())
            .expect("Failed to issue token");

        let result = service(directory)
            .authenticate(Some(&carrier::to_carrier(&token)))
            .await;
        assert!(matches!(result, Err(AuthError::Unauthenticated)));
    }

    #[tokio::test]
    async fn test_authenticate_unknown_subject() {
        let mut directory = MockTestUserDirectory::new();
        directory
            .expect_find_by_email()
            .withf(|email| email == "alice@example.com")
            .times(1)
            .returning(|_| Ok(None));

        let token = TokenIssuer::new(SECRET)
            .issue("alice@example.com")
            .expect("Failed to issue token");

        // Valid, unexpired token for a user the directory no longer has.
        let result = service(directory)
            .authenticate(Some(&carrier::to_carrier(&token)))
            .await;
        assert!(matches!(result, Err(AuthError::Unauthenticated)));
    }

    #[tokio::test]
    async fn test_authenticate_success() {
        let hash = PasswordHasher::new()
            .hash("secret123")
            .expect("Failed to hash");

        let mut directory = MockTestUserDirectory::new();
        let user = stored_user(&hash);
        directory
            .expect_find_by_email()
            .times(1)
            .returning(move |_| Ok(Some(user.clone())));

        let token = TokenIssuer::new(SECRET)
            .issue("alice@example.com")
            .expect("Failed to issue token");

        let user = service(directory)
            .authenticate(Some(&carrier::to_carrier(&token)))
            .await
            .expect("Authentication failed");
        assert_eq!(user.email.as_str(), "alice@example.com");
    }
}
