use std::sync::Arc;

use account_service::domain::account::errors::DirectoryError;
use account_service::domain::account::models::NewUser;
use account_service::domain::account::models::User;
use account_service::domain::account::models::UserId;
use account_service::domain::account::ports::UserDirectory;
use account_service::domain::account::service::AccountService;
use account_service::inbound::http::router::create_router;
use async_trait::async_trait;
use chrono::Duration;
use chrono::Utc;
use tokio::sync::RwLock;

pub const TEST_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

/// In-memory user directory backing the API tests, so the suite runs
/// without external services.
#[derive(Default)]
pub struct InMemoryUserDirectory {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop a user record, simulating out-of-band deletion.
    pub async fn remove(&self, email: &str) {
        self.users
            .write()
            .await
            .retain(|user| user.email.as_str() != email);
    }
}

#[async_trait]
impl UserDirectory for InMemoryUserDirectory {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DirectoryError> {
        Ok(self
            .users
            .read()
            .await
            .iter()
            .find(|user| user.email.as_str() == email)
            .cloned())
    }

    async fn create(&self, new_user: NewUser) -> Result<User, DirectoryError> {
        let mut users = self.users.write().await;

        if users
            .iter()
            .any(|user| user.email.as_str() == new_user.email.as_str())
        {
            return Err(DirectoryError::DuplicateEmail(
                new_user.email.as_str().to_string(),
            ));
        }
        if users
            .iter()
            .any(|user| user.username.as_str() == new_user.username.as_str())
        {
            return Err(DirectoryError::DuplicateUsername(
                new_user.username.as_str().to_string(),
            ));
        }

        let user = User {
            id: UserId::new(),
            username: new_user.username,
            email: new_user.email,
            password_hash: new_user.password_hash,
            role: new_user.role,
            is_active: new_user.is_active,
            created_at: Utc::now(),
        };
        users.push(user.clone());

        Ok(user)
    }
}

/// Test application that spawns the real router on a random port.
pub struct TestApp {
    pub address: String,
    pub directory: Arc<InMemoryUserDirectory>,
    pub api_client: reqwest::Client,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let directory = Arc::new(InMemoryUserDirectory::new());
        let account_service = Arc::new(AccountService::new(
            Arc::clone(&directory),
            TEST_SECRET,
            Duration::minutes(15),
        ));

        let router = create_router(account_service);

        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            directory,
            api_client: reqwest::Client::new(),
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    /// Register a user and assert success.
    pub async fn register(&self, username: &str, email: &str, password: &str) {
        let response = self
            .post("/api/auth/register")
            .json(&serde_json::json!({
                "username": username,
                "email": email,
                "password": password
            }))
            .send()
            .await
            .expect("Failed to execute request");

        assert_eq!(response.status(), reqwest::StatusCode::CREATED);
    }

    /// Log a user in and return the issued token from the response body.
    pub async fn login(&self, email: &str, password: &str) -> String {
        let response = self
            .post("/api/auth/login")
            .json(&serde_json::json!({
                "email": email,
                "password": password
            }))
            .send()
            .await
            .expect("Failed to execute request");

        assert_eq!(response.status(), reqwest::StatusCode::OK);

        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        body["data"]["token"]
            .as_str()
            .expect("Missing token in login response")
            .to_string()
    }
}
