use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;
use uuid::Uuid;

use crate::account::errors::DirectoryError;
use crate::account::models::EmailAddress;
use crate::account::models::NewUser;
use crate::account::models::Role;
use crate::account::models::User;
use crate::account::models::UserId;
use crate::account::models::Username;
use crate::account::ports::UserDirectory;

pub struct PostgresUserDirectory {
    pool: PgPool,
}

impl PostgresUserDirectory {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn user_from_row(row: &PgRow) -> Result<User, DirectoryError> {
    let id: Uuid = get(row, "id")?;
    let username: String = get(row, "username")?;
    let email: String = get(row, "email")?;
    let password_hash: String = get(row, "password_hash")?;
    let role: String = get(row, "role")?;
    let is_active: bool = get(row, "is_active")?;
    let created_at: DateTime<Utc> = get(row, "created_at")?;

    Ok(User {
        id: UserId(id),
        username: Username::new(username).map_err(storage)?,
        email: EmailAddress::new(email).map_err(storage)?,
        password_hash,
        role: role.parse::<Role>().map_err(storage)?,
        is_active,
        created_at,
    })
}

fn get<'r, T: sqlx::Decode<'r, sqlx::Postgres> + sqlx::Type<sqlx::Postgres>>(
    row: &'r PgRow,
    column: &str,
) -> Result<T, DirectoryError> {
    row.try_get(column)
        .map_err(|e| DirectoryError::Storage(e.to_string()))
}

fn storage<E: std::fmt::Display>(e: E) -> DirectoryError {
    DirectoryError::Storage(e.to_string())
}

#[async_trait]
impl UserDirectory for PostgresUserDirectory {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DirectoryError> {
        let row = sqlx::query(
            r#"
            SELECT id, username, email, password_hash, role, is_active, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(storage)?;

        row.as_ref().map(user_from_row).transpose()
    }

    async fn create(&self, new_user: NewUser) -> Result<User, DirectoryError> {
        let user = User {
            id: UserId::new(),
            username: new_user.username,
            email: new_user.email,
            password_hash: new_user.password_hash,
            role: new_user.role,
            is_active: new_user.is_active,
            created_at: Utc::now(),
        };

        sqlx::query(
            r#"
            INSERT INTO users (id, username, email, password_hash, role, is_active, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(user.id.0)
        .bind(user.username.as_str())
        .bind(user.email.as_str())
        .bind(&user.password_hash)
        .bind(user.role.as_str())
        .bind(user.is_active)
        .bind(user.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    if db_err.constraint() == Some("users_username_key") {
                        return DirectoryError::DuplicateUsername(
                            user.username.as_str().to_string(),
                        );
                    }
                    if db_err.constraint() == Some("users_email_key") {
                        return DirectoryError::DuplicateEmail(user.email.as_str().to_string());
                    }
                }
            }
            DirectoryError::Storage(e.to_string())
        })?;

        Ok(user)
    }
}
