//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use kernel::id::UserId;
use platform::password::HashedPassword;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{email::Email, user_name::UserName, user_role::UserRole};
use crate::error::{AuthError, AuthResult};

/// PostgreSQL-backed user repository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// ============================================================================
// User Repository Implementation
// ============================================================================

impl UserRepository for PgUserRepository {
    async fn create(&self, user: &User) -> AuthResult<()> {
        let result = sqlx::query(
            r#"
            INSERT INTO users (
                user_id,
                name,
                email,
                password_hash,
                user_role,
                created_at
            ) VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(user.user_id.as_uuid())
        .bind(user.name.as_str())
        .bind(user.email.as_str())
        .bind(user.password_hash.as_phc_string())
        .bind(user.role.id())
        .bind(user.created_at)
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(()),
            // users_email_key
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                Err(AuthError::DuplicateEmail)
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                user_id,
                name,
                email,
                password_hash,
                user_role,
                created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_user()).transpose()
    }

    async fn exists_by_email(&self, email: &Email) -> AuthResult<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)")
                .bind(email.as_str())
                .fetch_one(&self.pool)
                .await?;

        Ok(exists)
    }

    async fn list(&self) -> AuthResult<Vec<User>> {
        let rows = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                user_id,
                name,
                email,
                password_hash,
                user_role,
                created_at
            FROM users
            ORDER BY created_at ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(|r| r.into_user()).collect()
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct UserRow {
    user_id: Uuid,
    name: String,
    email: String,
    password_hash: String,
    user_role: i16,
    created_at: DateTime<Utc>,
}

impl UserRow {
    /// A row that fails to convert is logged with its id and fails the
    /// whole call.
    fn into_user(self) -> AuthResult<User> {
        let user_id = self.user_id;
        let invalid = |reason: String| {
            tracing::error!(user_id = %user_id, reason = %reason, "Unreadable user row");
            AuthError::Internal(format!("user {user_id}: {reason}"))
        };

        let role = UserRole::from_id(self.user_role)
            .ok_or_else(|| invalid(format!("Invalid user_role: {}", self.user_role)))?;

        let password_hash = HashedPassword::from_phc_string(self.password_hash)
            .map_err(|e| invalid(format!("Invalid password_hash: {e}")))?;

        Ok(User {
            user_id: UserId::from_uuid(self.user_id),
            name: UserName::from_db(self.name),
            email: Email::from_db(self.email),
            password_hash,
            role,
            created_at: self.created_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(user_role: i16, password_hash: &str) -> UserRow {
        UserRow {
            user_id: Uuid::new_v4(),
            name: "Ali".into(),
            email: "ali@example.com".into(),
            password_hash: password_hash.into(),
            user_role,
            created_at: Utc::now(),
        }
    }

    const PHC: &str = "$argon2id$v=19$m=19456,t=2,p=1$c29tZXNhbHRzb21lc2FsdA$3W1UlGzWHF8UfCVY6Wr0dI+8cOYfbDUrAi5EaHEdiV0";

    #[test]
    fn test_row_error_names_user() {
        let bad = row(7, PHC);
        let user_id = bad.user_id;

        let err = bad.into_user().unwrap_err();
        assert!(matches!(&err, AuthError::Internal(msg) if msg.contains(&user_id.to_string())));
    }

    #[test]
    fn test_row_bad_hash_names_user() {
        let bad = row(0, "not-a-phc-string");
        let user_id = bad.user_id;

        let err = bad.into_user().unwrap_err();
        assert!(matches!(&err, AuthError::Internal(msg) if msg.contains(&user_id.to_string())));
    }
}
