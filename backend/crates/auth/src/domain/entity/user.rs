//! User Entity

use chrono::{DateTime, Utc};
use kernel::id::UserId;
use platform::password::HashedPassword;

use crate::domain::value_object::{email::Email, user_name::UserName, user_role::UserRole};

/// Registered account
///
/// The password hash lives on the entity but is never part of any
/// response DTO.
#[derive(Debug, Clone)]
pub struct User {
    pub user_id: UserId,
    pub name: UserName,
    /// Unique, normalized
    pub email: Email,
    pub password_hash: HashedPassword,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new account with the default role
    pub fn new(name: UserName, email: Email, password_hash: HashedPassword) -> Self {
        Self {
            user_id: UserId::new(),
            name,
            email,
            password_hash,
            role: UserRole::default(),
            created_at: Utc::now(),
        }
    }
}
