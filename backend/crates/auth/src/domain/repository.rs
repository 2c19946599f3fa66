//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entity::user::User;
use crate::domain::value_object::email::Email;
use crate::error::AuthResult;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Create a new user.
    ///
    /// Returns `AuthError::DuplicateEmail` if the email is already taken,
    /// including when a concurrent insert wins the race.
    async fn create(&self, user: &User) -> AuthResult<()>;

    /// Find user by (normalized) email
    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>>;

    /// Check if email exists
    async fn exists_by_email(&self, email: &Email) -> AuthResult<bool>;

    /// All users in registration order
    async fn list(&self) -> AuthResult<Vec<User>>;
}
