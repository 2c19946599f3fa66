//! Register Use Case
//!
//! Creates a new user account and returns an identity token.

use std::sync::Arc;

use platform::password::ClearTextPassword;

use crate::application::config::AuthConfig;
use crate::application::token::TokenService;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{email::Email, user_name::UserName};
use crate::error::{AuthError, AuthResult};

pub const MISSING_REGISTER_FIELDS: &str = "Please provide name, email, and password";

/// Register input. Fields are optional so absence is reported as a
/// validation failure instead of a body rejection.
#[derive(Default)]
pub struct RegisterInput {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Register output
#[derive(Debug)]
pub struct RegisterOutput {
    pub token: String,
}

/// Register use case
pub struct RegisterUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    tokens: Arc<TokenService>,
    config: Arc<AuthConfig>,
}

impl<U> RegisterUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, tokens: Arc<TokenService>, config: Arc<AuthConfig>) -> Self {
        Self {
            user_repo,
            tokens,
            config,
        }
    }

    pub async fn execute(&self, input: RegisterInput) -> AuthResult<RegisterOutput> {
        let (Some(name), Some(email), Some(password)) = (
            non_blank(input.name),
            non_blank(input.email),
            non_blank(input.password),
        ) else {
            return Err(AuthError::MissingFields(MISSING_REGISTER_FIELDS));
        };

        let email = Email::new(email)?;
        let name = UserName::new(name).map_err(|_| AuthError::MissingFields(MISSING_REGISTER_FIELDS))?;
        let password = ClearTextPassword::new(password)?;

        if self.user_repo.exists_by_email(&email).await? {
            return Err(AuthError::DuplicateEmail);
        }

        let password_hash = password.hash_async(self.config.password_hash).await?;

        let user = User::new(name, email, password_hash);
        self.user_repo.create(&user).await?;

        tracing::info!(
            user_id = %user.user_id,
            email = %user.email,
            "User registered"
        );

        let token = self.tokens.issue(&user.user_id, user.role)?;
        Ok(RegisterOutput { token })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
