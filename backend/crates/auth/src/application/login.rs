//! Login Use Case
//!
//! Checks email + password and returns an identity token carrying the
//! stored role. Failed attempts are not counted.

use std::sync::Arc;

use platform::password::ClearTextPassword;

use crate::application::token::TokenService;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::email::Email;
use crate::error::{AuthError, AuthResult};

pub const MISSING_LOGIN_FIELDS: &str = "Please provide email and password";

#[derive(Default)]
pub struct LoginInput {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug)]
pub struct LoginOutput {
    pub token: String,
}

/// Login use case
pub struct LoginUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    tokens: Arc<TokenService>,
}

impl<U> LoginUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, tokens: Arc<TokenService>) -> Self {
        Self { user_repo, tokens }
    }

    pub async fn execute(&self, input: LoginInput) -> AuthResult<LoginOutput> {
        let email = input.email.filter(|e| !e.trim().is_empty());
        let password = input.password.filter(|p| !p.is_empty());
        let (Some(email), Some(password)) = (email, password) else {
            return Err(AuthError::MissingFields(MISSING_LOGIN_FIELDS));
        };

        // An address that cannot be valid cannot be registered either
        let user = match Email::new(&email) {
            Ok(email) => self.user_repo.find_by_email(&email).await?,
            Err(_) => None,
        };
        let user = user.ok_or(AuthError::UserNotFound)?;

        let matched = user
            .password_hash
            .verify_async(ClearTextPassword::for_verification(password))
            .await?;

        if !matched {
            return Err(AuthError::InvalidCredentials);
        }

        tracing::info!(user_id = %user.user_id, "User logged in");

        let token = self.tokens.issue(&user.user_id, user.role)?;
        Ok(LoginOutput { token })
    }
}
