//! Register Use Case
//!
//! Creates a new user account.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::entity::user::{NewUser, User};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    email::Email,
    user_name::UserName,
    user_password::{RawPassword, UserPassword},
};
use crate::error::{AuthError, AuthResult};

/// Register input
pub struct RegisterInput {
    pub email: String,
    pub username: String,
    pub password: String,
}

/// Register use case
pub struct RegisterUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> RegisterUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    pub async fn execute(&self, input: RegisterInput) -> AuthResult<User> {
        // Validate everything before touching the store
        let email = Email::new(input.email)?;
        let username = UserName::new(input.username)?;
        let raw_password = RawPassword::new(input.password)?;

        // Email is checked first
        if self.user_repo.exists_by_email(&email, None).await? {
            return Err(AuthError::DuplicateEmail);
        }
        if self.user_repo.exists_by_username(&username, None).await? {
            return Err(AuthError::DuplicateUsername);
        }

        let password_hash = UserPassword::from_raw(&raw_password, &self.config.hasher)?;

        let user = self
            .user_repo
            .create(&NewUser {
                email,
                username,
                password_hash,
            })
            .await?;

        tracing::info!(
            user_id = %user.id,
            username = %user.username,
            "User registered"
        );

        Ok(user)
    }
}
