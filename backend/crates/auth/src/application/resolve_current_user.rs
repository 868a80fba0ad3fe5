//! Resolve Current User Use Case
//!
//! Turns a bearer token into the account it was issued for.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::user_name::UserName;
use crate::error::{AuthError, AuthResult};

/// Resolve current user use case
pub struct ResolveCurrentUserUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> ResolveCurrentUserUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    /// `Unauthorized` for a bad or expired token, or when the subject no
    /// longer exists (renamed or deleted after issuance)
    pub async fn execute(&self, token: &str) -> AuthResult<User> {
        let subject = self
            .config
            .tokens
            .validate(token)
            .map_err(|_| AuthError::Unauthorized)?;

        let username = UserName::new(subject).map_err(|_| AuthError::Unauthorized)?;

        self.user_repo
            .find_by_username(&username)
            .await?
            .ok_or(AuthError::Unauthorized)
    }
}
