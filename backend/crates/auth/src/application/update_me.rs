//! Update Me Use Case
//!
//! Partial self-update of email, user name and password.

use std::sync::Arc;

use chrono::Utc;

use crate::application::config::AuthConfig;
use crate::domain::entity::user::{User, UserChanges};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    email::Email,
    user_name::UserName,
    user_password::{RawPassword, UserPassword},
};
use crate::error::{AuthError, AuthResult};

/// Update input; `None` or an empty string leaves the field unchanged
#[derive(Default)]
pub struct UpdateMeInput {
    pub email: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Update me use case
pub struct UpdateMeUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> UpdateMeUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    pub async fn execute(&self, mut user: User, input: UpdateMeInput) -> AuthResult<User> {
        let email = given(input.email).map(Email::new).transpose()?;
        let username = given(input.username).map(UserName::new).transpose()?;
        let raw_password = given(input.password).map(RawPassword::new).transpose()?;

        // Only changed values can collide with another account
        if let Some(email) = email.as_ref().filter(|e| **e != user.email) {
            if self.user_repo.exists_by_email(email, Some(user.id)).await? {
                return Err(AuthError::DuplicateEmail);
            }
        }
        if let Some(username) = username.as_ref().filter(|u| **u != user.username) {
            if self
                .user_repo
                .exists_by_username(username, Some(user.id))
                .await?
            {
                return Err(AuthError::DuplicateUsername);
            }
        }

        let password_hash = raw_password
            .map(|raw| UserPassword::from_raw(&raw, &self.config.hasher))
            .transpose()?;

        let changed_fields: Vec<&str> = [
            email.as_ref().map(|_| "email"),
            username.as_ref().map(|_| "username"),
            password_hash.as_ref().map(|_| "password"),
        ]
        .into_iter()
        .flatten()
        .collect();

        user.apply(
            UserChanges {
                email,
                username,
                password_hash,
            },
            Utc::now(),
        );

        self.user_repo.update(&user).await?;

        tracing::info!(
            user_id = %user.id,
            fields = ?changed_fields,
            "User updated"
        );

        Ok(user)
    }
}

fn given(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
