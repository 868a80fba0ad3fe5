//! Login Use Case
//!
//! Checks a user name / password pair and issues a bearer token.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{user_name::UserName, user_password::RawPassword};
use crate::error::{AuthError, AuthResult};

/// Login input
pub struct LoginInput {
    pub username: String,
    pub password: String,
}

/// Login output
#[derive(Debug)]
pub struct LoginOutput {
    /// Signed bearer token, subject = user name
    pub access_token: String,
    pub user: User,
}

/// Login use case
pub struct LoginUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> LoginUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    pub async fn execute(&self, input: LoginInput) -> AuthResult<LoginOutput> {
        let user = self.authenticate(input).await?;

        let access_token = self
            .config
            .tokens
            .issue(user.username.as_str())
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        tracing::info!(user_id = %user.id, "User logged in");

        Ok(LoginOutput { access_token, user })
    }

    /// Resolve credentials to a user
    ///
    /// Every failure is `InvalidCredentials`; unknown users still pay for one
    /// hash verification.
    pub async fn authenticate(&self, input: LoginInput) -> AuthResult<User> {
        // Input that could never have been registered cannot match
        let raw_password =
            RawPassword::new(input.password).map_err(|_| AuthError::InvalidCredentials)?;
        let Ok(username) = UserName::new(&input.username) else {
            raw_password.dummy_verify(&self.config.hasher);
            return Err(AuthError::InvalidCredentials);
        };

        let Some(user) = self.user_repo.find_by_username(&username).await? else {
            raw_password.dummy_verify(&self.config.hasher);
            return Err(AuthError::InvalidCredentials);
        };

        if !user.password_hash.verify(&raw_password, &self.config.hasher)? {
            return Err(AuthError::InvalidCredentials);
        }

        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::register::{RegisterInput, RegisterUseCase};
    use crate::test_support::MemoryUserRepository;

    async fn setup() -> (LoginUseCase<MemoryUserRepository>, Arc<AuthConfig>) {
        let repo = Arc::new(MemoryUserRepository::default());
        let config = Arc::new(AuthConfig::development());
        RegisterUseCase::new(repo.clone(), config.clone())
            .execute(RegisterInput {
                email: "a@x.com".to_string(),
                username: "a".to_string(),
                password: "p1".to_string(),
            })
            .await
            .unwrap();
        (LoginUseCase::new(repo, config.clone()), config)
    }

    fn credentials(username: &str, password: &str) -> LoginInput {
        LoginInput {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_login_issues_token_for_username() {
        let (login, config) = setup().await;
        let output = login.execute(credentials("a", "p1")).await.unwrap();

        assert_eq!(config.tokens.validate(&output.access_token).unwrap(), "a");
        assert_eq!(output.user.username.as_str(), "a");
    }

    #[tokio::test]
    async fn test_wrong_password_and_unknown_user_look_the_same() {
        let (login, _) = setup().await;

        let wrong_password = login.execute(credentials("a", "nope")).await.unwrap_err();
        let unknown_user = login.execute(credentials("zz", "p1")).await.unwrap_err();

        assert!(matches!(wrong_password, AuthError::InvalidCredentials));
        assert!(matches!(unknown_user, AuthError::InvalidCredentials));
        assert_eq!(wrong_password.to_string(), unknown_user.to_string());
    }

    #[tokio::test]
    async fn test_unusable_input_is_invalid_credentials() {
        let (login, _) = setup().await;
        assert!(matches!(
            login.execute(credentials("", "p1")).await,
            Err(AuthError::InvalidCredentials)
        ));
        assert!(matches!(
            login.execute(credentials("a", "")).await,
            Err(AuthError::InvalidCredentials)
        ));
    }
}
