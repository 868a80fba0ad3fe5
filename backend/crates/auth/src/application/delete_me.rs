//! Delete Me Use Case
//!
//! Removes the calling account and everything it owns.

use std::sync::Arc;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::error::AuthResult;

/// Delete me use case
pub struct DeleteMeUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
}

impl<U> DeleteMeUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }

    pub async fn execute(&self, user: &User) -> AuthResult<()> {
        self.user_repo.delete(user.id).await?;

        tracing::info!(user_id = %user.id, "User deleted");

        Ok(())
    }
}
