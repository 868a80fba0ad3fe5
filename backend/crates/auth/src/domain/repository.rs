//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use kernel::id::UserId;

use crate::domain::entity::user::{NewUser, User};
use crate::domain::value_object::{email::Email, user_name::UserName};
use crate::error::AuthResult;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Insert a new user; the store assigns id and `created_at`
    ///
    /// A lost uniqueness race surfaces as `DuplicateEmail`/`DuplicateUsername`.
    async fn create(&self, user: &NewUser) -> AuthResult<User>;

    /// Find user by user name (exact match)
    async fn find_by_username(&self, username: &UserName) -> AuthResult<Option<User>>;

    /// Check if email is used, optionally ignoring one account
    async fn exists_by_email(&self, email: &Email, except: Option<UserId>) -> AuthResult<bool>;

    /// Check if user name is used, optionally ignoring one account
    async fn exists_by_username(
        &self,
        username: &UserName,
        except: Option<UserId>,
    ) -> AuthResult<bool>;

    /// Persist email, user name, password hash and `updated_at`
    async fn update(&self, user: &User) -> AuthResult<()>;

    /// Delete a user together with every bookmark it owns
    async fn delete(&self, user_id: UserId) -> AuthResult<()>;
}
