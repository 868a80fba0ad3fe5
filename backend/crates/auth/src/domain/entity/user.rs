//! User Entity
//!
//! Account record: identity plus the stored password hash. The hash never
//! leaves the crate through a DTO.

use chrono::{DateTime, Utc};
use kernel::id::UserId;

use crate::domain::value_object::{
    email::Email, user_name::UserName, user_password::UserPassword,
};

/// User entity
#[derive(Debug, Clone)]
pub struct User {
    /// Database-assigned key
    pub id: UserId,
    /// Unique, lowercased
    pub email: Email,
    /// Unique login handle; token subject
    pub username: UserName,
    pub password_hash: UserPassword,
    pub created_at: DateTime<Utc>,
    /// `None` until the first modification
    pub updated_at: Option<DateTime<Utc>>,
}

impl User {
    /// Apply a set of changes; `updated_at` moves even when nothing changed
    pub fn apply(&mut self, changes: UserChanges, now: DateTime<Utc>) {
        if let Some(email) = changes.email {
            self.email = email;
        }
        if let Some(username) = changes.username {
            self.username = username;
        }
        if let Some(password_hash) = changes.password_hash {
            self.password_hash = password_hash;
        }
        self.updated_at = Some(now);
    }
}

/// A user not yet persisted
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: Email,
    pub username: UserName,
    pub password_hash: UserPassword,
}

/// Validated self-update; `None` leaves the field unchanged
#[derive(Debug, Clone, Default)]
pub struct UserChanges {
    pub email: Option<Email>,
    pub username: Option<UserName>,
    pub password_hash: Option<UserPassword>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::user_password::RawPassword;
    use platform::password::{PasswordConfig, PasswordHasher};

    fn sample_user() -> User {
        let hasher = PasswordHasher::new(PasswordConfig::default());
        let raw = RawPassword::new("p1".to_string()).unwrap();
        User {
            id: UserId::new(1),
            email: Email::new("a@x.com").unwrap(),
            username: UserName::new("a").unwrap(),
            password_hash: UserPassword::from_raw(&raw, &hasher).unwrap(),
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    #[test]
    fn test_apply_changes_only_provided_fields() {
        let mut user = sample_user();
        let before_hash = user.password_hash.clone();
        let now = Utc::now();

        user.apply(
            UserChanges {
                username: Some(UserName::new("b").unwrap()),
                ..Default::default()
            },
            now,
        );

        assert_eq!(user.username.as_str(), "b");
        assert_eq!(user.email.as_str(), "a@x.com");
        assert!(user.password_hash == before_hash);
        assert_eq!(user.updated_at, Some(now));
    }
}
