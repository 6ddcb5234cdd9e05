//! User Models

use std::fmt;

use argon2::{
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
    password_hash::{self, SaltString},
};
use rand::rngs::OsRng;
use thiserror::Error;
use tokio::task::{self, JoinError};
use zeroize::Zeroize;

use crate::uuids::TypedUuid;

/// User UUID
pub type UserUuid = TypedUuid<User>;

#[derive(Debug, Error)]
pub enum UserError {
    #[error("password is required")]
    PasswordRequired,

    #[error("failed to hash password")]
    Hash(#[source] password_hash::Error),

    #[error("password hashing task failed")]
    Blocking(#[source] JoinError),
}

/// Plaintext password held only long enough to hash or verify it.
#[derive(Clone)]
pub struct Password(String);

impl Password {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for Password {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for Password {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(**redacted**)")
    }
}

impl Drop for Password {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

/// User Model
#[derive(Clone, PartialEq, Eq)]
pub struct User {
    pub uuid: UserUuid,
    pub name: String,
    pub email: String,

    /// PHC-formatted Argon2id hash.
    pub password_hash: String,
}

impl User {
    /// Build a user with a fresh identity, hashing the password with a random salt.
    ///
    /// # Errors
    ///
    /// Returns [`UserError::PasswordRequired`] for an empty password, or
    /// [`UserError::Hash`] when hashing fails.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: &Password,
    ) -> Result<Self, UserError> {
        if password.is_empty() {
            return Err(UserError::PasswordRequired);
        }

        let salt = SaltString::generate(&mut OsRng);

        let password_hash = Argon2::default()
            .hash_password(password.expose().as_bytes(), &salt)
            .map_err(UserError::Hash)?
            .to_string();

        Ok(Self {
            uuid: UserUuid::new(),
            name: name.into(),
            email: email.into(),
            password_hash,
        })
    }

    /// [`User::new`] on the blocking thread pool, keeping Argon2 off the async
    /// workers.
    ///
    /// # Errors
    ///
    /// Returns the [`User::new`] errors, or [`UserError::Blocking`] when the
    /// hashing task panics or is cancelled.
    pub async fn register(
        name: String,
        email: String,
        password: Password,
    ) -> Result<Self, UserError> {
        task::spawn_blocking(move || Self::new(name, email, &password))
            .await
            .map_err(UserError::Blocking)?
    }

    /// Returns `true` when `candidate` matches the stored hash.
    #[must_use]
    pub fn validate_password(&self, candidate: &Password) -> bool {
        let Ok(hash) = PasswordHash::new(&self.password_hash) else {
            tracing::warn!(user = %self.uuid, "stored password hash is malformed");

            return false;
        };

        Argon2::default()
            .verify_password(candidate.expose().as_bytes(), &hash)
            .is_ok()
    }
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("uuid", &self.uuid)
            .field("name", &self.name)
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn new_user_hashes_password() -> TestResult {
        let user = User::new("John Doe", "j@j.com", &Password::new("123456"))?;

        assert!(!user.uuid.is_nil());
        assert_eq!(user.name, "John Doe");
        assert_eq!(user.email, "j@j.com");
        assert_ne!(user.password_hash, "123456");
        assert!(user.password_hash.starts_with("$argon2id$"));

        Ok(())
    }

    #[test]
    fn same_password_hashes_differently_per_user() -> TestResult {
        let password = Password::new("123456");

        let first = User::new("John Doe", "j@j.com", &password)?;
        let second = User::new("Jane Doe", "jane@j.com", &password)?;

        assert_ne!(first.password_hash, second.password_hash);

        Ok(())
    }

    #[test]
    fn empty_password_is_rejected() {
        let result = User::new("John Doe", "j@j.com", &Password::new(""));

        assert!(
            matches!(result, Err(UserError::PasswordRequired)),
            "expected PasswordRequired, got {result:?}"
        );
    }

    #[test]
    fn validate_password_accepts_only_the_original() -> TestResult {
        let user = User::new("John Doe", "j@j.com", &Password::new("123456"))?;

        assert!(user.validate_password(&Password::new("123456")));
        assert!(!user.validate_password(&Password::new("1234567")));
        assert!(!user.validate_password(&Password::new("")));

        Ok(())
    }

    #[test]
    fn validate_password_rejects_malformed_hash() -> TestResult {
        let mut user = User::new("John Doe", "j@j.com", &Password::new("123456"))?;

        user.password_hash = "123456".to_string();

        assert!(!user.validate_password(&Password::new("123456")));

        Ok(())
    }

    #[tokio::test]
    async fn register_hashes_password_on_blocking_pool() -> TestResult {
        let user = User::register(
            "John Doe".to_string(),
            "j@j.com".to_string(),
            Password::new("123456"),
        )
        .await?;

        assert!(user.password_hash.starts_with("$argon2id$"));
        assert!(user.validate_password(&Password::new("123456")));

        Ok(())
    }

    #[tokio::test]
    async fn register_rejects_empty_password() {
        let result =
            User::register("John Doe".to_string(), "j@j.com".to_string(), Password::new("")).await;

        assert!(
            matches!(result, Err(UserError::PasswordRequired)),
            "expected PasswordRequired, got {result:?}"
        );
    }

    #[test]
    fn debug_output_hides_secrets() -> TestResult {
        let password = Password::new("hunter2");
        let user = User::new("John Doe", "j@j.com", &password)?;

        assert_eq!(format!("{password:?}"), "Password(**redacted**)");
        assert!(!format!("{user:?}").contains(&user.password_hash));

        Ok(())
    }
}
