//! Users service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::users::{
        errors::UsersServiceError,
        models::{User, UserUuid},
        repository::SqliteUsersRepository,
    },
};

#[derive(Debug, Clone)]
pub struct SqliteUsersService {
    db: Db,
    repository: SqliteUsersRepository,
}

impl SqliteUsersService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: SqliteUsersRepository::new(),
        }
    }
}

#[async_trait]
impl UsersService for SqliteUsersService {
    async fn create_user(&self, user: User) -> Result<User, UsersServiceError> {
        let mut tx = self.db.begin().await?;

        let created = self.repository.create_user(&mut tx, &user).await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn get_user(&self, user: UserUuid) -> Result<User, UsersServiceError> {
        let mut tx = self.db.begin().await?;

        let user = self.repository.get_user(&mut tx, user).await?;

        tx.commit().await?;

        Ok(user)
    }

    async fn find_user_by_email(&self, email: &str) -> Result<User, UsersServiceError> {
        let mut tx = self.db.begin().await?;

        let user = self.repository.find_user_by_email(&mut tx, email).await?;

        tx.commit().await?;

        Ok(user)
    }
}

#[automock]
#[async_trait]
pub trait UsersService: Send + Sync {
    /// Persists a new user; the email must not already be registered.
    async fn create_user(&self, user: User) -> Result<User, UsersServiceError>;

    /// Retrieve a single user.
    async fn get_user(&self, user: UserUuid) -> Result<User, UsersServiceError>;

    /// Retrieve the user registered with `email`.
    async fn find_user_by_email(&self, email: &str) -> Result<User, UsersServiceError>;
}
