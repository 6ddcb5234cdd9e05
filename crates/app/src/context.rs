//! App Context

use std::sync::Arc;

use sqlx::migrate::MigrateError;
use thiserror::Error;

use crate::{
    auth::{AuthService, JwtAuthService, JwtConfig},
    database::{self, Db},
    domain::{
        products::{ProductsService, SqliteProductsService},
        users::{SqliteUsersService, UsersService},
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),

    #[error("failed to apply database migrations")]
    Migrate(#[source] MigrateError),
}

#[derive(Clone)]
pub struct AppContext {
    pub products: Arc<dyn ProductsService>,
    pub users: Arc<dyn UsersService>,
    pub auth: Arc<dyn AuthService>,
}

impl AppContext {
    /// Build application context from a database URL, applying pending migrations.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection or migrating fails.
    pub async fn from_database_url(url: &str, jwt: JwtConfig) -> Result<Self, AppInitError> {
        let pool = database::connect(url)
            .await
            .map_err(AppInitError::Database)?;

        database::migrate(&pool)
            .await
            .map_err(AppInitError::Migrate)?;

        Ok(Self::from_db(&Db::new(pool), jwt))
    }

    #[must_use]
    pub fn from_db(db: &Db, jwt: JwtConfig) -> Self {
        let users: Arc<dyn UsersService> = Arc::new(SqliteUsersService::new(db.clone()));

        Self {
            products: Arc::new(SqliteProductsService::new(db.clone())),
            auth: Arc::new(JwtAuthService::new(Arc::clone(&users), jwt)),
            users,
        }
    }
}
