//! Database connection management

use std::str::FromStr;

use jiff::Timestamp;
use sqlx::{
    Row, Sqlite, SqlitePool, Transaction,
    migrate::MigrateError,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions, SqliteRow},
};

#[derive(Debug, Clone)]
pub struct Db {
    pool: SqlitePool,
}

impl Db {
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Begin a transaction.
    ///
    /// # Errors
    ///
    /// Returns an error when a connection cannot be acquired or the transaction
    /// cannot be started.
    pub async fn begin(&self) -> Result<Transaction<'static, Sqlite>, sqlx::Error> {
        self.pool.begin().await
    }
}

/// Connect to the `SQLite` database file, creating it when missing.
///
/// # Errors
///
/// Returns an error if the URL is invalid or the connection cannot be established.
pub async fn connect(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

    SqlitePoolOptions::new().connect_with(options).await
}

/// Connect to a private in-memory database.
///
/// The pool is pinned to one connection that never expires because every
/// `SQLite` memory connection owns a separate database.
///
/// # Errors
///
/// Returns an error if the connection cannot be established.
pub async fn connect_in_memory() -> Result<SqlitePool, sqlx::Error> {
    SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(SqliteConnectOptions::from_str("sqlite::memory:")?)
        .await
}

/// Apply pending schema migrations.
///
/// # Errors
///
/// Returns an error if a migration fails to apply.
pub async fn migrate(pool: &SqlitePool) -> Result<(), MigrateError> {
    sqlx::migrate!("../../migrations").run(pool).await
}

/// Read an RFC 3339 timestamp column.
pub(crate) fn try_get_timestamp(row: &SqliteRow, column: &str) -> sqlx::Result<Timestamp> {
    let raw: String = row.try_get(column)?;

    raw.parse::<Timestamp>()
        .map_err(|source| sqlx::Error::ColumnDecode {
            index: column.to_string(),
            source: Box::new(source),
        })
}
