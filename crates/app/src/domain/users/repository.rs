//! Users Repository

use sqlx::{FromRow, Row, Sqlite, Transaction, query_as, sqlite::SqliteRow};

use crate::domain::users::models::{User, UserUuid};

const CREATE_USER_SQL: &str = include_str!("sql/create_user.sql");
const GET_USER_SQL: &str = include_str!("sql/get_user.sql");
const FIND_USER_BY_EMAIL_SQL: &str = include_str!("sql/find_user_by_email.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct SqliteUsersRepository;

impl SqliteUsersRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn create_user(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        user: &User,
    ) -> Result<User, sqlx::Error> {
        query_as::<Sqlite, User>(CREATE_USER_SQL)
            .bind(user.uuid.into_uuid())
            .bind(&user.name)
            .bind(&user.email)
            .bind(&user.password_hash)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn get_user(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        user: UserUuid,
    ) -> Result<User, sqlx::Error> {
        query_as::<Sqlite, User>(GET_USER_SQL)
            .bind(user.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn find_user_by_email(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        email: &str,
    ) -> Result<User, sqlx::Error> {
        query_as::<Sqlite, User>(FIND_USER_BY_EMAIL_SQL)
            .bind(email)
            .fetch_one(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, SqliteRow> for User {
    fn from_row(row: &'r SqliteRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: UserUuid::from_uuid(row.try_get("id")?),
            name: row.try_get("name")?,
            email: row.try_get("email")?,
            password_hash: row.try_get("password_hash")?,
        })
    }
}
