//! Products Repository

use sqlx::{FromRow, Row, Sqlite, Transaction, query, query_as, sqlite::SqliteRow};

use crate::{
    database::try_get_timestamp,
    domain::products::{
        data::{PageRequest, SortOrder},
        models::{Product, ProductUuid},
    },
};

const LIST_PRODUCTS_ASC_SQL: &str = include_str!("sql/list_products_asc.sql");
const LIST_PRODUCTS_DESC_SQL: &str = include_str!("sql/list_products_desc.sql");
const GET_PRODUCT_SQL: &str = include_str!("sql/get_product.sql");
const CREATE_PRODUCT_SQL: &str = include_str!("sql/create_product.sql");
const UPDATE_PRODUCT_SQL: &str = include_str!("sql/update_product.sql");
const DELETE_PRODUCT_SQL: &str = include_str!("sql/delete_product.sql");

/// `SQLite` treats a negative limit as "no limit".
const NO_LIMIT: i64 = -1;

#[derive(Debug, Clone, Default)]
pub(crate) struct SqliteProductsRepository;

impl SqliteProductsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_products(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        page: Option<PageRequest>,
        sort: SortOrder,
    ) -> Result<Vec<Product>, sqlx::Error> {
        let sql = match sort {
            SortOrder::Ascending => LIST_PRODUCTS_ASC_SQL,
            SortOrder::Descending => LIST_PRODUCTS_DESC_SQL,
        };

        let (limit, offset) = page.map_or((NO_LIMIT, 0), |page| {
            (
                i64::from(page.limit()),
                i64::try_from(page.offset()).unwrap_or(i64::MAX),
            )
        });

        query_as::<Sqlite, Product>(sql)
            .bind(limit)
            .bind(offset)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn get_product(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        product: ProductUuid,
    ) -> Result<Product, sqlx::Error> {
        query_as::<Sqlite, Product>(GET_PRODUCT_SQL)
            .bind(product.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn create_product(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        product: &Product,
    ) -> Result<Product, sqlx::Error> {
        query_as::<Sqlite, Product>(CREATE_PRODUCT_SQL)
            .bind(product.uuid.into_uuid())
            .bind(&product.name)
            .bind(product.price)
            .bind(product.created_at.to_string())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn update_product(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        product: &Product,
    ) -> Result<Product, sqlx::Error> {
        query_as::<Sqlite, Product>(UPDATE_PRODUCT_SQL)
            .bind(product.uuid.into_uuid())
            .bind(&product.name)
            .bind(product.price)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn delete_product(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        product: ProductUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_PRODUCT_SQL)
            .bind(product.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Product {
    fn from_row(row: &'r SqliteRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: ProductUuid::from_uuid(row.try_get("id")?),
            name: row.try_get("name")?,
            price: row.try_get("price")?,
            created_at: try_get_timestamp(row, "created_at")?,
        })
    }
}
