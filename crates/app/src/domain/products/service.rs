//! Products service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::products::{
        data::{PageRequest, SortOrder},
        errors::ProductsServiceError,
        models::{Product, ProductUpdate, ProductUuid},
        repository::SqliteProductsRepository,
    },
};

#[derive(Debug, Clone)]
pub struct SqliteProductsService {
    db: Db,
    repository: SqliteProductsRepository,
}

impl SqliteProductsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: SqliteProductsRepository::new(),
        }
    }
}

#[async_trait]
impl ProductsService for SqliteProductsService {
    async fn list_products(
        &self,
        page: Option<PageRequest>,
        sort: SortOrder,
    ) -> Result<Vec<Product>, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let products = self.repository.list_products(&mut tx, page, sort).await?;

        tx.commit().await?;

        Ok(products)
    }

    async fn get_product(&self, product: ProductUuid) -> Result<Product, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let product = self.repository.get_product(&mut tx, product).await?;

        tx.commit().await?;

        Ok(product)
    }

    async fn create_product(&self, product: Product) -> Result<Product, ProductsServiceError> {
        product.validate()?;

        let mut tx = self.db.begin().await?;

        let created = self.repository.create_product(&mut tx, &product).await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn update_product(
        &self,
        product: ProductUuid,
        update: ProductUpdate,
    ) -> Result<Product, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let mut existing = self.repository.get_product(&mut tx, product).await?;

        existing.apply(update)?;

        let updated = self.repository.update_product(&mut tx, &existing).await?;

        tx.commit().await?;

        Ok(updated)
    }

    async fn delete_product(&self, product: ProductUuid) -> Result<(), ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let rows_affected = self.repository.delete_product(&mut tx, product).await?;

        if rows_affected == 0 {
            return Err(ProductsServiceError::NotFound);
        }

        tx.commit().await?;

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Retrieves products in insertion order, optionally one page at a time.
    async fn list_products(
        &self,
        page: Option<PageRequest>,
        sort: SortOrder,
    ) -> Result<Vec<Product>, ProductsServiceError>;

    /// Retrieve a single product.
    async fn get_product(&self, product: ProductUuid) -> Result<Product, ProductsServiceError>;

    /// Persists a new product.
    async fn create_product(&self, product: Product) -> Result<Product, ProductsServiceError>;

    /// Replaces the name and price of an existing product.
    async fn update_product(
        &self,
        product: ProductUuid,
        update: ProductUpdate,
    ) -> Result<Product, ProductsServiceError>;

    /// Deletes a product with the given UUID.
    async fn delete_product(&self, product: ProductUuid) -> Result<(), ProductsServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{domain::products::models::ProductError, test::TestContext};

    use super::*;

    async fn seed_products(
        ctx: &TestContext,
        count: usize,
    ) -> Result<Vec<Product>, ProductsServiceError> {
        let mut created = Vec::with_capacity(count);

        for index in 1..=count {
            let product = Product::new(format!("Product {index}"), 10.0)?;

            created.push(ctx.products.create_product(product).await?);
        }

        Ok(created)
    }

    fn names(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.name.as_str()).collect()
    }

    #[tokio::test]
    async fn create_then_get_returns_equal_product() -> TestResult {
        let ctx = TestContext::new().await?;
        let product = Product::new("Product 1", 10.5)?;

        let created = ctx.products.create_product(product.clone()).await?;
        let fetched = ctx.products.get_product(product.uuid).await?;

        assert_eq!(created, product);
        assert_eq!(fetched, product);

        Ok(())
    }

    #[tokio::test]
    async fn create_product_rejects_invalid_product() -> TestResult {
        let ctx = TestContext::new().await?;
        let mut product = Product::new("Product 1", 10.0)?;

        product.price = -1.0;

        let result = ctx.products.create_product(product).await;

        assert!(
            matches!(
                result,
                Err(ProductsServiceError::Invalid(ProductError::InvalidPrice))
            ),
            "expected InvalidPrice, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn create_product_duplicate_uuid_returns_already_exists() -> TestResult {
        let ctx = TestContext::new().await?;
        let product = Product::new("Product 1", 10.0)?;

        ctx.products.create_product(product.clone()).await?;

        let result = ctx.products.create_product(product).await;

        assert!(
            matches!(result, Err(ProductsServiceError::AlreadyExists)),
            "expected AlreadyExists, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn get_product_unknown_uuid_returns_not_found() -> TestResult {
        let ctx = TestContext::new().await?;

        let result = ctx.products.get_product(ProductUuid::new()).await;

        assert!(
            matches!(result, Err(ProductsServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn list_products_empty_when_none_created() -> TestResult {
        let ctx = TestContext::new().await?;

        let products = ctx
            .products
            .list_products(PageRequest::new(1, 10), SortOrder::Ascending)
            .await?;

        assert!(products.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn list_products_without_page_returns_everything_in_order() -> TestResult {
        let ctx = TestContext::new().await?;
        let created = seed_products(&ctx, 5).await?;

        let ascending = ctx
            .products
            .list_products(None, SortOrder::Ascending)
            .await?;
        let descending = ctx
            .products
            .list_products(None, SortOrder::Descending)
            .await?;

        assert_eq!(ascending, created);
        assert_eq!(descending, created.iter().rev().cloned().collect::<Vec<_>>());

        Ok(())
    }

    #[tokio::test]
    async fn list_products_pages_through_ascending_insertion_order() -> TestResult {
        let ctx = TestContext::new().await?;
        seed_products(&ctx, 23).await?;

        let first = ctx
            .products
            .list_products(PageRequest::new(1, 10), SortOrder::Ascending)
            .await?;
        let second = ctx
            .products
            .list_products(PageRequest::new(2, 10), SortOrder::Ascending)
            .await?;
        let third = ctx
            .products
            .list_products(PageRequest::new(3, 10), SortOrder::Ascending)
            .await?;
        let fourth = ctx
            .products
            .list_products(PageRequest::new(4, 10), SortOrder::Ascending)
            .await?;

        assert_eq!(first.len(), 10);
        assert_eq!(first.first().map(|p| p.name.as_str()), Some("Product 1"));
        assert_eq!(first.last().map(|p| p.name.as_str()), Some("Product 10"));

        assert_eq!(second.len(), 10);
        assert_eq!(second.first().map(|p| p.name.as_str()), Some("Product 11"));
        assert_eq!(second.last().map(|p| p.name.as_str()), Some("Product 20"));

        assert_eq!(names(&third), vec!["Product 21", "Product 22", "Product 23"]);
        assert!(fourth.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn list_products_pages_through_descending_insertion_order() -> TestResult {
        let ctx = TestContext::new().await?;
        seed_products(&ctx, 23).await?;

        let first = ctx
            .products
            .list_products(PageRequest::new(1, 10), SortOrder::Descending)
            .await?;
        let third = ctx
            .products
            .list_products(PageRequest::new(3, 10), SortOrder::Descending)
            .await?;

        assert_eq!(first.len(), 10);
        assert_eq!(first.first().map(|p| p.name.as_str()), Some("Product 23"));
        assert_eq!(first.last().map(|p| p.name.as_str()), Some("Product 14"));

        assert_eq!(names(&third), vec!["Product 3", "Product 2", "Product 1"]);

        Ok(())
    }

    #[tokio::test]
    async fn update_product_replaces_name_and_price() -> TestResult {
        let ctx = TestContext::new().await?;
        let product = ctx
            .products
            .create_product(Product::new("Product 1", 10.0)?)
            .await?;

        let updated = ctx
            .products
            .update_product(
                product.uuid,
                ProductUpdate {
                    name: "Product Updated".to_string(),
                    price: 20.0,
                },
            )
            .await?;

        assert_eq!(updated.uuid, product.uuid);
        assert_eq!(updated.created_at, product.created_at);
        assert_eq!(updated.name, "Product Updated");
        assert!((updated.price - 20.0).abs() < f64::EPSILON);

        let fetched = ctx.products.get_product(product.uuid).await?;

        assert_eq!(fetched, updated);

        Ok(())
    }

    #[tokio::test]
    async fn update_product_rejects_invalid_update() -> TestResult {
        let ctx = TestContext::new().await?;
        let product = ctx
            .products
            .create_product(Product::new("Product 1", 10.0)?)
            .await?;

        let result = ctx
            .products
            .update_product(
                product.uuid,
                ProductUpdate {
                    name: String::new(),
                    price: 20.0,
                },
            )
            .await;

        assert!(
            matches!(
                result,
                Err(ProductsServiceError::Invalid(ProductError::NameRequired))
            ),
            "expected NameRequired, got {result:?}"
        );

        let fetched = ctx.products.get_product(product.uuid).await?;

        assert_eq!(fetched, product);

        Ok(())
    }

    #[tokio::test]
    async fn update_product_unknown_uuid_returns_not_found() -> TestResult {
        let ctx = TestContext::new().await?;

        let result = ctx
            .products
            .update_product(
                ProductUuid::new(),
                ProductUpdate {
                    name: "Product 1".to_string(),
                    price: 10.0,
                },
            )
            .await;

        assert!(
            matches!(result, Err(ProductsServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn delete_product_makes_it_not_found() -> TestResult {
        let ctx = TestContext::new().await?;
        let product = ctx
            .products
            .create_product(Product::new("Product 1", 10.0)?)
            .await?;

        ctx.products.delete_product(product.uuid).await?;

        let result = ctx.products.get_product(product.uuid).await;

        assert!(
            matches!(result, Err(ProductsServiceError::NotFound)),
            "expected NotFound after deletion, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn delete_product_unknown_uuid_returns_not_found() -> TestResult {
        let ctx = TestContext::new().await?;

        let result = ctx.products.delete_product(ProductUuid::new()).await;

        assert!(
            matches!(result, Err(ProductsServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );

        Ok(())
    }
}
