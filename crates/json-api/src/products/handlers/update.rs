//! Update Product Handler

use std::sync::Arc;

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};

use catalog_app::domain::products::models::ProductUpdate;

use crate::{
    extensions::*,
    products::{
        errors::into_status_error,
        get::{ProductResponse, parse_product_uuid},
    },
    state::State,
};

/// Update Product Request
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub(crate) struct UpdateProductRequest {
    /// The new product name
    pub name: String,

    /// The new product price, strictly positive
    pub price: f64,
}

impl From<UpdateProductRequest> for ProductUpdate {
    fn from(request: UpdateProductRequest) -> Self {
        ProductUpdate {
            name: request.name,
            price: request.price,
        }
    }
}

/// Update Product Handler
///
/// Replaces the name and price of a product. Identity and creation time are
/// preserved.
#[endpoint(
    tags("products"),
    summary = "Update Product",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Product updated"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
    ),
)]
#[tracing::instrument(
    name = "products.update",
    skip(id, json, depot),
    fields(user_uuid = tracing::field::Empty, product_uuid = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    id: PathParam<String>,
    json: JsonBody<UpdateProductRequest>,
    depot: &mut Depot,
) -> Result<Json<ProductResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let claims = depot.claims_or_401()?;
    let product = parse_product_uuid(&id.into_inner())?;

    let span = tracing::Span::current();

    span.record("user_uuid", tracing::field::display(claims.sub));
    span.record("product_uuid", tracing::field::display(product));

    let product = state
        .app
        .products
        .update_product(product, json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    tracing::info!(product_uuid = %product.uuid, "updated product");

    Ok(Json(product.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use catalog_app::domain::products::{
        MockProductsService, ProductsServiceError,
        models::{ProductError, ProductUuid},
    };

    use crate::{
        errors::ErrorResponse,
        test_helpers::{make_product, products_service},
    };

    use super::*;

    fn make_service(repo: MockProductsService) -> Service {
        products_service(repo, Router::with_path("product/{id}").put(handler))
    }

    #[tokio::test]
    async fn test_update_product_success() -> TestResult {
        let mut repo = MockProductsService::new();
        let uuid = ProductUuid::new();

        repo.expect_update_product()
            .once()
            .withf(move |u, update| {
                *u == uuid && update.name == "Updated product" && (update.price - 5.0).abs() < 1e-9
            })
            .return_once(move |_, update| {
                let mut product = make_product(uuid);

                product.name = update.name;
                product.price = update.price;

                Ok(product)
            });

        repo.expect_list_products().never();
        repo.expect_get_product().never();
        repo.expect_create_product().never();
        repo.expect_delete_product().never();

        let mut res = TestClient::put(format!("http://example.com/product/{uuid}"))
            .json(&json!({ "name": "Updated product", "price": 5.0 }))
            .send(&make_service(repo))
            .await;

        let body: ProductResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.id, uuid.into_uuid());
        assert_eq!(body.name, "Updated product");
        assert_eq!(body.created_at, "1970-01-01T00:00:00Z");

        Ok(())
    }

    #[tokio::test]
    async fn test_update_missing_product_returns_404() -> TestResult {
        let mut repo = MockProductsService::new();
        let uuid = ProductUuid::new();

        repo.expect_update_product()
            .once()
            .return_once(|_, _| Err(ProductsServiceError::NotFound));

        repo.expect_list_products().never();
        repo.expect_get_product().never();
        repo.expect_create_product().never();
        repo.expect_delete_product().never();

        let mut res = TestClient::put(format!("http://example.com/product/{uuid}"))
            .json(&json!({ "name": "Updated product", "price": 5.0 }))
            .send(&make_service(repo))
            .await;

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
        assert_eq!(body.message, "product not found");

        Ok(())
    }

    #[tokio::test]
    async fn test_update_invalid_price_returns_400() -> TestResult {
        let mut repo = MockProductsService::new();
        let uuid = ProductUuid::new();

        repo.expect_update_product()
            .once()
            .return_once(|_, _| Err(ProductsServiceError::Invalid(ProductError::InvalidPrice)));

        repo.expect_list_products().never();
        repo.expect_get_product().never();
        repo.expect_create_product().never();
        repo.expect_delete_product().never();

        let mut res = TestClient::put(format!("http://example.com/product/{uuid}"))
            .json(&json!({ "name": "Updated product", "price": -5.0 }))
            .send(&make_service(repo))
            .await;

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(body.message, "invalid price");

        Ok(())
    }

    #[tokio::test]
    async fn test_update_malformed_id_returns_400() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_update_product().never();
        repo.expect_list_products().never();
        repo.expect_get_product().never();
        repo.expect_create_product().never();
        repo.expect_delete_product().never();

        let mut res = TestClient::put("http://example.com/product/not-a-uuid")
            .json(&json!({ "name": "Updated product", "price": 5.0 }))
            .send(&make_service(repo))
            .await;

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(body.message, "invalid id");

        Ok(())
    }
}
