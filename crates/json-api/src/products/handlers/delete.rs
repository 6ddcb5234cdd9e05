//! Delete Product Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    extensions::*,
    products::{errors::into_status_error, get::parse_product_uuid},
    state::State,
};

/// Delete Product Handler
#[endpoint(
    tags("products"),
    summary = "Delete Product",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Product deleted"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "products.delete",
    skip(id, depot),
    fields(user_uuid = tracing::field::Empty, product_uuid = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    id: PathParam<String>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let claims = depot.claims_or_401()?;
    let product = parse_product_uuid(&id.into_inner())?;

    let span = tracing::Span::current();

    span.record("user_uuid", tracing::field::display(claims.sub));
    span.record("product_uuid", tracing::field::display(product));

    state
        .app
        .products
        .delete_product(product)
        .await
        .map_err(into_status_error)?;

    tracing::info!(product_uuid = %product, "deleted product");

    Ok(StatusCode::OK)
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use catalog_app::domain::products::{
        MockProductsService, ProductsServiceError, models::ProductUuid,
    };

    use crate::{errors::ErrorResponse, test_helpers::products_service};

    use super::*;

    fn make_service(repo: MockProductsService) -> Service {
        products_service(repo, Router::with_path("product/{id}").delete(handler))
    }

    #[tokio::test]
    async fn test_delete_product_success() -> TestResult {
        let uuid = ProductUuid::new();

        let mut repo = MockProductsService::new();

        repo.expect_delete_product()
            .once()
            .withf(move |u| *u == uuid)
            .return_once(|_| Ok(()));

        repo.expect_get_product().never();
        repo.expect_list_products().never();
        repo.expect_create_product().never();
        repo.expect_update_product().never();

        let mut res = TestClient::delete(format!("http://example.com/product/{uuid}"))
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert!(res.take_string().await?.is_empty(), "body should be empty");

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_missing_product_returns_404() -> TestResult {
        let uuid = ProductUuid::new();

        let mut repo = MockProductsService::new();

        repo.expect_delete_product()
            .once()
            .withf(move |u| *u == uuid)
            .return_once(|_| Err(ProductsServiceError::NotFound));

        repo.expect_get_product().never();
        repo.expect_list_products().never();
        repo.expect_create_product().never();
        repo.expect_update_product().never();

        let mut res = TestClient::delete(format!("http://example.com/product/{uuid}"))
            .send(&make_service(repo))
            .await;

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
        assert_eq!(body.message, "product not found");

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_malformed_id_returns_400() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_delete_product().never();
        repo.expect_get_product().never();
        repo.expect_list_products().never();
        repo.expect_create_product().never();
        repo.expect_update_product().never();

        let res = TestClient::delete("http://example.com/product/not-an-id")
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
