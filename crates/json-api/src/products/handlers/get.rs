//! Get Product Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use catalog_app::domain::products::models::{Product, ProductUuid};

use crate::{extensions::*, products::errors::into_status_error, state::State};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductResponse {
    /// The unique identifier of the product
    pub id: Uuid,

    /// The product name
    pub name: String,

    /// The product price
    pub price: f64,

    /// The date and time the product was created
    pub created_at: String,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        ProductResponse {
            id: product.uuid.into(),
            name: product.name,
            price: product.price,
            created_at: product.created_at.to_string(),
        }
    }
}

/// Parse a product identifier path segment.
pub(crate) fn parse_product_uuid(id: &str) -> Result<ProductUuid, StatusError> {
    ProductUuid::parse(id).or_400("invalid id")
}

/// Get Product Handler
///
/// Returns a product.
#[endpoint(
    tags("products"),
    summary = "Get Product",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Product found"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Malformed product id"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<ProductResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let product = parse_product_uuid(&id.into_inner())?;

    let product = state
        .app
        .products
        .get_product(product)
        .await
        .map_err(into_status_error)?;

    Ok(Json(product.into()))
}
