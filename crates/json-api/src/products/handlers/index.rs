//! Product Index Handler

use std::sync::Arc;

use salvo::{oapi::extract::QueryParam, prelude::*};

use catalog_app::domain::products::data::{PageRequest, SortOrder};

use crate::{
    extensions::*,
    products::{errors::into_status_error, get::ProductResponse},
    state::State,
};

/// Product Index Handler
///
/// Returns products in creation order. Pagination applies only when both
/// `page` and `limit` parse as positive numbers; `sort=desc` reverses the order.
#[endpoint(
    tags("products"),
    summary = "List Products",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Products listed"),
    ),
)]
pub(crate) async fn handler(
    page: QueryParam<String, false>,
    limit: QueryParam<String, false>,
    sort: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<Vec<ProductResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let page = PageRequest::from_query(page.parse_or_none("page"), limit.parse_or_none("limit"));
    let sort = SortOrder::from_query(sort.into_inner().as_deref());

    let products = state
        .app
        .products
        .list_products(page, sort)
        .await
        .map_err(into_status_error)?;

    Ok(Json(products.into_iter().map(Into::into).collect()))
}
