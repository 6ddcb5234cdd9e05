//! Product Errors

use salvo::http::StatusError;
use tracing::error;

use catalog_app::domain::products::{ProductsServiceError, models::ProductError};

pub(crate) fn into_status_error(error: ProductsServiceError) -> StatusError {
    match error {
        ProductsServiceError::AlreadyExists => {
            StatusError::conflict().brief("product already exists")
        }
        ProductsServiceError::NotFound => StatusError::not_found().brief("product not found"),
        ProductsServiceError::Invalid(error) => invalid_product(error),
        ProductsServiceError::InvalidReference
        | ProductsServiceError::MissingRequiredData
        | ProductsServiceError::InvalidData => {
            StatusError::bad_request().brief("invalid product payload")
        }
        ProductsServiceError::Sql(source) => {
            error!("product storage failure: {source}");

            StatusError::internal_server_error()
        }
    }
}

pub(crate) fn invalid_product(error: ProductError) -> StatusError {
    StatusError::bad_request().brief(error.to_string())
}
