//! Depot helper extensions.

use std::any::Any;

use catalog_app::auth::Claims;
use salvo::prelude::{Depot, StatusError};

/// Helpers for mapping depot extraction failures to HTTP errors.
pub(crate) trait DepotExt {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError>;

    /// Store the claims of the authenticated caller.
    fn insert_claims(&mut self, claims: Claims);

    fn claims_or_401(&self) -> Result<&Claims, StatusError>;
}

impl DepotExt for Depot {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError> {
        self.obtain::<T>()
            .map_err(|_ignored| StatusError::internal_server_error())
    }

    fn insert_claims(&mut self, claims: Claims) {
        self.inject(claims);
    }

    fn claims_or_401(&self) -> Result<&Claims, StatusError> {
        self.obtain::<Claims>()
            .map_err(|_ignored| StatusError::unauthorized().brief("missing credentials"))
    }
}
