//! Shared handler state

use std::sync::Arc;

use catalog_app::context::AppContext;

/// Services available to every handler through the depot.
pub(crate) struct State {
    pub(crate) app: AppContext,
}

impl State {
    #[must_use]
    pub(crate) fn from_app_context(app: AppContext) -> Arc<Self> {
        Arc::new(Self { app })
    }
}
