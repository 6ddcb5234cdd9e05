//! App Router

use salvo::Router;

use crate::{auth, healthcheck, products, users};

/// Public user routes and bearer-protected product routes.
pub(crate) fn app_router() -> Router {
    Router::new()
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(
            Router::with_path("user")
                .post(users::create::handler)
                .push(Router::with_path("login").post(users::login::handler)),
        )
        .push(
            Router::with_path("product")
                .hoop(auth::middleware::handler)
                .get(products::index::handler)
                .post(products::create::handler)
                .push(
                    Router::with_path("{id}")
                        .get(products::get::handler)
                        .put(products::update::handler)
                        .delete(products::delete::handler),
                ),
        )
}
