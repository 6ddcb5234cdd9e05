//! Test helpers.

use std::sync::Arc;

use catalog_app::{
    auth::{Claims, MockAuthService},
    context::AppContext,
    domain::{
        products::{
            MockProductsService,
            models::{Product, ProductUuid},
        },
        users::MockUsersService,
    },
};
use jiff::Timestamp;
use salvo::{affix_state::inject, prelude::*};
use uuid::Uuid;

use crate::{errors::catcher, extensions::*, state::State};

pub(crate) const TEST_USER_UUID: Uuid = Uuid::nil();

#[salvo::handler]
pub(crate) async fn inject_claims(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    depot.insert_claims(Claims {
        sub: TEST_USER_UUID,
        email: "j@j.com".to_string(),
        name: "John Doe".to_string(),
        iat: 0,
        exp: i64::MAX,
    });

    ctrl.call_next(req, depot, res).await;
}

pub(crate) fn make_product(uuid: ProductUuid) -> Product {
    Product {
        uuid,
        name: "Product 1".to_string(),
        price: 10.0,
        created_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn strict_products_mock() -> MockProductsService {
    let mut products = MockProductsService::new();

    products.expect_list_products().never();
    products.expect_get_product().never();
    products.expect_create_product().never();
    products.expect_update_product().never();
    products.expect_delete_product().never();

    products
}

pub(crate) fn strict_users_mock() -> MockUsersService {
    let mut users = MockUsersService::new();

    users.expect_create_user().never();
    users.expect_get_user().never();
    users.expect_find_user_by_email().never();

    users
}

pub(crate) fn strict_auth_mock() -> MockAuthService {
    let mut auth = MockAuthService::new();

    auth.expect_login().never();
    auth.expect_authenticate_bearer().never();

    auth
}

pub(crate) fn state(
    products: MockProductsService,
    users: MockUsersService,
    auth: MockAuthService,
) -> Arc<State> {
    State::from_app_context(AppContext {
        products: Arc::new(products),
        users: Arc::new(users),
        auth: Arc::new(auth),
    })
}

pub(crate) fn state_with_auth(auth: MockAuthService) -> Arc<State> {
    state(strict_products_mock(), strict_users_mock(), auth)
}

/// Serve `route` as an authenticated caller.
pub(crate) fn products_service(products: MockProductsService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state(products, strict_users_mock(), strict_auth_mock())))
            .hoop(inject_claims)
            .push(route),
    )
    .catcher(catcher())
}

pub(crate) fn users_service(users: MockUsersService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state(strict_products_mock(), users, strict_auth_mock())))
            .push(route),
    )
    .catcher(catcher())
}

pub(crate) fn login_service(auth: MockAuthService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_auth(auth)))
            .push(route),
    )
    .catcher(catcher())
}
