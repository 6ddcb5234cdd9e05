//! Login Handler

use std::{fmt, sync::Arc};

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use catalog_app::domain::users::models::Password;

use crate::{extensions::*, state::State, users::errors::login_error};

/// Login Request
#[derive(Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub(crate) struct LoginRequest {
    /// The user's email address
    pub email: String,

    /// The user's password
    pub password: String,
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("password", &"**redacted**")
            .finish()
    }
}

/// Token Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct TokenResponse {
    /// Signed bearer token for the product endpoints
    pub access_token: String,
}

/// Login Handler
///
/// Exchanges an email and password for a signed access token.
#[endpoint(
    tags("users"),
    summary = "Login",
    responses(
        (status_code = StatusCode::OK, description = "Token issued"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Invalid credentials"),
        (status_code = StatusCode::NOT_FOUND, description = "User not found"),
    ),
)]
#[tracing::instrument(
    name = "users.login",
    skip(json, depot),
    fields(user_uuid = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    json: JsonBody<LoginRequest>,
    depot: &mut Depot,
) -> Result<Json<TokenResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let request = json.into_inner();

    let password = Password::from(request.password);

    let token = state
        .app
        .auth
        .login(&request.email, &password)
        .await
        .map_err(login_error)?;

    tracing::Span::current().record("user_uuid", tracing::field::display(token.claims.sub));

    Ok(Json(TokenResponse {
        access_token: token.access_token,
    }))
}
