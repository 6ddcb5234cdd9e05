//! Create User Handler

use std::{fmt, sync::Arc};

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use catalog_app::domain::users::models::{Password, User};

use crate::{
    extensions::*,
    state::State,
    users::errors::{into_status_error, invalid_user},
};

/// Create User Request
#[derive(Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub(crate) struct CreateUserRequest {
    /// The user's display name
    pub name: String,

    /// The user's email address, unique across users
    pub email: String,

    /// The plaintext password, must not be empty
    pub password: String,
}

impl fmt::Debug for CreateUserRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CreateUserRequest")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"**redacted**")
            .finish()
    }
}

/// User Response
///
/// The password hash is never returned.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UserResponse {
    /// The unique identifier of the user
    pub id: Uuid,

    /// The user's display name
    pub name: String,

    /// The user's email address
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        UserResponse {
            id: user.uuid.into(),
            name: user.name,
            email: user.email,
        }
    }
}

/// Create User Handler
#[endpoint(
    tags("users"),
    summary = "Create User",
    responses(
        (status_code = StatusCode::CREATED, description = "User created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::CONFLICT, description = "User already exists"),
    ),
)]
#[tracing::instrument(
    name = "users.create",
    skip(json, depot, res),
    fields(user_uuid = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    json: JsonBody<CreateUserRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<UserResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let request = json.into_inner();

    let user = User::register(request.name, request.email, Password::from(request.password))
        .await
        .map_err(invalid_user)?;

    tracing::Span::current().record("user_uuid", tracing::field::display(user.uuid));

    let user = state
        .app
        .users
        .create_user(user)
        .await
        .map_err(into_status_error)?;

    res.status_code(StatusCode::CREATED);

    tracing::info!(user_uuid = %user.uuid, "created user");

    Ok(Json(user.into()))
}
