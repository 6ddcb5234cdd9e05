//! User Errors

use salvo::http::StatusError;
use tracing::error;

use catalog_app::{
    auth::AuthServiceError,
    domain::users::{UsersServiceError, models::UserError},
};

pub(crate) fn into_status_error(error: UsersServiceError) -> StatusError {
    match error {
        UsersServiceError::AlreadyExists => StatusError::conflict().brief("user already exists"),
        UsersServiceError::NotFound => StatusError::not_found().brief("user not found"),
        UsersServiceError::Invalid(error) => invalid_user(error),
        UsersServiceError::MissingRequiredData | UsersServiceError::InvalidData => {
            StatusError::bad_request().brief("invalid user payload")
        }
        UsersServiceError::Sql(source) => {
            error!("user storage failure: {source}");

            StatusError::internal_server_error()
        }
    }
}

pub(crate) fn invalid_user(error: UserError) -> StatusError {
    match error {
        error @ UserError::PasswordRequired => {
            StatusError::bad_request().brief(error.to_string())
        }
        UserError::Hash(source) => {
            error!("failed to hash password: {source}");

            StatusError::internal_server_error()
        }
        UserError::Blocking(source) => {
            error!("password hashing task failed: {source}");

            StatusError::internal_server_error()
        }
    }
}

pub(crate) fn login_error(error: AuthServiceError) -> StatusError {
    match error {
        AuthServiceError::UserNotFound => StatusError::not_found().brief("user not found"),
        AuthServiceError::InvalidCredentials => {
            StatusError::unauthorized().brief("invalid credentials")
        }
        AuthServiceError::InvalidToken(source) | AuthServiceError::Issue(source) => {
            error!("failed to issue access token: {source}");

            StatusError::internal_server_error()
        }
        AuthServiceError::Verify(source) => {
            error!("password verification task failed: {source}");

            StatusError::internal_server_error()
        }
        AuthServiceError::Users(source) => {
            error!("failed to look up user: {source}");

            StatusError::internal_server_error()
        }
    }
}
