//! Auth service errors.

use thiserror::Error;
use tokio::task::JoinError;

use crate::{auth::TokenError, domain::users::UsersServiceError};

#[derive(Debug, Error)]
pub enum AuthServiceError {
    #[error("user not found")]
    UserNotFound,

    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("password verification task failed")]
    Verify(#[source] JoinError),

    #[error("invalid token")]
    InvalidToken(#[source] TokenError),

    #[error("failed to issue token")]
    Issue(#[source] TokenError),

    #[error("user lookup failed")]
    Users(#[from] UsersServiceError),
}
