//! Auth service.

use std::{fmt, sync::Arc};

use async_trait::async_trait;
use mockall::automock;
use tokio::task;

use crate::{
    auth::{AuthServiceError, Claims, IssuedToken, JwtConfig},
    domain::users::{UsersService, UsersServiceError, models::Password},
};

#[derive(Clone)]
pub struct JwtAuthService {
    users: Arc<dyn UsersService>,
    jwt: JwtConfig,
}

impl JwtAuthService {
    #[must_use]
    pub fn new(users: Arc<dyn UsersService>, jwt: JwtConfig) -> Self {
        Self { users, jwt }
    }
}

impl fmt::Debug for JwtAuthService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtAuthService")
            .field("jwt", &self.jwt)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl AuthService for JwtAuthService {
    async fn login(
        &self,
        email: &str,
        password: &Password,
    ) -> Result<IssuedToken, AuthServiceError> {
        let user = match self.users.find_user_by_email(email).await {
            Ok(user) => user,
            Err(UsersServiceError::NotFound) => return Err(AuthServiceError::UserNotFound),
            Err(error) => return Err(error.into()),
        };

        let candidate = password.clone();

        let user = task::spawn_blocking(move || user.validate_password(&candidate).then_some(user))
            .await
            .map_err(AuthServiceError::Verify)?
            .ok_or(AuthServiceError::InvalidCredentials)?;

        self.jwt.issue(&user).map_err(AuthServiceError::Issue)
    }

    async fn authenticate_bearer(&self, bearer_token: &str) -> Result<Claims, AuthServiceError> {
        self.jwt
            .verify(bearer_token)
            .map_err(AuthServiceError::InvalidToken)
    }
}

#[automock]
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Exchange an email and password for a signed access token.
    async fn login(&self, email: &str, password: &Password)
    -> Result<IssuedToken, AuthServiceError>;

    async fn authenticate_bearer(&self, bearer_token: &str) -> Result<Claims, AuthServiceError>;
}
