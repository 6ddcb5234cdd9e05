//! JWT issuance and verification.

use std::fmt;

use jiff::{SignedDuration, Timestamp};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::domain::users::models::{User, UserUuid};

/// Claims every checked token must carry.
const REQUIRED_CLAIMS: [&str; 3] = ["exp", "iat", "sub"];

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("failed to sign token")]
    Encode(#[source] jsonwebtoken::errors::Error),

    #[error("token is invalid or expired")]
    Invalid(#[source] jsonwebtoken::errors::Error),
}

/// Token claims, with `iat` and `exp` in Unix seconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub email: String,
    pub name: String,
    pub iat: i64,
    pub exp: i64,
}

impl Claims {
    #[must_use]
    pub fn new(user: &User, issued_at: Timestamp, expires_in: SignedDuration) -> Self {
        let iat = issued_at.as_second();

        Self {
            sub: user.uuid.into_uuid(),
            email: user.email.clone(),
            name: user.name.clone(),
            iat,
            exp: iat.saturating_add(expires_in.as_secs()),
        }
    }

    #[must_use]
    pub fn user_uuid(&self) -> UserUuid {
        UserUuid::from_uuid(self.sub)
    }
}

/// A freshly signed access token.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub access_token: String,
    pub claims: Claims,
}

/// HS256 signing settings.
#[derive(Clone)]
pub struct JwtConfig {
    encoding: EncodingKey,
    decoding: DecodingKey,
    expires_in: SignedDuration,
}

impl JwtConfig {
    #[must_use]
    pub fn new(secret: &[u8], expires_in: SignedDuration) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            expires_in,
        }
    }

    /// Sign a token for `user`, valid from now for the configured lifetime.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::Encode`] when signing fails.
    pub fn issue(&self, user: &User) -> Result<IssuedToken, TokenError> {
        let claims = Claims::new(user, Timestamp::now(), self.expires_in);

        let access_token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(TokenError::Encode)?;

        Ok(IssuedToken {
            access_token,
            claims,
        })
    }

    /// Check the signature and expiry of `token` and return its claims.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::Invalid`] for a malformed, forged or expired token.
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);

        validation.leeway = 0;
        validation.set_required_spec_claims(&REQUIRED_CLAIMS);

        decode::<Claims>(token, &self.decoding, &validation)
            .map(|data| data.claims)
            .map_err(TokenError::Invalid)
    }
}

impl fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"**redacted**")
            .field("expires_in", &self.expires_in)
            .finish()
    }
}
