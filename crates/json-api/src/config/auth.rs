//! Auth Config

use clap::{Args, builder::NonEmptyStringValueParser};
use jiff::SignedDuration;

use catalog_app::auth::JwtConfig;

/// Access token signing settings.
#[derive(Args)]
pub struct AuthConfig {
    /// Secret used to sign and verify access tokens
    #[arg(
        long,
        env = "JWT_SECRET",
        hide_env_values = true,
        value_parser = NonEmptyStringValueParser::new()
    )]
    pub jwt_secret: String,

    /// Access token lifetime in seconds
    #[arg(long, env = "JWT_EXPIRES_IN", default_value_t = 300)]
    pub jwt_expires_in: u32,
}

impl AuthConfig {
    /// Build the token signing settings.
    #[must_use]
    pub fn jwt_config(&self) -> JwtConfig {
        JwtConfig::new(
            self.jwt_secret.as_bytes(),
            SignedDuration::from_secs(i64::from(self.jwt_expires_in)),
        )
    }
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &"**redacted**")
            .field("jwt_expires_in", &self.jwt_expires_in)
            .finish()
    }
}
