use catalog_app::{auth::JwtConfig, context::AppContext, domain::users::models::Password};
use clap::Args;
use jiff::{SignedDuration, Timestamp};

#[derive(Debug, Args)]
pub(crate) struct IssueTokenArgs {
    /// SQLite connection string
    #[arg(long, env = "DATABASE_URL", default_value = "sqlite://catalog.db")]
    database_url: String,

    /// Secret used to sign access tokens
    #[arg(long, env = "JWT_SECRET", hide_env_values = true)]
    jwt_secret: String,

    /// Access token lifetime in seconds
    #[arg(long, env = "JWT_EXPIRES_IN", default_value_t = 300)]
    jwt_expires_in: u32,

    /// Login email
    #[arg(long)]
    email: String,

    /// Login password
    #[arg(long)]
    password: String,
}

pub(crate) async fn run(args: IssueTokenArgs) -> Result<(), String> {
    let jwt = JwtConfig::new(
        args.jwt_secret.as_bytes(),
        SignedDuration::from_secs(i64::from(args.jwt_expires_in)),
    );

    let app = AppContext::from_database_url(&args.database_url, jwt)
        .await
        .map_err(|error| format!("failed to initialise app: {error}"))?;

    let issued = app
        .auth
        .login(&args.email, &Password::from(args.password))
        .await
        .map_err(|error| format!("failed to issue token: {error}"))?;

    let expires_at = Timestamp::from_second(issued.claims.exp)
        .map_err(|error| format!("invalid token expiry: {error}"))?;

    println!("user_uuid: {}", issued.claims.sub);
    println!("token_expires_at: {expires_at}");
    println!("access_token: {}", issued.access_token);

    Ok(())
}
