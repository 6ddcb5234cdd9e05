use catalog_app::{
    database::{self, Db},
    domain::users::{
        SqliteUsersService, UsersService,
        models::{Password, User},
    },
};
use clap::Args;

#[derive(Debug, Args)]
pub(crate) struct CreateUserArgs {
    /// SQLite connection string
    #[arg(long, env = "DATABASE_URL", default_value = "sqlite://catalog.db")]
    database_url: String,

    /// User display name
    #[arg(long)]
    name: String,

    /// Login email, unique per user
    #[arg(long)]
    email: String,

    /// Plaintext password; only its hash is stored
    #[arg(long)]
    password: String,
}

pub(crate) async fn run(args: CreateUserArgs) -> Result<(), String> {
    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    database::migrate(&pool)
        .await
        .map_err(|error| format!("failed to apply migrations: {error}"))?;

    let service = SqliteUsersService::new(Db::new(pool));

    let user = create_user(
        &service,
        args.name,
        args.email,
        Password::from(args.password),
    )
    .await?;

    println!("user_uuid: {}", user.uuid);
    println!("user_name: {}", user.name);
    println!("user_email: {}", user.email);

    Ok(())
}

/// Store a new user and read it back as persisted.
async fn create_user(
    users: &dyn UsersService,
    name: String,
    email: String,
    password: Password,
) -> Result<User, String> {
    let user = User::register(name, email, password)
        .await
        .map_err(|error| format!("invalid user: {error}"))?;

    let created = users
        .create_user(user)
        .await
        .map_err(|error| format!("failed to create user: {error}"))?;

    users
        .get_user(created.uuid)
        .await
        .map_err(|error| format!("failed to read back user {}: {error}", created.uuid))
}
