use sea_orm::DatabaseConnection;
use time::Duration;
use tower_sessions::{Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::{
    model::user::CreateOrUpdateUserDto,
    server::{
        config::{AdminSeed, Config},
        data::user::UserRepository,
        error::AppError,
        model::user::RegisterUserParams,
        service::user::UserService,
    },
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then runs all pending SeaORM migrations so the schema is up-to-date
/// before the first request is served.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the session layer on top of the application's database pool.
///
/// Sessions are kept in the `tower_sessions` table, created here if missing, and expire
/// after seven days without activity.
pub async fn connect_to_session(
    db: &DatabaseConnection,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let pool = db.get_sqlite_connection_pool();
    let session_store = SqliteStore::new(pool.clone());

    session_store.migrate().await?;

    Ok(SessionManagerLayer::new(session_store)
        .with_secure(false)
        .with_expiry(Expiry::OnInactivity(Duration::days(7))))
}

/// Creates the configured administrator unless an admin account already exists.
///
/// # Returns
/// - `Ok(true)` - The administrator was created
/// - `Ok(false)` - Nothing to seed, or an admin already exists
pub async fn seed_admin(
    db: &DatabaseConnection,
    seed: Option<&AdminSeed>,
) -> Result<bool, AppError> {
    let Some(seed) = seed else {
        return Ok(false);
    };

    if UserRepository::new(db).admin_exists().await? {
        return Ok(false);
    }

    let params = RegisterUserParams::from_dto(CreateOrUpdateUserDto {
        name: seed.name.clone(),
        email: seed.email.clone(),
        password: Some(seed.password.clone()),
        is_admin: true,
    })?;
    let admin = UserService::new(db).register(params).await?;

    tracing::info!("Seeded administrator account {}", admin.email);

    Ok(true)
}
