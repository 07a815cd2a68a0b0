use oauth2::{AuthUrl, ClientId, ClientSecret, RedirectUrl, TokenUrl};
use sea_orm::DatabaseConnection;
use tower_sessions::{Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::{
    model::user::Role,
    server::{
        config::Config,
        data::user::UserRepository,
        error::{config::ConfigError, AppError},
        service::bootstrap::BootstrapCodeService,
        state::OAuth2Client,
    },
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(Error)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the session layer backed by the application database.
///
/// Sessions live in their own table, created on first start, and expire after seven
/// days without a request.
pub async fn connect_to_session(
    db: &DatabaseConnection,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let pool = db.get_sqlite_connection_pool();
    let session_store = SqliteStore::new(pool.clone());
    session_store
        .migrate()
        .await
        .map_err(|e| sea_orm::DbErr::Custom(e.to_string()))?;

    let session_layer = SessionManagerLayer::new(session_store)
        .with_secure(false)
        .with_expiry(Expiry::OnInactivity(time::Duration::days(7)));

    Ok(session_layer)
}

/// HTTP client for provider requests. Redirects are never followed.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::none())
        .build()?;

    Ok(client)
}

/// Builds the OAuth2 client from the provider settings in `config`.
///
/// # Returns
/// - `Ok(OAuth2Client)` - Client with authorization, token and redirect URLs set
/// - `Err(AppError::ConfigErr(InvalidEnvVar))` - One of the URLs does not parse
pub fn setup_oauth_client(config: &Config) -> Result<OAuth2Client, AppError> {
    let auth_url = AuthUrl::new(config.oauth_auth_url.clone())
        .map_err(|e| invalid_url("OAUTH_AUTH_URL", e))?;
    let token_url = TokenUrl::new(config.oauth_token_url.clone())
        .map_err(|e| invalid_url("OAUTH_TOKEN_URL", e))?;
    let redirect_url = RedirectUrl::new(config.oauth_redirect_url.clone())
        .map_err(|e| invalid_url("OAUTH_REDIRECT_URL", e))?;

    let client = oauth2::basic::BasicClient::new(ClientId::new(config.oauth_client_id.clone()))
        .set_client_secret(ClientSecret::new(config.oauth_client_secret.clone()))
        .set_auth_uri(auth_url)
        .set_token_uri(token_url)
        .set_redirect_uri(redirect_url);

    Ok(client)
}

/// Logs a one-time bootstrap login link when no `SUPER_ADMIN` exists yet.
///
/// The first user to open the link before the code expires becomes `SUPER_ADMIN`.
pub async fn check_for_super_admin(
    db: &DatabaseConnection,
    config: &Config,
    bootstrap_code_service: &BootstrapCodeService,
) -> Result<(), AppError> {
    if UserRepository::new(db).role_exists(Role::SuperAdmin).await? {
        return Ok(());
    }

    let code = bootstrap_code_service.generate().await;

    tracing::info!(
        "No super admin exists yet. Sign in within 60 seconds to claim the role: {}/api/auth/login?code={}",
        config.app_url.trim_end_matches('/'),
        code
    );

    Ok(())
}

fn invalid_url(name: &str, err: url::ParseError) -> ConfigError {
    ConfigError::InvalidEnvVar {
        name: name.to_string(),
        reason: err.to_string(),
    }
}
