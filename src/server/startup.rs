use tower_sessions::{service::SignedCookie, MemoryStore, SessionManagerLayer};

use crate::server::{
    config::Config,
    error::{config::ConfigError, Error},
};

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Configure the admin session layer with a signed cookie.
///
/// The signing key comes from `ORRERY_SECRET_KEY` and must be at least 64
/// bytes; anything shorter aborts startup instead of degrading to a weak
/// or hardcoded secret.
pub fn session_layer(
    config: &Config,
) -> Result<SessionManagerLayer<MemoryStore, SignedCookie>, Error> {
    use time::Duration;
    use tower_sessions::{cookie::Key, cookie::SameSite, Expiry};

    let key = Key::try_from(config.secret_key.as_bytes()).map_err(|_| {
        ConfigError::InvalidEnvValue {
            var: "ORRERY_SECRET_KEY".to_string(),
            reason: "must be at least 64 bytes".to_string(),
        }
    })?;

    // Set secure based on build mode: in development (debug) use false, otherwise true.
    let development_mode = cfg!(debug_assertions);
    let secure_cookies = !development_mode;

    let session = SessionManagerLayer::new(MemoryStore::default())
        .with_signed(key)
        .with_secure(secure_cookies)
        .with_same_site(SameSite::Lax)
        .with_http_only(true)
        .with_expiry(Expiry::OnInactivity(Duration::days(7)));

    Ok(session)
}
