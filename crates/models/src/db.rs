use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

pub use configs::DatabaseConfig;

/// Connect with explicit pool settings.
pub async fn connect_with_config(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let mut opt = ConnectOptions::new(cfg.url.clone());
    opt.max_connections(cfg.max_connections)
        .min_connections(cfg.min_connections)
        .connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))
        .idle_timeout(Duration::from_secs(cfg.idle_timeout_secs))
        .max_lifetime(Duration::from_secs(cfg.max_lifetime_secs))
        .acquire_timeout(Duration::from_secs(cfg.acquire_timeout_secs))
        .sqlx_logging(cfg.sqlx_logging);
    let db = Database::connect(opt).await?;
    info!(
        event = "db_connected",
        max_connections = cfg.max_connections,
        min_connections = cfg.min_connections,
        "database pool ready"
    );
    Ok(db)
}
