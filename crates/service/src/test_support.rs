#![cfg(test)]
use tokio::sync::OnceCell;
use sea_orm::DatabaseConnection;
use migration::MigratorTrait;
use models::db::{connect_with_config, DatabaseConfig};

// Ensure migrations run only once across the entire test process
static MIGRATED: OnceCell<()> = OnceCell::const_new();

fn test_config() -> DatabaseConfig {
    let mut cfg = configs::load_default()
        .map(|c| c.database)
        .unwrap_or_else(|_| DatabaseConfig::from_env());
    cfg.normalize_from_env();
    cfg.min_connections = cfg.min_connections.min(1);
    cfg
}

pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    // Run migrations exactly once, with a throwaway connection
    MIGRATED
        .get_or_try_init(|| async {
            let db = connect_with_config(&test_config()).await?;
            migration::Migrator::up(&db, None).await?;
            drop(db);
            Ok::<(), anyhow::Error>(())
        })
        .await?;

    // Return a fresh connection for the current test's runtime
    let mut cfg = test_config();
    cfg.max_connections = cfg.max_connections.max(5);
    cfg.acquire_timeout_secs = 10;
    connect_with_config(&cfg).await
}
