use std::{net::SocketAddr, sync::Arc};

use axum::Router;
use configs::AppConfig;
use migration::MigratorTrait;
use service::todo::{repo::seaorm::SeaOrmTodoRepository, repository::TodoRepository};
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::{metrics, routes, state::ServerState};

pub fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Router over an arbitrary repository; the binary passes SeaORM, tests pass the in-memory store.
pub fn build_app(repo: Arc<dyn TodoRepository>) -> Router {
    metrics::init();
    routes::build_router(ServerState::new(repo), build_cors())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for Ctrl+C; graceful shutdown disabled");
        std::future::pending::<()>().await;
    }
    info!(event = "shutdown_signal", "received Ctrl+C, draining connections");
}

/// Connect, migrate when configured, then serve until Ctrl+C.
pub async fn run_with_config(cfg: AppConfig) -> anyhow::Result<()> {
    // DB connection
    let db = models::db::connect_with_config(&cfg.database).await?;
    if cfg.database.auto_migrate {
        migration::Migrator::up(&db, None).await?;
        info!(event = "migrations_applied", "database schema up to date");
    }

    let repo: Arc<dyn TodoRepository> = Arc::new(SeaOrmTodoRepository::new(db));
    let app = build_app(repo);

    // Bind and serve
    let listener = tokio::net::TcpListener::bind(cfg.server.bind_addr()).await?;
    let addr: SocketAddr = listener.local_addr()?;
    info!(%addr, "starting todo api server");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}
