use std::net::SocketAddr;

use axum::Router;
use configs::{AppConfig, ServerConfig};
use migration::MigratorTrait;
use models::db::{connect_with_config, DatabaseConfig};
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::routes::{self, auth::ServerState};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

fn bind_addr(server: &ServerConfig) -> anyhow::Result<SocketAddr> {
    Ok(format!("{}:{}", server.host, server.port).parse()?)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    info!("received Ctrl+C, shutting down");
}

/// Connect, migrate if configured, and wire services into the router.
pub async fn build_app(cfg: &AppConfig) -> anyhow::Result<Router> {
    let db = connect_with_config(&DatabaseConfig::from(&cfg.database)).await?;
    if cfg.database.run_migrations {
        migration::Migrator::up(&db, None).await?;
        info!("database migrations applied");
    }
    let state = ServerState::new(db, &cfg.auth)?;
    Ok(routes::build_router(state, build_cors()))
}

/// Public entry: build the app and run the HTTP server until Ctrl+C
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let app = build_app(&cfg).await?;

    let addr = bind_addr(&cfg.server)?;
    info!(%addr, "starting server crate");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}
