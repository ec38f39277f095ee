//! Workshop server entry point: loads settings, prepares the store and runs
//! the HTTP server.

mod server;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use workshop::config::WorkshopSettings;
use workshop::inbound::http::health::HealthState;
use workshop::outbound::persistence::{DbPool, PoolConfig, ensure_schema};

use server::{ServerConfig, create_server};

fn init_tracing() {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }
}

/// Apply pending migrations and open the pool.
async fn connect(settings: &WorkshopSettings, url: &str) -> std::io::Result<DbPool> {
    let migration_url = url.to_owned();
    let applied = tokio::task::spawn_blocking(move || ensure_schema(&migration_url))
        .await
        .map_err(|err| std::io::Error::other(format!("migration task failed: {err}")))?
        .map_err(|err| std::io::Error::other(format!("schema setup failed: {err}")))?;
    info!(applied, "database schema ready");

    let config = PoolConfig::new(url).with_max_size(settings.pool_max_size());
    DbPool::new(config)
        .await
        .map_err(|err| std::io::Error::other(format!("database pool failed: {err}")))
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    init_tracing();

    let settings = WorkshopSettings::load()
        .map_err(|err| std::io::Error::other(format!("failed to load settings: {err}")))?;
    let bind_addr = settings
        .bind_addr()
        .map_err(|err| std::io::Error::other(format!("invalid bind address: {err}")))?;

    let mut config = ServerConfig::new(bind_addr);
    if let Some(url) = settings.database_url() {
        config = config.with_db_pool(connect(&settings, url).await?);
    }

    #[cfg(feature = "metrics")]
    let config = config.with_metrics(Some(server::build_metrics()?));

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, config)?;
    info!(%bind_addr, "workshop server listening");
    server.await
}
