//! Startup schema provisioning.
//!
//! Applies the migrations embedded from `backend/migrations`. The SQL uses
//! `IF NOT EXISTS`, so pointing the service at a database that already holds
//! the shop's tables records the migration without touching the data.

use diesel::Connection;
use diesel::pg::PgConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::info;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    #[error("cannot connect to apply migrations: {message}")]
    Connection { message: String },
    #[error("migration failed: {message}")]
    Migration { message: String },
}

/// Run every pending migration. Blocking; call it from
/// `tokio::task::spawn_blocking` inside a runtime.
pub fn ensure_schema(database_url: &str) -> Result<usize, SchemaError> {
    let mut conn = PgConnection::establish(database_url).map_err(|err| {
        SchemaError::Connection {
            message: err.to_string(),
        }
    })?;
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|err| SchemaError::Migration {
            message: err.to_string(),
        })?;
    for version in &applied {
        info!(%version, "applied migration");
    }
    Ok(applied.len())
}
