//! Service settings loaded via OrthoConfig.
//!
//! Values come from `WORKSHOP_*` environment variables, an optional config
//! file and command-line flags, in OrthoConfig's usual precedence.

use std::net::{AddrParseError, IpAddr, SocketAddr};

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_HOST: &str = "0.0.0.0";

/// Runtime configuration for the workshop server.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "WORKSHOP")]
pub struct WorkshopSettings {
    /// PostgreSQL connection URL. Without one the server keeps its data in
    /// memory.
    pub database_url: Option<String>,
    /// Interface to bind.
    pub host: Option<String>,
    /// TCP port to bind.
    #[ortho_config(default = 5000)]
    pub port: u16,
    /// Upper bound on pooled database connections.
    #[ortho_config(default = 10)]
    pub pool_max_size: u32,
}

impl WorkshopSettings {
    pub fn database_url(&self) -> Option<&str> {
        self.database_url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
    }

    pub const fn pool_max_size(&self) -> u32 {
        self.pool_max_size
    }

    /// Socket address assembled from `host` and `port`.
    pub fn bind_addr(&self) -> Result<SocketAddr, AddrParseError> {
        let host: IpAddr = self.host.as_deref().unwrap_or(DEFAULT_HOST).parse()?;
        Ok(SocketAddr::new(host, self.port))
    }
}
