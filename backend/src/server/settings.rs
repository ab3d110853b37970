//! Server settings loaded via OrthoConfig from CLI flags, `ANNAPURNA_*`
//! environment variables and configuration files.

use std::net::SocketAddr;

use mockable::Env;
use ortho_config::OrthoConfig;
use serde::Deserialize;

use annapurna::outbound::security::DEFAULT_TOKEN_TTL_HOURS;

const DEFAULT_BIND_ADDR: SocketAddr =
    SocketAddr::V4(std::net::SocketAddrV4::new(std::net::Ipv4Addr::UNSPECIFIED, 8080));
const DEFAULT_POOL_MAX_SIZE: u32 = 10;
/// Conventional variable consulted when no prefixed URL is set.
pub(crate) const DATABASE_URL_ENV: &str = "DATABASE_URL";

/// Runtime settings for the HTTP server.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "ANNAPURNA")]
pub struct ServerSettings {
    /// Socket address to listen on.
    #[ortho_config(default = DEFAULT_BIND_ADDR)]
    pub bind_addr: SocketAddr,
    /// PostgreSQL connection string; in-memory storage is used without one.
    pub database_url: Option<String>,
    /// Upper bound on pooled database connections.
    #[ortho_config(default = DEFAULT_POOL_MAX_SIZE)]
    pub db_pool_max_size: u32,
    /// Bearer token lifetime in hours.
    #[ortho_config(default = DEFAULT_TOKEN_TTL_HOURS)]
    pub token_ttl_hours: u32,
}

impl ServerSettings {
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }

    pub fn db_pool_max_size(&self) -> u32 {
        self.db_pool_max_size
    }

    pub fn token_ttl_hours(&self) -> u32 {
        self.token_ttl_hours
    }

    /// The configured database URL, else `DATABASE_URL`. Blank values count
    /// as unset.
    pub fn database_url<E: Env>(&self, env: &E) -> Option<String> {
        self.database_url
            .clone()
            .or_else(|| env.string(DATABASE_URL_ENV))
            .filter(|url| !url.trim().is_empty())
    }
}
