//! Backend entry-point: resolves settings, wires storage and serves the API.

mod server;

use std::sync::Arc;

use actix_web::web;
use mockable::{DefaultClock, DefaultEnv};
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use annapurna::inbound::http::health::HealthState;
use annapurna::inbound::http::token_config::fingerprint::secret_fingerprint;
use annapurna::inbound::http::token_config::{BuildMode, token_settings_from_env};
use annapurna::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};
use annapurna::outbound::security::JwtTokenService;
use server::{ServerConfig, ServerSettings, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load()
        .map_err(|e| std::io::Error::other(format!("failed to load settings: {e}")))?;
    let env = DefaultEnv::new();

    let token_settings = token_settings_from_env(&env, BuildMode::from_debug_assertions())
        .map_err(std::io::Error::other)?;
    info!(
        fingerprint = %secret_fingerprint(&token_settings.secret),
        source = ?token_settings.source,
        "bearer token secret loaded"
    );
    let tokens = JwtTokenService::new(
        &token_settings.secret,
        settings.token_ttl_hours(),
        Arc::new(DefaultClock),
    );
    drop(token_settings);

    let mut config = ServerConfig::new(settings.bind_addr(), Arc::new(tokens));

    if let Some(database_url) = settings.database_url(&env) {
        run_pending_migrations(&database_url)
            .await
            .map_err(std::io::Error::other)?;
        let pool = DbPool::new(
            PoolConfig::new(database_url).with_max_size(settings.db_pool_max_size()),
        )
        .await
        .map_err(std::io::Error::other)?;
        config = config.with_db_pool(pool);
    }

    #[cfg(feature = "metrics")]
    let config = config.with_metrics(server::make_metrics());

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), config)?;
    info!(addr = %settings.bind_addr(), "listening");

    let result = server.await;
    health_state.mark_unhealthy();
    result
}
