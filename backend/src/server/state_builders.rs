//! Wiring of domain services onto the configured storage adapters.

use std::sync::Arc;

use actix_web::web;
use mockable::{Clock, DefaultClock};
use tracing::warn;

use annapurna::domain::ports::{HealthLogRepository, TokenService, UserRepository};
use annapurna::domain::{AccountService, HealthLogService, UserProfileService};
use annapurna::inbound::http::state::{HttpState, HttpStatePorts};
use annapurna::outbound::memory::{InMemoryHealthLogRepository, InMemoryUserRepository};
use annapurna::outbound::persistence::{DieselHealthLogRepository, DieselUserRepository};
use annapurna::outbound::security::Argon2PasswordHasher;

use super::ServerConfig;

/// Build the driving ports on top of one pair of repositories.
fn build_ports<U, L>(
    users: Arc<U>,
    logs: Arc<L>,
    tokens: Arc<dyn TokenService>,
    clock: Arc<dyn Clock>,
) -> HttpStatePorts
where
    U: UserRepository + 'static,
    L: HealthLogRepository + 'static,
{
    let accounts = Arc::new(AccountService::new(
        users.clone(),
        Arc::new(Argon2PasswordHasher::new()),
        tokens.clone(),
        clock.clone(),
    ));
    let profiles = Arc::new(UserProfileService::new(users.clone()));
    let health_logs = Arc::new(HealthLogService::new(logs, users, clock));

    HttpStatePorts {
        accounts,
        profile: profiles.clone(),
        profile_command: profiles,
        health_logs: health_logs.clone(),
        health_logs_query: health_logs,
        tokens,
    }
}

/// Build the shared HTTP state: PostgreSQL adapters when a pool is
/// configured, in-memory adapters otherwise.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let clock: Arc<dyn Clock> = Arc::new(DefaultClock);
    let ports = match &config.db_pool {
        Some(pool) => build_ports(
            Arc::new(DieselUserRepository::new(pool.clone())),
            Arc::new(DieselHealthLogRepository::new(pool.clone())),
            config.tokens.clone(),
            clock,
        ),
        None => {
            warn!("no database configured; accounts and health logs are kept in memory");
            build_ports(
                Arc::new(InMemoryUserRepository::new()),
                Arc::new(InMemoryHealthLogRepository::new()),
                config.tokens.clone(),
                clock,
            )
        }
    };
    web::Data::new(HttpState::new(ports))
}
