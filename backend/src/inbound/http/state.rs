//! Shared HTTP adapter state.
//!
//! Handlers receive this through `web::Data` and depend only on domain ports,
//! so they can be exercised with in-memory adapters or mocks.

use std::sync::Arc;

use crate::domain::ports::{
    AccountCommand, HealthLogCommand, HealthLogQuery, TokenService, UserProfileCommand,
    UserProfileQuery,
};
use crate::domain::{ChatResponder, RemedyCatalog};

/// Parameter object bundling the port implementations.
#[derive(Clone)]
pub struct HttpStatePorts {
    pub accounts: Arc<dyn AccountCommand>,
    pub profile: Arc<dyn UserProfileQuery>,
    pub profile_command: Arc<dyn UserProfileCommand>,
    pub health_logs: Arc<dyn HealthLogCommand>,
    pub health_logs_query: Arc<dyn HealthLogQuery>,
    pub tokens: Arc<dyn TokenService>,
}

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub accounts: Arc<dyn AccountCommand>,
    pub profile: Arc<dyn UserProfileQuery>,
    pub profile_command: Arc<dyn UserProfileCommand>,
    pub health_logs: Arc<dyn HealthLogCommand>,
    pub health_logs_query: Arc<dyn HealthLogQuery>,
    pub tokens: Arc<dyn TokenService>,
    pub chatbot: ChatResponder,
    pub remedies: RemedyCatalog,
}

impl HttpState {
    /// Construct state with the built-in chatbot table and remedy catalogue.
    pub fn new(ports: HttpStatePorts) -> Self {
        let HttpStatePorts {
            accounts,
            profile,
            profile_command,
            health_logs,
            health_logs_query,
            tokens,
        } = ports;
        Self {
            accounts,
            profile,
            profile_command,
            health_logs,
            health_logs_query,
            tokens,
            chatbot: ChatResponder::default(),
            remedies: RemedyCatalog::builtin(),
        }
    }
}

impl From<HttpStatePorts> for HttpState {
    fn from(ports: HttpStatePorts) -> Self {
        Self::new(ports)
    }
}
