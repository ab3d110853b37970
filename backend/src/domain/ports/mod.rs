//! Domain ports for the hexagonal boundary.
//!
//! Driving ports (`*Command`, `*Query`) are what inbound adapters call; driven
//! ports (`*Repository`, [`PasswordHasher`], [`TokenService`]) are what the
//! services depend on and outbound adapters implement.

mod macros;
pub(crate) use macros::define_port_error;

mod account_command;
mod health_log_command;
mod health_log_query;
mod health_log_repository;
mod password_hasher;
mod token_service;
mod user_profile_command;
mod user_profile_query;
mod user_repository;

#[cfg(test)]
pub use account_command::MockAccountCommand;
pub use account_command::{AccountCommand, AuthSession, LoginCredentials};
#[cfg(test)]
pub use health_log_command::MockHealthLogCommand;
pub use health_log_command::HealthLogCommand;
#[cfg(test)]
pub use health_log_query::MockHealthLogQuery;
pub use health_log_query::HealthLogQuery;
#[cfg(test)]
pub use health_log_repository::MockHealthLogRepository;
pub use health_log_repository::{HealthLogRepository, HealthLogRepositoryError};
#[cfg(test)]
pub use password_hasher::MockPasswordHasher;
pub use password_hasher::{PasswordHashError, PasswordHasher};
#[cfg(test)]
pub use token_service::MockTokenService;
pub use token_service::{IssuedToken, TokenError, TokenService};
#[cfg(test)]
pub use user_profile_command::MockUserProfileCommand;
pub use user_profile_command::UserProfileCommand;
#[cfg(test)]
pub use user_profile_query::MockUserProfileQuery;
pub use user_profile_query::UserProfileQuery;
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserRepository, UserRepositoryError};
