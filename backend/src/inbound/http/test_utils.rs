//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use chrono::{TimeZone, Utc};

use crate::domain::ports::{
    MockAccountCommand, MockHealthLogCommand, MockHealthLogQuery, MockTokenService,
    MockUserProfileCommand, MockUserProfileQuery, TokenError, TokenService,
};
use crate::domain::{ActivityLevel, Email, HealthProfile, User, UserId};
use crate::inbound::http::state::HttpState;
pub use crate::inbound::http::state::HttpStatePorts;

/// User id carried by [`BEARER`].
pub const TEST_USER_ID: &str = "3fa85f64-5717-4562-b3fc-2c963f66afa6";

/// Authorization header value accepted by [`test_ports`].
pub const BEARER: &str = "Bearer test-token";

const ACCEPTED_TOKEN: &str = "test-token";

/// Token service that accepts only `test-token`.
pub fn accepting_tokens() -> MockTokenService {
    let mut tokens = MockTokenService::new();
    tokens.expect_verify().returning(|token| {
        if token == ACCEPTED_TOKEN {
            UserId::new(TEST_USER_ID).map_err(|err| TokenError::invalid(err.to_string()))
        } else {
            Err(TokenError::invalid("signature mismatch"))
        }
    });
    tokens
}

/// Ports with an accepting token service and expectation-free mocks elsewhere.
///
/// Tests replace the port they exercise; any unexpected call panics.
pub fn test_ports() -> HttpStatePorts {
    HttpStatePorts {
        accounts: Arc::new(MockAccountCommand::new()),
        profile: Arc::new(MockUserProfileQuery::new()),
        profile_command: Arc::new(MockUserProfileCommand::new()),
        health_logs: Arc::new(MockHealthLogCommand::new()),
        health_logs_query: Arc::new(MockHealthLogQuery::new()),
        tokens: Arc::new(accepting_tokens()),
    }
}

/// State built from [`test_ports`] with a custom token service.
pub fn http_state_with_tokens(tokens: Arc<dyn TokenService>) -> HttpState {
    let mut ports = test_ports();
    ports.tokens = tokens;
    HttpState::new(ports)
}

/// A registered user whose id matches [`TEST_USER_ID`].
pub fn sample_user() -> User {
    User {
        id: UserId::new(TEST_USER_ID).expect("fixture id is a UUID"),
        name: "Asha Rao".to_owned(),
        email: Email::new("asha@example.com").expect("fixture email is valid"),
        password_hash: "$argon2id$v=19$m=19456,t=2,p=1$fixture$hash".to_owned(),
        age: 34,
        gender: "female".to_owned(),
        profile: HealthProfile {
            height: Some(162.0),
            weight: Some(58.0),
            activity_level: Some(ActivityLevel::Light),
            diseases: vec!["anxiety".to_owned()],
        },
        created_at: Utc
            .with_ymd_and_hms(2026, 1, 5, 9, 30, 0)
            .single()
            .expect("fixture timestamp is valid"),
    }
}
