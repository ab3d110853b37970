//! Shared fixtures for the HTTP integration suites.
//!
//! The app is assembled from the in-memory adapters and a real JWT service,
//! matching the server's database-less startup mode.

use std::sync::Arc;

use actix_http::Request;
use actix_web::body::BoxBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::http::header::AUTHORIZATION;
use actix_web::{App, test as actix_test, web};
use annapurna::Trace;
use annapurna::domain::ports::TokenService;
use annapurna::domain::{AccountService, HealthLogService, UserProfileService};
use annapurna::inbound::http::configure_api;
use annapurna::inbound::http::state::{HttpState, HttpStatePorts};
use annapurna::outbound::memory::{InMemoryHealthLogRepository, InMemoryUserRepository};
use annapurna::outbound::security::{
    Argon2PasswordHasher, DEFAULT_TOKEN_TTL_HOURS, JwtTokenService, TokenSecret,
};
use mockable::{Clock, DefaultClock};
use serde_json::{Value, json};

pub const TEST_SECRET: &[u8] = b"integration-secret";

pub fn token_service() -> JwtTokenService {
    JwtTokenService::new(
        &TokenSecret::new(TEST_SECRET.to_vec()),
        DEFAULT_TOKEN_TTL_HOURS,
        Arc::new(DefaultClock),
    )
}

pub fn in_memory_state() -> HttpState {
    let users = Arc::new(InMemoryUserRepository::new());
    let logs = Arc::new(InMemoryHealthLogRepository::new());
    let tokens: Arc<dyn TokenService> = Arc::new(token_service());
    let clock: Arc<dyn Clock> = Arc::new(DefaultClock);

    let profiles = Arc::new(UserProfileService::new(users.clone()));
    let health_logs = Arc::new(HealthLogService::new(logs, users.clone(), clock.clone()));
    HttpState::new(HttpStatePorts {
        accounts: Arc::new(AccountService::new(
            users,
            Arc::new(Argon2PasswordHasher::new()),
            tokens.clone(),
            clock,
        )),
        profile: profiles.clone(),
        profile_command: profiles,
        health_logs: health_logs.clone(),
        health_logs_query: health_logs,
        tokens,
    })
}

pub async fn init_app()
-> impl Service<Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error> {
    actix_test::init_service(
        App::new()
            .app_data(web::Data::new(in_memory_state()))
            .wrap(Trace)
            .configure(configure_api),
    )
    .await
}

pub async fn send<S>(app: &S, req: actix_test::TestRequest) -> (StatusCode, Value)
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error>,
{
    let res = actix_test::call_service(app, req.to_request()).await;
    let status = res.status();
    let body = actix_test::read_body(res).await;
    let value = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).expect("JSON body")
    };
    (status, value)
}

pub fn bearer(token: &str) -> (actix_web::http::header::HeaderName, String) {
    (AUTHORIZATION, format!("Bearer {token}"))
}

/// Register `email` and return its bearer token.
pub async fn signup<S>(app: &S, email: &str) -> String
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error>,
{
    let (status, body) = send(
        app,
        actix_test::TestRequest::post().uri("/api/auth/signup").set_json(json!({
            "name": "Lakshmi",
            "email": email,
            "password": "ashwagandha",
            "age": 45,
            "gender": "female"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    body["token"].as_str().expect("token").to_owned()
}
