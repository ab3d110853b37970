//! HTTP inbound adapter exposing REST endpoints.

pub mod accounts;
pub mod auth;
pub mod cache_control;
pub mod chatbot;
pub mod error;
pub mod health;
pub mod health_logs;
pub mod profile;
pub mod remedies;
pub mod schemas;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod token_config;

use actix_web::web;

pub use error::ApiResult;
use error::json_error_handler;

/// Register every `/api` endpoint on `cfg`.
///
/// Shared by the server bootstrap and the integration tests so both mount
/// the same routes and JSON extractor configuration.
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .service(
            web::scope("/api")
                .service(accounts::signup)
                .service(accounts::login)
                .service(profile::get_profile)
                .service(profile::update_profile)
                .service(health_logs::create_log)
                .service(health_logs::list_logs)
                .service(health_logs::health_summary)
                .service(remedies::get_remedies)
                .service(chatbot::chat_intro)
                .service(chatbot::chat),
        );
}
