//! OpenAPI documentation.
//!
//! [`ApiDoc`] collects every `/api` endpoint plus the health checks. Swagger
//! UI serves it in debug builds; `openapi-dump` writes it out for tooling.

use crate::inbound::http::accounts::{AuthResponse, LoginBody, SignupBody};
use crate::inbound::http::chatbot::{ChatBody, ChatIntro, ChatReply};
use crate::inbound::http::health_logs::{
    CreateHealthLogResponse, HealthLogBody, HealthLogsResponse, HealthSummaryResponse,
};
use crate::inbound::http::profile::{ProfileResponse, UpdateProfileBody, UpdateProfileResponse};
use crate::inbound::http::remedies::RemediesResponse;
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};
use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};
use utoipa::{Modify, OpenApi};

/// Name of the bearer security scheme in the generated document.
pub const BEARER_SCHEME: &str = "BearerAuth";

/// Registers the JWT bearer scheme used by protected endpoints.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        let mut bearer = Http::new(HttpAuthScheme::Bearer);
        bearer.bearer_format = Some("JWT".to_owned());
        bearer.description =
            Some("Token returned by POST /api/auth/signup or /api/auth/login.".to_owned());
        components.add_security_scheme(BEARER_SCHEME, SecurityScheme::Http(bearer));
    }
}

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "AnnapurnaAI API",
        description = "Health logs, profiles, remedy lookup and a wellness chatbot."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("BearerAuth" = [])),
    paths(
        crate::inbound::http::accounts::signup,
        crate::inbound::http::accounts::login,
        crate::inbound::http::profile::get_profile,
        crate::inbound::http::profile::update_profile,
        crate::inbound::http::health_logs::create_log,
        crate::inbound::http::health_logs::list_logs,
        crate::inbound::http::health_logs::health_summary,
        crate::inbound::http::remedies::get_remedies,
        crate::inbound::http::chatbot::chat_intro,
        crate::inbound::http::chatbot::chat,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ErrorSchema,
        ErrorCodeSchema,
        SignupBody,
        LoginBody,
        AuthResponse,
        ProfileResponse,
        UpdateProfileBody,
        UpdateProfileResponse,
        HealthLogBody,
        CreateHealthLogResponse,
        HealthLogsResponse,
        HealthSummaryResponse,
        RemediesResponse,
        ChatBody,
        ChatReply,
        ChatIntro,
    )),
    tags(
        (name = "auth", description = "Signup and login"),
        (name = "profile", description = "The caller's own profile"),
        (name = "health-logs", description = "Daily metrics and the dashboard summary"),
        (name = "remedies", description = "Static remedy catalogue"),
        (name = "chatbot", description = "Rule-based wellness assistant"),
        (name = "health", description = "Liveness and readiness checks")
    )
)]
pub struct ApiDoc;
