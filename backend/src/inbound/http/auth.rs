//! Bearer-token authentication for protected handlers.
//!
//! Handlers take an [`AuthenticatedUser`] argument instead of inspecting
//! headers themselves; the extractor verifies the token through the
//! [`TokenService`](crate::domain::ports::TokenService) held in [`HttpState`].

use actix_web::dev::Payload;
use actix_web::http::header::{AUTHORIZATION, HeaderMap};
use actix_web::{FromRequest, HttpRequest, web};
use futures_util::future::{Ready, ready};
use tracing::debug;

use crate::domain::{Error, UserId};
use crate::inbound::http::state::HttpState;

const BEARER_PREFIX: &str = "Bearer ";
const UNAUTHORIZED: &str = "Unauthorized";

/// Identity of the caller, taken from a verified bearer token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticatedUser(UserId);

impl AuthenticatedUser {
    /// The authenticated user's id.
    #[must_use]
    pub fn id(&self) -> &UserId {
        &self.0
    }
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let token = value.strip_prefix(BEARER_PREFIX)?.trim();
    (!token.is_empty()).then_some(token)
}

fn authenticate(req: &HttpRequest) -> Result<AuthenticatedUser, Error> {
    let state = req
        .app_data::<web::Data<HttpState>>()
        .ok_or_else(|| Error::internal("HTTP state is not configured"))?;
    let token = bearer_token(req.headers()).ok_or_else(|| Error::unauthorized(UNAUTHORIZED))?;
    state
        .tokens
        .verify(token)
        .map(AuthenticatedUser)
        .map_err(|err| {
            debug!(error = %err, "bearer token rejected");
            Error::unauthorized(UNAUTHORIZED)
        })
}

impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(authenticate(req))
    }
}
