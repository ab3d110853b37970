//! Cache-control policies shared by handlers.

use actix_web::http::header::CACHE_CONTROL;

/// Per-user data must be revalidated before reuse.
pub const PRIVATE_NO_CACHE: &str = "private, no-cache, must-revalidate";

/// Health check responses are never cached.
pub const NO_STORE: &str = "no-store";

/// Header tuple for responses carrying the caller's own records.
pub const fn private_no_cache_header() -> (actix_web::http::header::HeaderName, &'static str) {
    (CACHE_CONTROL, PRIVATE_NO_CACHE)
}
