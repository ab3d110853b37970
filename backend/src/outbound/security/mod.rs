//! Credential adapters: argon2 password hashing and HS256 bearer tokens.

mod argon2_password_hasher;
mod jwt_token_service;
mod token_secret;

pub use argon2_password_hasher::Argon2PasswordHasher;
pub use jwt_token_service::{DEFAULT_TOKEN_TTL_HOURS, JwtTokenService};
pub use token_secret::TokenSecret;
