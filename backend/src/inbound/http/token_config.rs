//! Signing secret resolution for bearer tokens.
//!
//! The secret comes from `JWT_SECRET_FILE` (a path whose contents are
//! trimmed), then `JWT_SECRET`. Without either, the well-known fallback
//! `"secret"` is used: tolerated with a warning in debug builds, refused in
//! release builds unless `ALLOW_INSECURE_JWT_SECRET` opts in.

pub mod fingerprint;

use std::path::{Path, PathBuf};

use mockable::Env;
use tracing::{error, warn};
use zeroize::Zeroize;

use crate::outbound::security::TokenSecret;

pub(crate) const SECRET_FILE_ENV: &str = "JWT_SECRET_FILE";
pub(crate) const SECRET_ENV: &str = "JWT_SECRET";
pub(crate) const ALLOW_INSECURE_ENV: &str = "ALLOW_INSECURE_JWT_SECRET";
pub(crate) const INSECURE_FALLBACK_SECRET: &str = "secret";
const BOOL_EXPECTED: &str = "1|0|true|false|yes|no|y|n";

/// Build mode for secret validation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BuildMode {
    /// Debug builds accept the fallback secret with a warning.
    Debug,
    /// Release builds require an explicit secret or an explicit opt-in.
    Release,
}

impl BuildMode {
    /// Determine the build mode from `cfg!(debug_assertions)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use annapurna::inbound::http::token_config::BuildMode;
    ///
    /// let mode = BuildMode::from_debug_assertions();
    /// assert_eq!(mode == BuildMode::Debug, cfg!(debug_assertions));
    /// ```
    #[must_use]
    pub fn from_debug_assertions() -> Self {
        if cfg!(debug_assertions) {
            Self::Debug
        } else {
            Self::Release
        }
    }

    fn is_debug(self) -> bool {
        matches!(self, Self::Debug)
    }
}

/// Where the active secret was read from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SecretSource {
    File(PathBuf),
    Env,
    InsecureFallback,
}

/// Resolved token settings.
#[derive(Debug)]
pub struct TokenSettings {
    pub secret: TokenSecret,
    pub source: SecretSource,
}

/// Errors raised while resolving the signing secret.
#[derive(thiserror::Error, Debug)]
pub enum TokenConfigError {
    /// The secret file could not be read.
    #[error("failed to read token secret at {path}: {source}")]
    SecretRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The configured secret is empty after trimming.
    #[error("{name} is set but empty")]
    EmptySecret { name: &'static str },
    /// A variable is present but contains an invalid value.
    #[error("invalid value for {name}='{value}'; expected {expected}")]
    InvalidEnv {
        name: &'static str,
        value: String,
        expected: &'static str,
    },
    /// Release builds refuse the built-in fallback without an opt-in.
    #[error("no JWT_SECRET or JWT_SECRET_FILE configured and ALLOW_INSECURE_JWT_SECRET is not set")]
    InsecureFallbackRefused,
}

/// Resolve the token signing secret from the environment.
///
/// # Examples
///
/// ```rust
/// use annapurna::inbound::http::token_config::{
///     token_settings_from_env, BuildMode, SecretSource,
/// };
/// use mockable::MockEnv;
///
/// let mut env = MockEnv::new();
/// env.expect_string().returning(|name| match name {
///     "JWT_SECRET" => Some("a-long-random-string".to_string()),
///     _ => None,
/// });
///
/// let settings = token_settings_from_env(&env, BuildMode::Release).unwrap();
/// assert_eq!(settings.source, SecretSource::Env);
/// assert_eq!(settings.secret.expose(), b"a-long-random-string");
/// ```
pub fn token_settings_from_env<E: Env>(
    env: &E,
    mode: BuildMode,
) -> Result<TokenSettings, TokenConfigError> {
    if let Some(path) = env.string(SECRET_FILE_ENV) {
        let path = PathBuf::from(path);
        match read_secret_file(&path) {
            Ok(secret) => {
                return Ok(TokenSettings {
                    secret,
                    source: SecretSource::File(path),
                });
            }
            Err(err) if mode.is_debug() => {
                warn!(error = %err, "ignoring unreadable JWT_SECRET_FILE");
            }
            Err(err) => return Err(err),
        }
    }

    if let Some(mut value) = env.string(SECRET_ENV) {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            value.zeroize();
            if !mode.is_debug() {
                return Err(TokenConfigError::EmptySecret { name: SECRET_ENV });
            }
            warn!("JWT_SECRET is empty; ignoring");
        } else {
            let secret = TokenSecret::new(trimmed.as_bytes().to_vec());
            value.zeroize();
            return Ok(TokenSettings {
                secret,
                source: SecretSource::Env,
            });
        }
    }

    insecure_fallback(env, mode)
}

fn read_secret_file(path: &Path) -> Result<TokenSecret, TokenConfigError> {
    let mut contents = std::fs::read(path).map_err(|source| TokenConfigError::SecretRead {
        path: path.to_path_buf(),
        source,
    })?;
    let trimmed = contents.trim_ascii().to_vec();
    contents.zeroize();
    if trimmed.is_empty() {
        return Err(TokenConfigError::EmptySecret {
            name: SECRET_FILE_ENV,
        });
    }
    Ok(TokenSecret::new(trimmed))
}

fn insecure_fallback<E: Env>(env: &E, mode: BuildMode) -> Result<TokenSettings, TokenConfigError> {
    let settings = TokenSettings {
        secret: TokenSecret::new(INSECURE_FALLBACK_SECRET.as_bytes().to_vec()),
        source: SecretSource::InsecureFallback,
    };
    if mode.is_debug() {
        warn!("JWT secret not configured; using the insecure fallback (dev only)");
        return Ok(settings);
    }

    let allowed = match env.string(ALLOW_INSECURE_ENV) {
        Some(value) => parse_bool(&value).ok_or(TokenConfigError::InvalidEnv {
            name: ALLOW_INSECURE_ENV,
            value,
            expected: BOOL_EXPECTED,
        })?,
        None => false,
    };
    if !allowed {
        return Err(TokenConfigError::InsecureFallbackRefused);
    }
    error!("JWT secret not configured; release build is signing tokens with the insecure fallback");
    Ok(settings)
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "y" => Some(true),
        "0" | "false" | "no" | "n" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests;
