//! Server configuration parsed from environment variables.
//!
//! SYSTEM CONTEXT
//! ==============
//! `main` builds [`AppConfig`] once at startup and injects the session part
//! into the codec. Nothing else reads the process environment, so a missing
//! or weak `SESSION_SECRET` fails the boot instead of a request.

use std::fmt;
use std::path::PathBuf;

use time::Duration;

pub const MIN_SECRET_LEN: usize = 32;
pub const DEFAULT_COOKIE_NAME: &str = "app_session";
pub const DEFAULT_SESSION_TTL_SECS: i64 = 14 * 24 * 60 * 60;
pub const MAX_SESSION_TTL_SECS: i64 = 365 * 24 * 60 * 60;
pub const DEFAULT_POSTS_FILE: &str = "data/posts.json";
pub const DEFAULT_PORT: u16 = 3000;

/// Seconds shaved off the cookie `Max-Age` so the browser drops the cookie
/// before the sealed envelope expires.
pub const CLOCK_SKEW_SECS: i64 = 60;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required env var: {var}")]
    Missing { var: &'static str },
    #[error("session secret must be at least {min} bytes (got {len})")]
    SecretTooShort { min: usize, len: usize },
    #[error("invalid value for {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

// =============================================================================
// SESSION SECRET
// =============================================================================

/// Server-held key material for sealing session cookies.
///
/// Only constructible from a string of at least [`MIN_SECRET_LEN`] bytes.
#[derive(Clone, PartialEq, Eq)]
pub struct SessionSecret(String);

impl SessionSecret {
    /// Validate a raw secret.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::SecretTooShort`] below the minimum length.
    pub fn new(raw: impl Into<String>) -> Result<Self, ConfigError> {
        let raw = raw.into();
        if raw.len() < MIN_SECRET_LEN {
            return Err(ConfigError::SecretTooShort { min: MIN_SECRET_LEN, len: raw.len() });
        }
        Ok(Self(raw))
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl fmt::Debug for SessionSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionSecret(<redacted>)")
    }
}

// =============================================================================
// SESSION CONFIG
// =============================================================================

/// Codec key material plus the transport attributes of the session cookie.
#[derive(Clone, Debug)]
pub struct SessionConfig {
    /// Secret used to seal new cookies.
    pub secret: SessionSecret,
    /// Retired secrets still accepted when opening cookies.
    pub previous_secrets: Vec<SessionSecret>,
    pub cookie_name: String,
    /// `Secure` cookie attribute; on only for production deployments by default.
    pub secure: bool,
    /// Lifetime of a sealed envelope.
    pub ttl: Duration,
}

impl SessionConfig {
    /// Config with default cookie attributes for the given secret.
    #[must_use]
    pub fn with_secret(secret: SessionSecret) -> Self {
        Self {
            secret,
            previous_secrets: Vec::new(),
            cookie_name: DEFAULT_COOKIE_NAME.to_owned(),
            secure: false,
            ttl: Duration::seconds(DEFAULT_SESSION_TTL_SECS),
        }
    }

    /// `Max-Age` for the session cookie.
    #[must_use]
    pub fn cookie_max_age(&self) -> Duration {
        self.ttl - Duration::seconds(CLOCK_SKEW_SECS)
    }
}

// =============================================================================
// APP CONFIG
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deployment {
    Development,
    Production,
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub deployment: Deployment,
    pub session: SessionConfig,
    pub posts_path: PathBuf,
    /// Enables `POST /api/dev/session`.
    pub dev_session_bypass: bool,
}

impl AppConfig {
    /// Build typed config from environment variables.
    ///
    /// Required:
    /// - `SESSION_SECRET` (at least 32 bytes)
    ///
    /// Optional:
    /// - `SESSION_SECRET_PREVIOUS`: comma-separated retired secrets
    /// - `SESSION_COOKIE_NAME`: default `app_session`
    /// - `SESSION_TTL_SECS`: default 14 days, at most one year
    /// - `APP_ENV`: `production` or `development` (default)
    /// - `COOKIE_SECURE`: defaults to true only in production
    /// - `POSTS_FILE`: default `data/posts.json`
    /// - `DEV_SESSION_BYPASS`: default false
    /// - `PORT`: default 3000
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for a missing or short secret and for
    /// unparsable values.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Same as [`AppConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw_secret = lookup("SESSION_SECRET")
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::Missing { var: "SESSION_SECRET" })?;
        let secret = SessionSecret::new(raw_secret)?;

        let previous_secrets = lookup("SESSION_SECRET_PREVIOUS")
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(SessionSecret::new)
                    .collect::<Result<Vec<_>, _>>()
            })
            .transpose()?
            .unwrap_or_default();

        let deployment = parse_deployment(lookup("APP_ENV").as_deref())?;
        let secure = match lookup("COOKIE_SECURE") {
            Some(raw) => parse_bool(&raw).ok_or(ConfigError::Invalid { var: "COOKIE_SECURE", value: raw })?,
            None => deployment == Deployment::Production,
        };

        let ttl_secs = parse_or("SESSION_TTL_SECS", lookup("SESSION_TTL_SECS"), DEFAULT_SESSION_TTL_SECS)?;
        if ttl_secs <= CLOCK_SKEW_SECS || ttl_secs > MAX_SESSION_TTL_SECS {
            return Err(ConfigError::Invalid { var: "SESSION_TTL_SECS", value: ttl_secs.to_string() });
        }

        let cookie_name = lookup("SESSION_COOKIE_NAME")
            .map(|name| name.trim().to_owned())
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| DEFAULT_COOKIE_NAME.to_owned());

        let dev_session_bypass = match lookup("DEV_SESSION_BYPASS") {
            Some(raw) => parse_bool(&raw).ok_or(ConfigError::Invalid { var: "DEV_SESSION_BYPASS", value: raw })?,
            None => false,
        };

        Ok(Self {
            port: parse_or("PORT", lookup("PORT"), DEFAULT_PORT)?,
            deployment,
            session: SessionConfig {
                previous_secrets,
                cookie_name,
                secure,
                ttl: Duration::seconds(ttl_secs),
                ..SessionConfig::with_secret(secret)
            },
            posts_path: lookup("POSTS_FILE").map_or_else(|| PathBuf::from(DEFAULT_POSTS_FILE), PathBuf::from),
            dev_session_bypass,
        })
    }
}

pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn parse_deployment(raw: Option<&str>) -> Result<Deployment, ConfigError> {
    match raw.map(|s| s.trim().to_ascii_lowercase()).as_deref() {
        None | Some("" | "development" | "dev") => Ok(Deployment::Development),
        Some("production" | "prod") => Ok(Deployment::Production),
        Some(other) => Err(ConfigError::Invalid { var: "APP_ENV", value: other.to_owned() }),
    }
}

fn parse_or<T>(var: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
{
    match raw {
        Some(value) => value.trim().parse::<T>().map_err(|_| ConfigError::Invalid { var, value }),
        None => Ok(default),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
