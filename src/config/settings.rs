//! Configuration settings.
//!
//! Defines the main `Config` struct and environment variable loading logic.

use crate::config::{CookieError, Result};
use crate::core::cookie::header::checked_expiry;
use crate::core::cookie::{CookieOptions, Priority, SameSite};
use crate::security::crypto::{KeyRing, SigningAlgorithm};
use std::env;
use std::sync::Arc;
use std::time::Duration;
use time::OffsetDateTime;

fn get_env(key: &str) -> Result<String> {
    env::var(key)
        .map_err(|_| CookieError::Config(format!("{key} must be set in environment")))
}

fn get_env_opt(key: &str) -> Option<String> {
    env::var(key).ok().filter(|s| !s.is_empty())
}

fn get_env_or(key: &str, default: &str) -> String {
    get_env_opt(key).unwrap_or_else(|| default.to_string())
}

fn get_env_bool_or(key: &str, default: bool) -> bool {
    get_env_opt(key).map_or(default, |v| v.to_lowercase() == "true" || v == "1")
}

fn get_env_u64_opt(key: &str) -> Result<Option<u64>> {
    get_env_opt(key)
        .map(|s| {
            s.parse()
                .map_err(|_| CookieError::Config(format!("{key} must be a valid u64")))
        })
        .transpose()
}

fn parse_same_site(value: &str) -> Result<SameSite> {
    match value.to_lowercase().as_str() {
        "true" => Ok(SameSite::Strict),
        "false" => Ok(SameSite::Disabled),
        other => other.parse(),
    }
}

/// Application configuration loaded from environment.
#[derive(Debug, Clone)]
#[allow(clippy::struct_excessive_bools)]
pub struct Config {
    /// Signing secrets, newest first.
    pub keys: Vec<String>,
    /// HMAC digest for signatures.
    pub algorithm: SigningAlgorithm,
    /// Default cookie path.
    pub path: String,
    /// Default cookie domain.
    pub domain: Option<String>,
    /// Mark cookies `secure`.
    pub secure: bool,
    /// Mark cookies `httponly`.
    pub http_only: bool,
    pub same_site: SameSite,
    pub priority: Option<Priority>,
    /// Mark cookies `partitioned`.
    pub partitioned: bool,
    /// Default cookie lifetime.
    pub max_age: Option<Duration>,
    /// Logging format: "json" or "pretty".
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns `CookieError::Config` if `COOKIE_KEYS` is missing or holds no
    /// keys, if a numeric or algorithm variable cannot be parsed or
    /// `COOKIE_MAX_AGE_SECS` is too large to render as a date, and
    /// `CookieError::Validation` for an unknown `COOKIE_SAME_SITE` or
    /// `COOKIE_PRIORITY`.
    pub fn from_env() -> Result<Arc<Self>> {
        let keys: Vec<String> = get_env("COOKIE_KEYS")?
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        if keys.is_empty() {
            return Err(CookieError::Config(
                "COOKIE_KEYS must contain at least one key".to_string(),
            ));
        }

        let algorithm: SigningAlgorithm =
            get_env_or("COOKIE_SIGNING_ALGORITHM", "sha1").parse()?;
        let same_site = get_env_opt("COOKIE_SAME_SITE")
            .map_or(Ok(SameSite::Disabled), |v| parse_same_site(&v))?;
        let priority = get_env_opt("COOKIE_PRIORITY")
            .map(|v| v.parse::<Priority>())
            .transpose()?;
        let max_age = get_env_u64_opt("COOKIE_MAX_AGE_SECS")?.map(Duration::from_secs);
        let now = OffsetDateTime::now_utc();
        if max_age.is_some_and(|age| checked_expiry(now, age).is_none()) {
            return Err(CookieError::Config(
                "COOKIE_MAX_AGE_SECS reaches past year 9999".to_string(),
            ));
        }

        Ok(Arc::new(Self {
            keys,
            algorithm,
            path: get_env_or("COOKIE_PATH", "/"),
            domain: get_env_opt("COOKIE_DOMAIN"),
            secure: get_env_bool_or("COOKIE_SECURE", false),
            http_only: get_env_bool_or("COOKIE_HTTP_ONLY", true),
            same_site,
            priority,
            partitioned: get_env_bool_or("COOKIE_PARTITIONED", false),
            max_age,
            log_format: get_env_or("LOG_FORMAT", "json"),
        }))
    }

    /// Builds the key ring from the configured secrets.
    ///
    /// # Errors
    ///
    /// Returns `CookieError::Config` if no keys are configured.
    pub fn key_ring(&self) -> Result<KeyRing> {
        KeyRing::with_algorithm(&self.keys, self.algorithm)
    }

    /// Cookie attributes applied when a caller passes none of its own.
    #[must_use]
    pub fn default_options(&self) -> CookieOptions {
        CookieOptions {
            max_age: self.max_age,
            expires: None,
            path: Some(self.path.clone()),
            domain: self.domain.clone(),
            secure: self.secure,
            http_only: self.http_only,
            same_site: self.same_site,
            priority: self.priority,
            partitioned: self.partitioned,
            overwrite: false,
        }
    }
}
