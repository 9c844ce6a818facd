//! Test utilities and shared configuration.
//!
//! This module provides common helpers for unit and integration tests,
//! reducing duplication across the codebase.

#[cfg(any(test, feature = "testing"))]
use crate::config::Config;
#[cfg(any(test, feature = "testing"))]
use crate::core::codec::{SignedCookies, SignedPair};
#[cfg(any(test, feature = "testing"))]
use crate::core::cookie::SameSite;
#[cfg(any(test, feature = "testing"))]
use crate::security::crypto::{KeyRing, SigningAlgorithm};
#[cfg(any(test, feature = "testing"))]
use std::sync::Arc;

/// Creates a standard configuration for testing purposes.
///
/// This configuration has:
/// - Two keys (`current-key`, `previous-key`)
/// - HMAC-SHA1 signatures
/// - Default cookie attributes
#[cfg(any(test, feature = "testing"))]
#[must_use]
pub fn create_test_config() -> Arc<Config> {
    Arc::new(Config {
        keys: vec!["current-key".to_string(), "previous-key".to_string()],
        algorithm: SigningAlgorithm::Sha1,
        path: "/".to_string(),
        domain: None,
        secure: false,
        http_only: true,
        same_site: SameSite::Disabled,
        priority: None,
        partitioned: false,
        max_age: None,
        log_format: "pretty".to_string(),
    })
}

/// Creates a codec over a key ring built from `keys`.
///
/// # Panics
///
/// Panics if `keys` is empty.
#[cfg(any(test, feature = "testing"))]
#[must_use]
pub fn create_test_codec(keys: &[&str]) -> SignedCookies {
    SignedCookies::new(KeyRing::new(keys).expect("test key ring must not be empty"))
}

/// Renders `pair` the way a browser sends it back in a `Cookie` header.
#[cfg(any(test, feature = "testing"))]
#[must_use]
pub fn request_cookie_header(pair: &SignedPair) -> String {
    format!(
        "{}; {}",
        pair.value.to_name_value(),
        pair.signature.to_name_value()
    )
}
